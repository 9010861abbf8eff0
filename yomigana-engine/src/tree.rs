//! In-place annotation of node trees

use yomigana_core::RubySegment;

use crate::annotator::RubyAnnotator;

/// Capability surface the tree walker needs from a node structure.
///
/// Implementors expose whether a node bears text, whether its subtree must
/// be skipped, and how to replace a text leaf with annotated structure.
/// The walker is generic over this trait so hosts can adapt their own
/// document model; [`MarkupNode`] is the bundled concrete implementation.
pub trait AnnotatableNode: Sized {
    /// Text content, when this node is a text-bearing leaf.
    fn text(&self) -> Option<&str>;

    /// True when this subtree already is a ruby annotation.
    fn is_annotation_container(&self) -> bool;

    /// True for containers whose content is not prose (style/script-like).
    fn is_opaque_container(&self) -> bool;

    /// Replaces a text leaf with the annotated segment structure.
    fn replace_with_segments(&mut self, segments: Vec<RubySegment>);

    /// Mutable access to child nodes; empty for leaves.
    fn children_mut(&mut self) -> &mut [Self];
}

/// Depth-first annotation pass over `node`.
///
/// Ruby and opaque subtrees are skipped; a text leaf is replaced only when
/// annotation changed something, which is what makes a second pass over
/// the same tree a no-op.
pub(crate) fn walk<N: AnnotatableNode>(annotator: &RubyAnnotator, node: &mut N) {
    if node.is_annotation_container() || node.is_opaque_container() {
        return;
    }
    if let Some(text) = node.text() {
        let Some(segments) = annotator.annotate_to_segments(text) else {
            return;
        };
        if segments.iter().any(|segment| segment.reading.is_some()) {
            node.replace_with_segments(segments);
        }
        return;
    }
    for child in node.children_mut() {
        walk(annotator, child);
    }
}

/// Minimal markup document model for the tree walker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MarkupNode {
    /// A text leaf.
    Text(String),
    /// An element with a tag name and child nodes.
    Element {
        /// Lowercase tag name.
        tag: String,
        /// Child nodes in document order.
        children: Vec<MarkupNode>,
    },
}

impl MarkupNode {
    /// Creates a text leaf.
    pub fn text<T: Into<String>>(text: T) -> Self {
        MarkupNode::Text(text.into())
    }

    /// Creates an element node.
    pub fn element<T: Into<String>>(tag: T, children: Vec<MarkupNode>) -> Self {
        MarkupNode::Element {
            tag: tag.into(),
            children,
        }
    }

    /// Serializes the subtree to markup text.
    pub fn to_markup(&self) -> String {
        match self {
            MarkupNode::Text(text) => text.clone(),
            MarkupNode::Element { tag, children } => {
                let mut out = String::new();
                out.push('<');
                out.push_str(tag);
                out.push('>');
                for child in children {
                    out.push_str(&child.to_markup());
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
                out
            }
        }
    }

    fn tag_is(&self, names: &[&str]) -> bool {
        matches!(self, MarkupNode::Element { tag, .. } if names.contains(&tag.as_str()))
    }
}

impl AnnotatableNode for MarkupNode {
    fn text(&self) -> Option<&str> {
        match self {
            MarkupNode::Text(text) => Some(text),
            MarkupNode::Element { .. } => None,
        }
    }

    fn is_annotation_container(&self) -> bool {
        self.tag_is(&["ruby", "rb", "rt"])
    }

    fn is_opaque_container(&self) -> bool {
        self.tag_is(&["script", "style"])
    }

    fn replace_with_segments(&mut self, segments: Vec<RubySegment>) {
        let children = segments
            .into_iter()
            .map(|segment| match segment.reading {
                Some(reading) => MarkupNode::element(
                    "ruby",
                    vec![
                        MarkupNode::element("rb", vec![MarkupNode::Text(segment.text)]),
                        MarkupNode::element("rt", vec![MarkupNode::Text(reading)]),
                    ],
                ),
                None => MarkupNode::Text(segment.text),
            })
            .collect();
        *self = MarkupNode::element("span", children);
    }

    fn children_mut(&mut self) -> &mut [Self] {
        match self {
            MarkupNode::Text(_) => &mut [],
            MarkupNode::Element { children, .. } => children,
        }
    }
}

//! Engine configuration

use crate::markup::MarkupStyle;

/// Feature column carrying the reading in IPADIC-layout dictionaries.
///
/// Analyzer backends and their callers use this as the default when no
/// explicit column is configured.
pub const DEFAULT_READING_FIELD: usize = 7;

/// Configuration for [`RubyAnnotator`](crate::RubyAnnotator).
#[derive(Clone, Debug, Default)]
pub struct EngineConfig {
    /// Markup flavor used by the string-producing entry points.
    pub markup: MarkupStyle,
}

impl EngineConfig {
    /// Creates a builder with default values.
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }
}

/// Builder for [`EngineConfig`].
#[derive(Clone, Debug, Default)]
pub struct EngineConfigBuilder {
    config: EngineConfig,
}

impl EngineConfigBuilder {
    /// Sets the markup flavor.
    pub fn markup(mut self, markup: MarkupStyle) -> Self {
        self.config.markup = markup;
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> EngineConfig {
        self.config
    }
}

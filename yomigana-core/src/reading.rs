//! Removal of surface-spelled kana from a token's reading

use crate::segment::{Run, RunKind};

/// Strips from `reading` the kana the surface already spells out at its
/// head and tail, returning the residual owed to the ideographic runs.
///
/// The forward scan consumes leading kana runs while each one is a prefix
/// of the remaining reading, and stops at the first ideographic run or at
/// a kana run that does not match. The backward scan is symmetric with
/// suffixes (okurigana). Runs of other scripts neither consume reading nor
/// stop the scan.
///
/// An empty result means the surface accounts for the whole reading; the
/// caller renders the token unannotated rather than inventing a gloss.
pub fn trim_reading<'a>(runs: &[Run], reading: &'a str) -> &'a str {
    let mut rest = reading;
    for run in runs {
        match run.kind {
            RunKind::Ideographic => break,
            RunKind::Kana => match rest.strip_prefix(run.text.as_str()) {
                Some(stripped) => rest = stripped,
                None => break,
            },
            RunKind::Other => continue,
        }
    }
    for run in runs.iter().rev() {
        match run.kind {
            RunKind::Ideographic => break,
            RunKind::Kana => match rest.strip_suffix(run.text.as_str()) {
                Some(stripped) => rest = stripped,
                None => break,
            },
            RunKind::Other => continue,
        }
    }
    rest
}

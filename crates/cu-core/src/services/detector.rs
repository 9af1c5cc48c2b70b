use regex::Regex;

use crate::error::{Result, UpdaterError};

/// Decides from the text of `compose pull` whether any image was freshly
/// fetched.
///
/// The pull tool exits 0 whether or not anything changed, so the output text
/// is the only signal. Matching is case-sensitive; empty or unrecognised
/// output counts as "no update".
#[derive(Debug, Clone)]
pub struct UpdateDetector {
    markers: Vec<Regex>,
}

impl UpdateDetector {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        if patterns.is_empty() {
            return Err(UpdaterError::InvalidConfig(
                "update_markers must contain at least one pattern".into(),
            ));
        }
        let markers = patterns
            .iter()
            .map(|p| {
                Regex::new(p.as_ref()).map_err(|e| {
                    UpdaterError::InvalidConfig(format!(
                        "invalid update marker '{}': {e}",
                        p.as_ref()
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { markers })
    }

    pub fn detect(&self, pull_output: &str) -> bool {
        self.matched_marker(pull_output).is_some()
    }

    /// The first marker pattern found in `pull_output`.
    pub fn matched_marker(&self, pull_output: &str) -> Option<&str> {
        self.markers
            .iter()
            .find(|re| re.is_match(pull_output))
            .map(Regex::as_str)
    }
}

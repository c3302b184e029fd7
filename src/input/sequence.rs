//! Hidden button-sequence detection.

use derive_getters::Getters;
use tracing::{debug, instrument};

use super::buttons::Buttons;

/// The alignment-check sequence: up, up, down, down, left, right, left,
/// right, B, A on the left pad and action buttons.
pub const ALIGNMENT_CHECK_SEQUENCE: [Buttons; 10] = [
    Buttons::LU,
    Buttons::LU,
    Buttons::LD,
    Buttons::LD,
    Buttons::LL,
    Buttons::LR,
    Buttons::LL,
    Buttons::LR,
    Buttons::B,
    Buttons::A,
];

/// Sliding window of recent inputs compared against a target sequence.
///
/// The window always holds exactly as many entries as the target, oldest
/// first. Recording a code drops the oldest entry.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct SequenceMatcher {
    target: Vec<Buttons>,
    history: Vec<Buttons>,
}

impl SequenceMatcher {
    /// Creates a matcher for `target` with a zeroed history.
    #[instrument(skip(target), fields(len = target.len()))]
    pub fn new(target: Vec<Buttons>) -> Self {
        let history = vec![Buttons::NONE; target.len()];
        Self { target, history }
    }

    /// Appends `code`, evicting the oldest entry.
    #[instrument(skip(self))]
    pub fn record(&mut self, code: Buttons) {
        if self.history.is_empty() {
            return;
        }
        self.history.rotate_left(1);
        if let Some(newest) = self.history.last_mut() {
            *newest = code;
        }
    }

    /// True iff the window equals the target, element for element.
    ///
    /// An empty target never matches.
    #[instrument(skip(self))]
    pub fn matches(&self) -> bool {
        let matched = !self.target.is_empty() && self.history == self.target;
        if matched {
            debug!("Button sequence matched");
        }
        matched
    }

    /// Zeroes the whole window.
    #[instrument(skip(self))]
    pub fn reset_history(&mut self) {
        self.history.fill(Buttons::NONE);
    }
}

impl Default for SequenceMatcher {
    fn default() -> Self {
        Self::new(ALIGNMENT_CHECK_SEQUENCE.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_matcher_is_zeroed() {
        let matcher = SequenceMatcher::default();
        assert_eq!(matcher.history().len(), ALIGNMENT_CHECK_SEQUENCE.len());
        assert!(matcher.history().iter().all(|b| b.is_empty()));
        assert!(!matcher.matches());
    }

    #[test]
    fn test_record_slides_window() {
        let mut matcher = SequenceMatcher::new(vec![Buttons::A, Buttons::B, Buttons::A]);
        matcher.record(Buttons::LU);
        matcher.record(Buttons::LD);
        assert_eq!(
            matcher.history(),
            &vec![Buttons::NONE, Buttons::LU, Buttons::LD]
        );
        matcher.record(Buttons::LL);
        matcher.record(Buttons::LR);
        assert_eq!(
            matcher.history(),
            &vec![Buttons::LD, Buttons::LL, Buttons::LR]
        );
    }

    #[test]
    fn test_full_sequence_matches() {
        let mut matcher = SequenceMatcher::default();
        for code in ALIGNMENT_CHECK_SEQUENCE {
            assert!(!matcher.matches());
            matcher.record(code);
        }
        assert!(matcher.matches());
    }

    #[test]
    fn test_reset_history_clears_match() {
        let mut matcher = SequenceMatcher::default();
        for code in ALIGNMENT_CHECK_SEQUENCE {
            matcher.record(code);
        }
        matcher.reset_history();
        assert!(!matcher.matches());
        assert!(matcher.history().iter().all(|b| b.is_empty()));
    }

    #[test]
    fn test_empty_target_never_matches() {
        let mut matcher = SequenceMatcher::new(Vec::new());
        matcher.record(Buttons::A);
        assert!(matcher.history().is_empty());
        assert!(!matcher.matches());
    }
}

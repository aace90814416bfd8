//! Reply sanitization for policy compliance.
//!
//! Softens absolute guarantees in model output before it reaches the caller.
//! Pure text substitution: deterministic, infallible, no side effects on the
//! reply itself.

use regex::Regex;
use tracing::debug;

/// Softer language substituted for each risky phrase.
const SOFTENED_REPLACEMENT: &str = "this may help with";

/// Sanitizer applying ordered, case-insensitive phrase substitutions.
///
/// Patterns are compiled once at construction; [`sanitize`](Self::sanitize)
/// itself never fails.
pub struct ReplySanitizer {
    guarantee_patterns: Vec<Regex>,
    statistic_patterns: Vec<Regex>,
}

impl ReplySanitizer {
    /// Compile the substitution and detection patterns.
    ///
    /// # Errors
    /// Returns an error if any pattern is invalid.
    pub fn new() -> Result<Self, regex::Error> {
        // Applied in order; later patterns see already-substituted text.
        let guarantee_patterns = vec![
            Regex::new(r"(?i)this will fix")?,
            Regex::new(r"(?i)guaranteed?")?,
            Regex::new(r"(?i)100%")?,
            Regex::new(r"(?i)completely resolve")?,
            Regex::new(r"(?i)definitely work")?,
        ];

        // Statistic-shaped text ("N%", "N out of M"). Detection only: the
        // "100%" case is already covered above, and no stricter filtering is
        // applied on purpose. Kept as a hook so matches are at least visible
        // in debug logs.
        let statistic_patterns = vec![Regex::new(r"\d+%")?, Regex::new(r"\d+ out of \d+")?];

        Ok(Self {
            guarantee_patterns,
            statistic_patterns,
        })
    }

    /// Replace each risky phrase with softer language.
    ///
    /// Always returns a string; input without trigger phrases comes back
    /// unchanged.
    #[must_use]
    pub fn sanitize(&self, text: &str) -> String {
        let mut sanitized = text.to_string();
        for pattern in &self.guarantee_patterns {
            sanitized = pattern
                .replace_all(&sanitized, SOFTENED_REPLACEMENT)
                .into_owned();
        }

        if self.contains_statistic_claim(&sanitized) {
            debug!("reply contains statistic-shaped text after sanitization");
        }

        sanitized
    }

    /// Detection hook for statistic-shaped claims.
    ///
    /// Has no enforced effect on the text; see the pattern notes in
    /// [`new`](Self::new).
    #[must_use]
    pub fn contains_statistic_claim(&self, text: &str) -> bool {
        self.statistic_patterns
            .iter()
            .any(|pattern| pattern.is_match(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sanitizer() -> ReplySanitizer {
        ReplySanitizer::new().unwrap()
    }

    #[test]
    fn test_risky_phrases_are_softened() {
        let output = sanitizer().sanitize("This will fix your issue, I guarantee 100% success");
        let lower = output.to_lowercase();
        assert!(!lower.contains("this will fix"));
        assert!(!lower.contains("guarantee"));
        assert!(!lower.contains("100%"));
        assert_eq!(
            output,
            "this may help with your issue, I this may help with this may help with success"
        );
    }

    #[test]
    fn test_substitution_is_pattern_by_pattern() {
        // "this will fix" is replaced first, then "guarantee" inside the
        // partially substituted text.
        let output = sanitizer().sanitize("I guarantee this will fix it");
        assert_eq!(output, "I this may help with this may help with it");
    }

    #[test]
    fn test_case_insensitive_matching() {
        let output = sanitizer().sanitize("GUARANTEED to COMPLETELY RESOLVE this");
        assert_eq!(output, "this may help with to this may help with this");
    }

    #[test]
    fn test_remaining_patterns() {
        let output = sanitizer().sanitize("It will definitely work");
        assert_eq!(output, "It will this may help with");
    }

    #[test]
    fn test_clean_text_is_unchanged() {
        let text = "Could you share your order number so I can take a look?";
        assert_eq!(sanitizer().sanitize(text), text);
    }

    #[test]
    fn test_idempotent_on_trigger_free_text() {
        let s = sanitizer();
        let once = s.sanitize("I guarantee this will fix it");
        // The substituted output contains no trigger phrases.
        assert_eq!(s.sanitize(&once), once);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(sanitizer().sanitize(""), "");
    }

    #[test]
    fn test_statistic_detection_has_no_effect_on_text() {
        let s = sanitizer();
        let text = "9 out of 10 customers rated us 95%";
        assert!(s.contains_statistic_claim(text));
        assert_eq!(s.sanitize(text), text);
    }

    #[test]
    fn test_hundred_percent_is_still_softened() {
        // "100%" is the one statistic shape with an enforced substitution.
        let s = sanitizer();
        assert_eq!(s.sanitize("100% satisfied"), "this may help with satisfied");
    }
}

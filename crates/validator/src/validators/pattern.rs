//! Regular-expression validator

use regex::Regex;

use crate::message::formats;

crate::payload! {
    /// Payload of [`Pattern`].
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct PatternViolation {
        "pattern" => pub pattern: String,
        "value" => pub value: String,
    }
}

crate::rule! {
    /// Validates that a string matches a regular expression.
    ///
    /// The expression is not anchored; use `^...$` to match the whole input.
    pub Pattern { re: Regex } for str;
    rule(self, input) { self.re.is_match(input) }
    payload(self, input) {
        PatternViolation {
            pattern: self.re.as_str().to_owned(),
            value: input.to_owned(),
        }
    }
    format = formats::PATTERN;
    fn pattern(re: Regex);
}

/// Compiles `re` into a [`Pattern`].
///
/// # Panics
///
/// Panics if `re` is not a valid regular expression. Use
/// [`try_pattern_str`] for expressions that are not known at compile time.
#[must_use]
pub fn pattern_str(re: &str) -> Pattern {
    match try_pattern_str(re) {
        Ok(p) => p,
        Err(e) => panic!("invalid pattern `{re}`: {e}"),
    }
}

/// Compiles `re` into a [`Pattern`], reporting a malformed expression.
pub fn try_pattern_str(re: &str) -> Result<Pattern, regex::Error> {
    Regex::new(re).map(Pattern::new)
}

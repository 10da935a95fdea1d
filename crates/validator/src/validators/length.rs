//! String length validators
//!
//! Length is measured in Unicode scalar values (chars).

use crate::message::formats;

crate::payload! {
    /// Payload of the length rules.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct LengthViolation {
        "value" => pub value: String,
        "length" => pub length: usize,
        "min" => pub min: Option<usize>,
        "max" => pub max: Option<usize>,
    }
}

impl LengthViolation {
    fn new(value: &str, min: Option<usize>, max: Option<usize>) -> Self {
        Self {
            value: value.to_owned(),
            length: value.chars().count(),
            min,
            max,
        }
    }
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::rule! {
    /// Validates that a string has at least `min` chars.
    pub MinLength { min: usize } for str;
    rule(self, input) { input.chars().count() >= self.min }
    payload(self, input) { LengthViolation::new(input, Some(self.min), None) }
    format = formats::MIN_LENGTH;
    fn min_length(min: usize);
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::rule! {
    /// Validates that a string has at most `max` chars.
    pub MaxLength { max: usize } for str;
    rule(self, input) { input.chars().count() <= self.max }
    payload(self, input) { LengthViolation::new(input, None, Some(self.max)) }
    format = formats::MAX_LENGTH;
    fn max_length(max: usize);
}

// ============================================================================
// LENGTH RANGE
// ============================================================================

crate::rule! {
    /// Validates that a string has between `min` and `max` chars, inclusive.
    pub Length { min: usize, max: usize } for str;
    rule(self, input) {
        let n = input.chars().count();
        n >= self.min && n <= self.max
    }
    payload(self, input) { LengthViolation::new(input, Some(self.min), Some(self.max)) }
    format = formats::LENGTH;
    fn length(min: usize, max: usize);
}

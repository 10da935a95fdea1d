//! Ordered-value validators: `min`, `max` and `in_range`.

use crate::message::{formats, ArgValue, Argument, Payload, ToArg};

/// Payload of the range rules.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeViolation<T> {
    pub value: T,
    pub min: Option<T>,
    pub max: Option<T>,
}

impl<T: Argument> RangeViolation<T> {
    fn new(value: &T, min: Option<&T>, max: Option<&T>) -> Self {
        Self {
            value: value.clone(),
            min: min.cloned(),
            max: max.cloned(),
        }
    }
}

impl<T: Argument> Payload for RangeViolation<T> {
    fn arg(&self, name: &str) -> Option<ArgValue> {
        match name {
            "value" => Some(self.value.to_arg()),
            "min" => Some(self.min.to_arg()),
            "max" => Some(self.max.to_arg()),
            _ => None,
        }
    }
}

crate::rule! {
    /// Validates that a value is no less than `min`.
    pub Min<T: PartialOrd + Argument> { min: T } for T;
    rule(self, input) { *input >= self.min }
    payload(self, input) { RangeViolation::new(input, Some(&self.min), None) }
    format = formats::MIN;
    fn min(min: T);
}

crate::rule! {
    /// Validates that a value is no greater than `max`.
    pub Max<T: PartialOrd + Argument> { max: T } for T;
    rule(self, input) { *input <= self.max }
    payload(self, input) { RangeViolation::new(input, None, Some(&self.max)) }
    format = formats::MAX;
    fn max(max: T);
}

crate::rule! {
    /// Validates that a value lies in `min ..= max`.
    pub InRange<T: PartialOrd + Argument> { min: T, max: T } for T;
    rule(self, input) { *input >= self.min && *input <= self.max }
    payload(self, input) { RangeViolation::new(input, Some(&self.min), Some(&self.max)) }
    format = formats::IN_RANGE;
    fn in_range(min: T, max: T);
}

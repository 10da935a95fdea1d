//! Set-membership validator

use crate::message::{formats, ArgValue, Argument, Payload, ToArg};

/// Payload of [`OneOf`].
#[derive(Debug, Clone, PartialEq)]
pub struct OneOfViolation<T> {
    pub value: T,
    pub valid_values: Vec<T>,
}

impl<T: Argument> Payload for OneOfViolation<T> {
    fn arg(&self, name: &str) -> Option<ArgValue> {
        match name {
            "value" => Some(self.value.to_arg()),
            "validValues" => Some(self.valid_values.to_arg()),
            _ => None,
        }
    }
}

crate::rule! {
    /// Validates that a value is one of `valid_values`.
    pub OneOf<T: PartialEq + Argument> { valid_values: Vec<T> } for T;
    rule(self, input) { self.valid_values.contains(input) }
    payload(self, input) {
        OneOfViolation {
            value: input.clone(),
            valid_values: self.valid_values.clone(),
        }
    }
    format = formats::ONE_OF;
    fn one_of(valid_values: Vec<T>);
}

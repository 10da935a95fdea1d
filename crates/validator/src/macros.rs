//! Macros for declaring rules and payloads with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`rule!`] : Declare a leaf rule (struct + `Validate` + `WithFormat` + factory fn)
//! - [`payload!`] : Declare a violation payload with tagged members
//! - [`join!`] : Bundle validators of the same input into a `Join`
//!
//! # Examples
//!
//! ```rust,ignore
//! use sieve_validator::{payload, rule};
//! use sieve_validator::message::Format;
//!
//! payload! {
//!     #[derive(Debug)]
//!     pub struct EvenViolation {
//!         "value" => pub value: i64,
//!     }
//! }
//!
//! const EVEN: Format = Format::from_static("must be even, got {0}", &[Arg::named("value")]);
//!
//! rule! {
//!     pub Even { strict: bool } for i64;
//!     rule(self, input) { input % 2 == 0 }
//!     payload(self, input) { EvenViolation { value: *input } }
//!     format = EVEN;
//!     fn even(strict: bool);
//! }
//! ```

// ============================================================================
// RULE MACRO
// ============================================================================

/// Declares a leaf rule: struct definition, `Validate` and `WithFormat`
/// implementations, constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied and a private `format` field
/// holding the default format is added. The `payload` block runs only when
/// the `rule` block returns `false`.
///
/// # Variants
///
/// **Struct with fields**:
/// ```rust,ignore
/// rule! {
///     pub MinLength { min: usize } for str;
///     rule(self, input) { input.chars().count() >= self.min }
///     payload(self, input) { LengthViolation::new(input, Some(self.min), None) }
///     format = formats::MIN_LENGTH;
///     fn min_length(min: usize);
/// }
/// ```
///
/// **Generic struct** (bounds must be simple identifiers):
/// ```rust,ignore
/// rule! {
///     pub Min<T: PartialOrd + Argument> { min: T } for T;
///     rule(self, input) { *input >= self.min }
///     payload(self, input) { RangeViolation::new(input.clone(), Some(self.min.clone()), None) }
///     format = formats::MIN;
///     fn min(min: T);
/// }
/// ```
#[macro_export]
macro_rules! rule {
    // ── Struct with fields + factory fn ──────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        payload($self2:ident, $pinp:ident) $payload:block
        format = $format:expr;
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
            format: $crate::message::Format,
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field,)+ format: $format }
            }
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(
                &$self_,
                ctx: &$crate::foundation::Context,
                $inp: &Self::Input,
            ) -> ::std::result::Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $pinp = $inp;
                    let payload = $payload;
                    Err($crate::foundation::ValidationError::violation(ctx, payload, &$self_.format))
                }
            }
        }

        impl $crate::foundation::WithFormat for $name {
            fn format(&self) -> &$crate::message::Format {
                &self.format
            }

            fn replace_format(mut self, format: $crate::message::Format) -> Self {
                self.format = format;
                self
            }
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Generic struct + factory fn ──────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        payload($self2:ident, $pinp:ident) $payload:block
        format = $format:expr;
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name<$gen> {
            $(pub $field: $fty,)+
            format: $crate::message::Format,
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $name<$gen> {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field,)+ format: $format }
            }
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $crate::foundation::Validate for $name<$gen> {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(
                &$self_,
                ctx: &$crate::foundation::Context,
                $inp: &Self::Input,
            ) -> ::std::result::Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $pinp = $inp;
                    let payload = $payload;
                    Err($crate::foundation::ValidationError::violation(ctx, payload, &$self_.format))
                }
            }
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $crate::foundation::WithFormat for $name<$gen> {
            fn format(&self) -> &$crate::message::Format {
                &self.format
            }

            fn replace_format(mut self, format: $crate::message::Format) -> Self {
                self.format = format;
                self
            }
        }

        #[must_use]
        $vis fn $factory<$gen: $first_bound $(+ $rest_bound)*>($($farg: $faty),*) -> $name<$gen> {
            $name::new($($farg),*)
        }
    };
}

// ============================================================================
// PAYLOAD MACRO
// ============================================================================

/// Declares a payload struct whose members are tagged with argument names.
///
/// Every tagged member must implement [`ToArg`](crate::message::ToArg). The
/// struct must derive `Debug`.
///
/// ```rust,ignore
/// payload! {
///     #[derive(Debug, Clone)]
///     pub struct RangeHit {
///         "value" => pub value: i64,
///         "min" => pub min: i64,
///     }
/// }
/// ```
#[macro_export]
macro_rules! payload {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $(#[$fmeta:meta])* $tag:literal => $fvis:vis $field:ident : $fty:ty ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $( $(#[$fmeta])* $fvis $field: $fty, )*
        }

        impl $crate::message::Payload for $name {
            fn arg(&self, name: &str) -> ::std::option::Option<$crate::message::ArgValue> {
                match name {
                    $( $tag => ::std::option::Option::Some($crate::message::ToArg::to_arg(&self.$field)), )*
                    _ => ::std::option::Option::None,
                }
            }
        }
    };
}

// ============================================================================
// JOIN MACRO
// ============================================================================

/// Bundles validators into a [`Join`](crate::combinators::Join).
///
/// ```rust,ignore
/// let v = join![length(5, 20), pattern_str("^[a-z0-9]*$")];
/// ```
#[macro_export]
macro_rules! join {
    ($($validator:expr),* $(,)?) => {
        $crate::combinators::Join::new()$(.with($validator))*
    };
}

#[cfg(test)]
mod tests {
    use crate::foundation::{Context, Validate, ValidationError, WithFormat};
    use crate::message::{Arg, Argument, Format, by_name};

    crate::payload! {
        #[derive(Debug, Clone)]
        pub struct ParityViolation {
            "value" => pub value: i64,
            "parity" => pub parity: &'static str,
        }
    }

    const PARITY_ARGS: &[Arg] = &[Arg::named("value"), Arg::named("parity")];
    const PARITY: Format = Format::from_static("{0} is not {1}", PARITY_ARGS);

    crate::rule! {
        pub Parity { even: bool } for i64;
        rule(self, input) { (input % 2 == 0) == self.even }
        payload(self, input) {
            ParityViolation { value: *input, parity: if self.even { "even" } else { "odd" } }
        }
        format = PARITY;
        fn parity(even: bool);
    }

    crate::rule! {
        pub AtLeast<T: PartialOrd + Argument> { floor: T } for T;
        rule(self, input) { *input >= self.floor }
        payload(self, input) { ParityViolation { value: 0, parity: "floor" } }
        format = PARITY;
        fn at_least(floor: T);
    }

    #[test]
    fn test_rule_macro_renders_payload() {
        let ctx = Context::new();
        assert!(parity(true).validate(&ctx, &4).is_ok());
        let err = parity(true).validate(&ctx, &3).unwrap_err();
        assert_eq!(err.to_string(), "3 is not even");
    }

    #[test]
    fn test_rule_macro_with_format() {
        let ctx = Context::new();
        let v = parity(false).with_format("want {0}", [by_name("parity")]);
        assert_eq!(v.validate(&ctx, &2).unwrap_err().to_string(), "want odd");
        assert_eq!(parity(false).format(), &PARITY);
    }

    #[test]
    fn test_generic_rule_macro() {
        let ctx = Context::new();
        assert!(at_least(3u8).validate(&ctx, &5).is_ok());
        assert!(at_least(3u8).validate(&ctx, &1).is_err());
    }

    #[test]
    fn test_join_macro() {
        let ctx = Context::new();
        let v = crate::join![parity(true), parity(true)];
        let err: ValidationError = v.validate(&ctx, &1).unwrap_err();
        assert_eq!(err.messages(), vec!["1 is not even", "1 is not even"]);
    }
}

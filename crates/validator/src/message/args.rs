//! Named arguments extracted from violation payloads.
//!
//! A [`Payload`] is the typed record a failing rule builds. Each of its
//! members is tagged with a symbolic name; an [`Arg`] selector picks one of
//! them by name and turns it into an [`ArgValue`] the printer can substitute
//! into a template.

use std::any::Any;
use std::borrow::Cow;
use std::fmt;

// ============================================================================
// ARGUMENT VALUE
// ============================================================================

/// A value ready to be substituted into a message template.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    /// The selector named an argument the payload does not carry.
    Missing,
    Bool(bool),
    Int(i128),
    Float(f64),
    Text(String),
    /// Rendered as `[a b c]`.
    List(Vec<ArgValue>),
}

impl ArgValue {
    /// Returns true when the selector could not be resolved.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Captures any value through its `Debug` representation.
    pub fn debug<T: fmt::Debug + ?Sized>(value: &T) -> Self {
        Self::Text(format!("{value:?}"))
    }

    /// Captures a validated value for `{value}` selectors.
    ///
    /// Strings, numbers and booleans keep their plain rendering; anything
    /// else goes through [`debug`](Self::debug).
    pub fn capture<T: fmt::Debug + Any>(value: &T) -> Self {
        let any: &dyn Any = value;
        if let Some(s) = any.downcast_ref::<String>() {
            return s.to_arg();
        }
        if let Some(s) = any.downcast_ref::<&'static str>() {
            return s.to_arg();
        }
        if let Some(s) = any.downcast_ref::<Box<str>>() {
            return s.to_arg();
        }
        if let Some(s) = any.downcast_ref::<Cow<'static, str>>() {
            return s.to_arg();
        }
        if let Some(c) = any.downcast_ref::<char>() {
            return c.to_arg();
        }
        if let Some(b) = any.downcast_ref::<bool>() {
            return b.to_arg();
        }
        if let Some(x) = any.downcast_ref::<f64>() {
            return x.to_arg();
        }
        if let Some(x) = any.downcast_ref::<f32>() {
            return x.to_arg();
        }
        capture_int(any).unwrap_or_else(|| Self::debug(value))
    }
}

fn capture_int(any: &dyn Any) -> Option<ArgValue> {
    macro_rules! ints {
        ($($ty:ty),*) => {
            $(
                if let Some(n) = any.downcast_ref::<$ty>() {
                    return Some(n.to_arg());
                }
            )*
        };
    }
    ints!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);
    None
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("<nil>"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

// ============================================================================
// CONVERSION
// ============================================================================

/// Conversion of a payload member into an [`ArgValue`].
pub trait ToArg {
    fn to_arg(&self) -> ArgValue;
}

macro_rules! int_to_arg {
    ($($t:ty),*) => {
        $(
            impl ToArg for $t {
                fn to_arg(&self) -> ArgValue {
                    ArgValue::Int(i128::from(*self))
                }
            }
        )*
    };
}

int_to_arg!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl ToArg for usize {
    fn to_arg(&self) -> ArgValue {
        ArgValue::Int(*self as i128)
    }
}

impl ToArg for isize {
    fn to_arg(&self) -> ArgValue {
        ArgValue::Int(*self as i128)
    }
}

impl ToArg for f32 {
    fn to_arg(&self) -> ArgValue {
        ArgValue::Float(f64::from(*self))
    }
}

impl ToArg for f64 {
    fn to_arg(&self) -> ArgValue {
        ArgValue::Float(*self)
    }
}

impl ToArg for bool {
    fn to_arg(&self) -> ArgValue {
        ArgValue::Bool(*self)
    }
}

impl ToArg for char {
    fn to_arg(&self) -> ArgValue {
        ArgValue::Text(self.to_string())
    }
}

impl ToArg for str {
    fn to_arg(&self) -> ArgValue {
        ArgValue::Text(self.to_owned())
    }
}

impl ToArg for String {
    fn to_arg(&self) -> ArgValue {
        ArgValue::Text(self.clone())
    }
}

impl ToArg for Cow<'_, str> {
    fn to_arg(&self) -> ArgValue {
        ArgValue::Text(self.to_string())
    }
}

impl ToArg for ArgValue {
    fn to_arg(&self) -> ArgValue {
        self.clone()
    }
}

impl ToArg for regex::Regex {
    fn to_arg(&self) -> ArgValue {
        ArgValue::Text(self.as_str().to_owned())
    }
}

impl<T: ToArg> ToArg for Option<T> {
    fn to_arg(&self) -> ArgValue {
        self.as_ref().map_or(ArgValue::Missing, ToArg::to_arg)
    }
}

impl<T: ToArg> ToArg for [T] {
    fn to_arg(&self) -> ArgValue {
        ArgValue::List(self.iter().map(ToArg::to_arg).collect())
    }
}

impl<T: ToArg> ToArg for Vec<T> {
    fn to_arg(&self) -> ArgValue {
        self.as_slice().to_arg()
    }
}

impl<T: ToArg + ?Sized> ToArg for &T {
    fn to_arg(&self) -> ArgValue {
        (**self).to_arg()
    }
}

impl<T: ToArg + ?Sized> ToArg for Box<T> {
    fn to_arg(&self) -> ArgValue {
        (**self).to_arg()
    }
}

/// Bound shared by the generic leaf rules: the value can be carried in a
/// payload and rendered as an argument.
pub trait Argument: ToArg + Clone + fmt::Debug + Send + Sync + 'static {}

impl<T> Argument for T where T: ToArg + Clone + fmt::Debug + Send + Sync + 'static {}

// ============================================================================
// PAYLOAD
// ============================================================================

/// The typed record attached to one failing rule application.
///
/// Use the [`payload!`](crate::payload) macro to derive it from a struct with
/// tagged members.
pub trait Payload: Any + fmt::Debug + Send + Sync {
    /// Returns the member tagged `name`, if this payload carries one.
    fn arg(&self, name: &str) -> Option<ArgValue>;
}

// ============================================================================
// ARGUMENT SELECTOR
// ============================================================================

/// Selects one template argument out of a payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// The payload member tagged with this name.
    Named(Cow<'static, str>),
    /// A fixed value, independent of the payload.
    Literal(ArgValue),
}

impl Arg {
    /// Selector usable in `const` format tables.
    #[must_use]
    pub const fn named(name: &'static str) -> Self {
        Self::Named(Cow::Borrowed(name))
    }

    /// A fixed argument.
    pub fn literal(value: impl ToArg) -> Self {
        Self::Literal(value.to_arg())
    }

    /// Resolves the selector against `payload`.
    pub fn value_of(&self, payload: &dyn Payload) -> ArgValue {
        match self {
            Self::Named(name) => payload.arg(name).unwrap_or_else(|| {
                tracing::warn!(arg = %name, ?payload, "payload does not carry the selected argument");
                ArgValue::Missing
            }),
            Self::Literal(value) => value.clone(),
        }
    }
}

/// Selects the payload member tagged `name`.
pub fn by_name(name: impl Into<Cow<'static, str>>) -> Arg {
    Arg::Named(name.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Sample {
        body: String,
        limit: usize,
    }

    impl Payload for Sample {
        fn arg(&self, name: &str) -> Option<ArgValue> {
            match name {
                "body" => Some(self.body.to_arg()),
                "limit" => Some(self.limit.to_arg()),
                _ => None,
            }
        }
    }

    #[test]
    fn test_named_selector_resolves_member() {
        let payload = Sample {
            body: "hello".into(),
            limit: 3,
        };
        assert_eq!(
            by_name("body").value_of(&payload),
            ArgValue::Text("hello".into())
        );
        assert_eq!(Arg::named("limit").value_of(&payload), ArgValue::Int(3));
    }

    #[test]
    fn test_capture_keeps_plain_rendering() {
        assert_eq!(ArgValue::capture(&"short".to_owned()), ArgValue::Text("short".into()));
        assert_eq!(ArgValue::capture(&"short"), ArgValue::Text("short".into()));
        assert_eq!(ArgValue::capture(&80u16), ArgValue::Int(80));
        assert_eq!(ArgValue::capture(&true), ArgValue::Bool(true));
        assert_eq!(ArgValue::capture(&vec![1, 2]), ArgValue::Text("[1, 2]".into()));
    }

    #[test]
    fn test_unknown_selector_is_missing() {
        let payload = Sample {
            body: String::new(),
            limit: 0,
        };
        let value = by_name("nope").value_of(&payload);
        assert!(value.is_missing());
        assert_eq!(value.to_string(), "<nil>");
    }

    #[test]
    fn test_literal_ignores_payload() {
        let payload = Sample {
            body: String::new(),
            limit: 0,
        };
        assert_eq!(Arg::literal(7u8).value_of(&payload), ArgValue::Int(7));
    }

    #[test]
    fn test_list_display() {
        let list = vec!["a", "b"].to_arg();
        assert_eq!(list.to_string(), "[a b]");
        assert_eq!(Vec::<u8>::new().to_arg().to_string(), "[]");
    }

    #[test]
    fn test_option_display() {
        assert_eq!(Some(5u32).to_arg().to_string(), "5");
        assert!(None::<u32>.to_arg().is_missing());
    }
}

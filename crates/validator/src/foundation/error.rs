//! The failure type returned by every validator.
//!
//! A [`ValidationError`] is either a rendered leaf [`Violation`] or one of the
//! aggregate shapes produced by the combinators. Aggregates never hold zero
//! entries; a combinator with nothing to report returns `Ok(())`.

use std::any::Any;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::combinators::{JoinError, MapError, RecordError, SliceError};
use crate::foundation::Context;
use crate::message::{ArgValue, Format, Payload, ToArg};

// ============================================================================
// VIOLATION
// ============================================================================

/// A single rendered rule failure.
///
/// The payload that produced the message stays attached and can be narrowed
/// back to its concrete type with [`Violation::payload`].
#[derive(Clone)]
pub struct Violation {
    code: Option<Cow<'static, str>>,
    message: String,
    payload: Option<Arc<dyn Payload>>,
}

impl Violation {
    /// Renders `payload` with `format` under `ctx`.
    pub fn render<P: Payload>(ctx: &Context, payload: P, format: &Format) -> Self {
        let message = format.render(ctx, &payload);
        Self {
            code: Some(Cow::Owned(format.key().to_owned())),
            message,
            payload: Some(Arc::new(payload)),
        }
    }

    /// A violation with a fixed message and no payload.
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            payload: None,
        }
    }

    /// The template key the message was rendered from.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Narrows the attached payload to `P`.
    #[must_use]
    pub fn payload<P: Payload>(&self) -> Option<&P> {
        let payload: &dyn Any = self.payload.as_deref()?;
        payload.downcast_ref::<P>()
    }

    #[must_use]
    pub fn raw_payload(&self) -> Option<&dyn Payload> {
        self.payload.as_deref()
    }
}

impl fmt::Debug for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Violation")
            .field("code", &self.code)
            .field("message", &self.message)
            .field("payload", &self.payload)
            .finish()
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl ToArg for Violation {
    fn to_arg(&self) -> ArgValue {
        ArgValue::Text(self.message.clone())
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// Error returned by [`Validate::validate`](super::Validate::validate).
///
/// Every variant displays its leaves one per line, in insertion order.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// A leaf rule failed.
    #[error("{0}")]
    Violation(Violation),

    /// Failures collected by a [`Join`](crate::combinators::Join).
    #[error("{0}")]
    Join(JoinError),

    /// Per-index failures of a [`Slice`](crate::combinators::Slice).
    #[error("{0}")]
    Slice(SliceError),

    /// Per-key failures of a [`Map`](crate::combinators::Map).
    #[error("{0}")]
    Map(MapError),

    /// Per-field failures of a [`Record`](crate::combinators::Record).
    #[error("{0}")]
    Record(RecordError),
}

impl ValidationError {
    /// Renders a violation of `payload` with `format` under `ctx`.
    pub fn violation<P: Payload>(ctx: &Context, payload: P, format: &Format) -> Self {
        Self::Violation(Violation::render(ctx, payload, format))
    }

    /// A leaf with a fixed message, for user rules that render their own text.
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Violation(Violation::message_only(message))
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Violation(_))
    }

    #[must_use]
    pub fn as_violation(&self) -> Option<&Violation> {
        match self {
            Self::Violation(v) => Some(v),
            _ => None,
        }
    }

    /// The immediate children of an aggregate. Empty for a leaf.
    #[must_use]
    pub fn children(&self) -> Vec<&Self> {
        match self {
            Self::Violation(_) => Vec::new(),
            Self::Join(e) => e.errors().iter().collect(),
            Self::Slice(e) => e.errors().values().collect(),
            Self::Map(e) => e.errors().values().collect(),
            Self::Record(e) => e.errors().values().collect(),
        }
    }

    /// The deepest leaves in order.
    #[must_use]
    pub fn flatten(&self) -> Vec<&Violation> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Violation>) {
        match self {
            Self::Violation(v) => out.push(v),
            _ => {
                for child in self.children() {
                    child.collect_leaves(out);
                }
            }
        }
    }

    /// Owned form of [`flatten`](Self::flatten).
    #[must_use]
    pub fn into_leaves(self) -> Vec<Violation> {
        let mut leaves = Vec::new();
        self.push_leaves(&mut leaves);
        leaves
    }

    fn push_leaves(self, out: &mut Vec<Violation>) {
        match self {
            Self::Violation(v) => out.push(v),
            Self::Join(e) => e.into_errors().into_iter().for_each(|c| c.push_leaves(out)),
            Self::Slice(e) => e.into_errors().into_values().for_each(|c| c.push_leaves(out)),
            Self::Map(e) => e.into_errors().into_values().for_each(|c| c.push_leaves(out)),
            Self::Record(e) => e.into_errors().into_values().for_each(|c| c.push_leaves(out)),
        }
    }

    /// Leaf messages in order.
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        self.flatten().into_iter().map(Violation::message).collect()
    }
}

impl From<Violation> for ValidationError {
    fn from(v: Violation) -> Self {
        Self::Violation(v)
    }
}

impl ToArg for ValidationError {
    fn to_arg(&self) -> ArgValue {
        ArgValue::Text(self.to_string())
    }
}

//! Message formats: a template key plus the argument selectors that fill it.

use std::borrow::Cow;

use smallvec::SmallVec;

use super::args::{Arg, ArgValue, Payload};
use crate::foundation::Context;

/// English templates, used as catalog keys.
pub mod keys {
    pub const REQUIRED: &str = "cannot be the zero value";
    pub const ONE_OF: &str = "must be a valid value in {0}";
    pub const PATTERN: &str = "must match the pattern /{0}/";
    pub const CUSTOM: &str = "must be a valid value";
    pub const MIN_LENGTH: &str = "the length must be no less than {0}";
    pub const MAX_LENGTH: &str = "the length must be no greater than {0}";
    pub const LENGTH: &str = "the length must be in range({0} ... {1})";
    pub const MIN: &str = "must be no less than {0}";
    pub const MAX: &str = "must be no greater than {0}";
    pub const IN_RANGE: &str = "must be in range({0} ... {1})";
    pub const FIELD: &str = "{0}: {1}";
    pub const MAP_KEY: &str = "{0}: {1}";
}

/// Default formats of the built-in rules.
pub mod formats {
    use super::{keys, Arg, Format};

    const NO_ARGS: &[Arg] = &[];
    const VALID_VALUES: &[Arg] = &[Arg::named("validValues")];
    const PATTERN_ARGS: &[Arg] = &[Arg::named("pattern")];
    const MIN_ARGS: &[Arg] = &[Arg::named("min")];
    const MAX_ARGS: &[Arg] = &[Arg::named("max")];
    const RANGE_ARGS: &[Arg] = &[Arg::named("min"), Arg::named("max")];
    const FIELD_ARGS: &[Arg] = &[Arg::named("name"), Arg::named("error")];
    const MAP_KEY_ARGS: &[Arg] = &[Arg::named("key"), Arg::named("error")];

    pub const REQUIRED: Format = Format::from_static(keys::REQUIRED, NO_ARGS);
    pub const ONE_OF: Format = Format::from_static(keys::ONE_OF, VALID_VALUES);
    pub const PATTERN: Format = Format::from_static(keys::PATTERN, PATTERN_ARGS);
    pub const CUSTOM: Format = Format::from_static(keys::CUSTOM, NO_ARGS);
    pub const MIN_LENGTH: Format = Format::from_static(keys::MIN_LENGTH, MIN_ARGS);
    pub const MAX_LENGTH: Format = Format::from_static(keys::MAX_LENGTH, MAX_ARGS);
    pub const LENGTH: Format = Format::from_static(keys::LENGTH, RANGE_ARGS);
    pub const MIN: Format = Format::from_static(keys::MIN, MIN_ARGS);
    pub const MAX: Format = Format::from_static(keys::MAX, MAX_ARGS);
    pub const IN_RANGE: Format = Format::from_static(keys::IN_RANGE, RANGE_ARGS);
    pub const FIELD: Format = Format::from_static(keys::FIELD, FIELD_ARGS);
    pub const MAP_KEY: Format = Format::from_static(keys::MAP_KEY, MAP_KEY_ARGS);
}

/// A message key and the ordered selectors for its placeholders.
#[derive(Debug, Clone, PartialEq)]
pub struct Format {
    key: Cow<'static, str>,
    args: Cow<'static, [Arg]>,
}

impl Format {
    #[must_use]
    pub const fn from_static(key: &'static str, args: &'static [Arg]) -> Self {
        Self {
            key: Cow::Borrowed(key),
            args: Cow::Borrowed(args),
        }
    }

    pub fn new(key: impl Into<Cow<'static, str>>, args: impl IntoIterator<Item = Arg>) -> Self {
        Self {
            key: key.into(),
            args: Cow::Owned(args.into_iter().collect()),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    /// Resolves the selectors against `payload` and prints through the
    /// context's printer.
    #[must_use]
    pub fn render(&self, ctx: &Context, payload: &dyn Payload) -> String {
        let values: SmallVec<[ArgValue; 4]> =
            self.args.iter().map(|arg| arg.value_of(payload)).collect();
        ctx.printer().print(&self.key, &values)
    }
}

//! Structural combinators
//!
//! - [`Join`]: every child against the same value
//! - [`Slice`]: rules per element, errors keyed by index
//! - [`Map`]: rules per key or for any key, errors keyed by map key
//! - [`Optional`]: rules on the contents of `Some`
//! - [`Record`]: rules per bound field, errors keyed by field name

pub mod error;
pub mod field;
pub mod join;
pub mod map;
pub mod optional;
pub mod record;
pub mod slice;

pub use error::{FieldViolation, JoinError, MapError, MapKey, MapKeyViolation, RecordError, SliceError};
pub use field::{FieldBinder, FieldKey};
pub use join::{Join, join};
pub use map::{Map, MapInput, map};
pub use optional::{Optional, optional, pointer};
pub use record::{Record, record};
pub use slice::{Slice, each};

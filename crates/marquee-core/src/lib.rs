//! marquee-core
//!
//! Pure domain types and validation for the form-to-feed relay.
//! No network or feed-service dependency. Parsing a CSV snapshot into
//! submissions and deciding which of them may be published happens here.

pub mod color;
pub mod error;
pub mod models;
pub mod profanity;
pub mod records;
pub mod validate;

pub use crate::color::validate_color;
pub use crate::error::CoreError;
pub use crate::models::{FeedEntry, Submission};
pub use crate::profanity::ForbiddenWords;
pub use crate::records::{MalformedRecord, ParsedSnapshot, parse};
pub use crate::validate::{Rejection, Validated, validate};

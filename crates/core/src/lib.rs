//! `boxoffice-core` — shared purchase primitives.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod limits;
pub mod value_object;

pub use error::{CountFault, ErrorClass, PurchaseError, PurchaseResult};
pub use id::{AccountId, integer_from_json};
pub use limits::{MAX_TICKETS_PER_PURCHASE, MIN_SEATS};
pub use value_object::ValueObject;

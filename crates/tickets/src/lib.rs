//! Ticket catalog and purchase rules.
//!
//! This crate contains the business rules for ticket purchases, implemented
//! purely as deterministic domain logic (no IO, no collaborators).

pub mod catalog;
pub mod category;
pub mod line_item;
pub mod validator;

pub use catalog::{Catalog, TicketType};
pub use category::Category;
pub use line_item::LineItem;
pub use validator::{Aggregate, TicketCounts, Validator};

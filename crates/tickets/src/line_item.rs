//! Ticket type requests: N tickets of one category.

use serde::Serialize;
use serde_json::Value as JsonValue;

use boxoffice_core::{
    CountFault, MAX_TICKETS_PER_PURCHASE, PurchaseError, PurchaseResult, ValueObject,
    integer_from_json,
};

use crate::catalog::{Catalog, TicketType, standard_ticket_type};
use crate::category::Category;

/// One validated request for `count` tickets of a single category.
///
/// Immutable once built. Several line items of the same category may appear
/// in one purchase; the validator sums them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LineItem {
    category: Category,
    count: u32,
}

impl LineItem {
    /// Build a line item, rejecting counts outside `1..=20`.
    ///
    /// The upper bound is a fast-fail; the validator checks the total across
    /// all line items again.
    pub fn new(category: Category, count: i64) -> PurchaseResult<Self> {
        if count > i64::from(MAX_TICKETS_PER_PURCHASE) {
            return Err(PurchaseError::TooManyTicketsInLine);
        }
        let count = u32::try_from(count)
            .ok()
            .filter(|c| *c >= 1)
            .ok_or(PurchaseError::InvalidCount(CountFault::BelowOne))?;

        Ok(Self { category, count })
    }

    /// Build a line item from untyped input.
    ///
    /// Checks, in order: the category name, that the count is an integer, then
    /// the same bounds as [`LineItem::new`].
    pub fn parse(category: &str, count: &JsonValue) -> PurchaseResult<Self> {
        let category = category.parse::<Category>()?;
        let count =
            integer_from_json(count).ok_or(PurchaseError::InvalidCount(CountFault::NotANumber))?;
        Self::new(category, count)
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Price and seating attributes from the standard catalog.
    pub fn ticket_type(&self) -> TicketType {
        standard_ticket_type(self.category)
    }

    /// Price and seating attributes from a specific catalog.
    pub fn ticket_type_in(&self, catalog: &Catalog) -> PurchaseResult<TicketType> {
        catalog.lookup(self.category)
    }
}

impl ValueObject for LineItem {}

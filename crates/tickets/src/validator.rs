//! Purchase rules.
//!
//! Rules are evaluated in a fixed order and the first failure is returned, so
//! a request breaking several rules always reports the same one:
//!
//! 1. account id must be positive
//! 2. at least one line item
//! 3. every line item priced by the catalog
//! 4. child/infant tickets need an adult
//! 5. at most 20 tickets in total
//! 6. no more infants than adults
//!
//! Step 4 before step 5 is a compatibility choice rather than a requirement;
//! tests pin it.

use serde::Serialize;

use boxoffice_core::{
    AccountId, MAX_TICKETS_PER_PURCHASE, PurchaseError, PurchaseResult, ValueObject,
};

use crate::catalog::Catalog;
use crate::category::Category;
use crate::line_item::LineItem;

/// Tickets requested per category, summed over all line items.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TicketCounts {
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
}

impl TicketCounts {
    pub fn total(&self) -> u32 {
        self.adults
            .saturating_add(self.children)
            .saturating_add(self.infants)
    }

    fn add(&mut self, category: Category, count: u32) {
        let slot = match category {
            Category::Adult => &mut self.adults,
            Category::Child => &mut self.children,
            Category::Infant => &mut self.infants,
        };
        *slot = slot.saturating_add(count);
    }
}

/// Seats to reserve and amount to charge for a valid request.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct Aggregate {
    pub account: AccountId,
    pub total_seats: u32,
    pub total_cost: u64,
    pub counts: TicketCounts,
}

impl ValueObject for Aggregate {}

#[derive(Debug, Clone, Default)]
pub struct Validator {
    catalog: Catalog,
}

impl Validator {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Check a purchase and compute its totals.
    ///
    /// `account_id` is already an integer here; untyped callers get
    /// `InvalidAccountIdType` from request decoding before reaching this.
    pub fn validate(&self, account_id: i64, line_items: &[LineItem]) -> PurchaseResult<Aggregate> {
        let account = AccountId::new(account_id)?;

        if line_items.is_empty() {
            return Err(PurchaseError::EmptyRequest);
        }

        let mut counts = TicketCounts::default();
        let mut total_seats: u32 = 0;
        let mut total_cost: u64 = 0;

        for item in line_items {
            let ticket_type = item
                .ticket_type_in(&self.catalog)
                .map_err(|_| PurchaseError::UnknownTicketType)?;

            counts.add(item.category(), item.count());
            total_cost = total_cost
                .saturating_add(u64::from(item.count()).saturating_mul(ticket_type.unit_cost()));
            if ticket_type.occupies_seat() {
                total_seats = total_seats.saturating_add(item.count());
            }
        }

        if counts.adults == 0 && (counts.children > 0 || counts.infants > 0) {
            return Err(PurchaseError::MissingAdult);
        }

        if counts.total() > MAX_TICKETS_PER_PURCHASE {
            return Err(PurchaseError::TooManyTickets);
        }

        // Each infant sits on a different adult's lap.
        if counts.infants > counts.adults {
            return Err(PurchaseError::TooManyInfants);
        }

        Ok(Aggregate {
            account,
            total_seats,
            total_cost,
            counts,
        })
    }
}

//! Ticket price list.
//!
//! A flat, read-only table from [`Category`] to its [`TicketType`]. The
//! standard table is a compile-time constant; custom tables exist so callers
//! (and tests) can price against different data without touching the rules.

use std::borrow::Cow;

use serde::Serialize;

use boxoffice_core::{PurchaseError, PurchaseResult, ValueObject};

use crate::category::Category;

/// Price and seating attributes of one ticket category.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TicketType {
    category: Category,
    /// Price in whole currency units.
    unit_cost: u64,
    occupies_seat: bool,
}

impl TicketType {
    pub const fn new(category: Category, unit_cost: u64, occupies_seat: bool) -> Self {
        Self {
            category,
            unit_cost,
            occupies_seat,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn unit_cost(&self) -> u64 {
        self.unit_cost
    }

    pub fn occupies_seat(&self) -> bool {
        self.occupies_seat
    }
}

impl ValueObject for TicketType {}

pub const ADULT: TicketType = TicketType::new(Category::Adult, 20, true);
pub const CHILD: TicketType = TicketType::new(Category::Child, 10, true);
/// Infants sit on an adult's lap: free and never given a seat.
pub const INFANT: TicketType = TicketType::new(Category::Infant, 0, false);

const STANDARD: [TicketType; 3] = [ADULT, CHILD, INFANT];

/// Standard entry for a category. Total over [`Category`].
pub const fn standard_ticket_type(category: Category) -> TicketType {
    match category {
        Category::Adult => ADULT,
        Category::Child => CHILD,
        Category::Infant => INFANT,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Cow<'static, [TicketType]>,
}

impl Catalog {
    pub const fn standard() -> Self {
        Self {
            entries: Cow::Borrowed(&STANDARD),
        }
    }

    /// Build a catalog from arbitrary entries.
    ///
    /// When a category appears more than once the last entry wins. Categories
    /// with no entry are unknown to the resulting catalog.
    pub fn from_entries(entries: impl IntoIterator<Item = TicketType>) -> Self {
        let mut table: Vec<TicketType> = Vec::new();
        for entry in entries {
            match table.iter_mut().find(|t| t.category == entry.category) {
                Some(existing) => *existing = entry,
                None => table.push(entry),
            }
        }
        table.sort_by_key(|t| t.category);
        Self {
            entries: Cow::Owned(table),
        }
    }

    pub fn lookup(&self, category: Category) -> PurchaseResult<TicketType> {
        self.entries
            .iter()
            .find(|t| t.category == category)
            .copied()
            .ok_or(PurchaseError::UnknownCategory)
    }

    pub fn entries(&self) -> &[TicketType] {
        &self.entries
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_prices() {
        let catalog = Catalog::standard();

        let adult = catalog.lookup(Category::Adult).unwrap();
        assert_eq!(adult.unit_cost(), 20);
        assert!(adult.occupies_seat());

        let child = catalog.lookup(Category::Child).unwrap();
        assert_eq!(child.unit_cost(), 10);
        assert!(child.occupies_seat());

        let infant = catalog.lookup(Category::Infant).unwrap();
        assert_eq!(infant.unit_cost(), 0);
        assert!(!infant.occupies_seat());
    }

    #[test]
    fn adults_cost_more_than_children() {
        assert!(ADULT.unit_cost() > CHILD.unit_cost());
    }

    #[test]
    fn standard_table_matches_the_const_lookup() {
        for category in Category::ALL {
            assert_eq!(
                Catalog::standard().lookup(category),
                Ok(standard_ticket_type(category))
            );
        }
    }

    #[test]
    fn custom_catalog_without_infants_does_not_know_them() {
        let catalog = Catalog::from_entries([ADULT, CHILD]);
        assert_eq!(
            catalog.lookup(Category::Infant),
            Err(PurchaseError::UnknownCategory)
        );
    }

    #[test]
    fn later_entries_replace_earlier_ones() {
        let discounted = TicketType::new(Category::Adult, 15, true);
        let catalog = Catalog::from_entries([INFANT, ADULT, discounted]);

        assert_eq!(catalog.lookup(Category::Adult), Ok(discounted));
        assert_eq!(catalog.entries().len(), 2);
        assert_eq!(catalog.entries()[0].category(), Category::Adult);
    }
}

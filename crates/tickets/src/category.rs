//! Ticket categories.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use boxoffice_core::PurchaseError;

/// Kind of admission ticket.
///
/// Declaration order is the display order used in messages.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Adult,
    Child,
    Infant,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Adult, Category::Child, Category::Infant];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Adult => "ADULT",
            Category::Child => "CHILD",
            Category::Infant => "INFANT",
        }
    }

    /// Human readable list of the accepted names, e.g. `ADULT, CHILD, or INFANT`.
    pub fn expected_names() -> String {
        let names: Vec<&str> = Self::ALL.iter().map(|c| c.as_str()).collect();
        match names.split_last() {
            Some((last, [])) => (*last).to_string(),
            Some((last, rest)) => format!("{}, or {}", rest.join(", "), last),
            None => String::new(),
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = PurchaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| PurchaseError::invalid_category(Self::expected_names()))
    }
}

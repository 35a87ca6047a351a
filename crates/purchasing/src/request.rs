//! Untyped purchase requests (JSON).
//!
//! Wire shape:
//!
//! ```json
//! { "accountId": 1, "ticketTypeRequests": [{ "type": "ADULT", "noOfTickets": 2 }] }
//! ```
//!
//! Fields stay as raw JSON values until [`PurchaseRequest::decode`] so that a
//! wrongly typed field is reported as the matching purchase error instead of
//! a deserialization failure.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use boxoffice_core::{AccountId, PurchaseError, PurchaseResult};
use boxoffice_tickets::{Category, LineItem};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLineItem {
    #[serde(rename = "type", default)]
    pub ticket_type: JsonValue,
    #[serde(default)]
    pub no_of_tickets: JsonValue,
}

impl RawLineItem {
    pub fn new(category: Category, count: i64) -> Self {
        Self {
            ticket_type: JsonValue::from(category.as_str()),
            no_of_tickets: JsonValue::from(count),
        }
    }

    pub fn decode(&self) -> PurchaseResult<LineItem> {
        match self.ticket_type.as_str() {
            Some(name) => LineItem::parse(name, &self.no_of_tickets),
            None => Err(PurchaseError::invalid_category(Category::expected_names())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    #[serde(default)]
    pub account_id: JsonValue,
    #[serde(default)]
    pub ticket_type_requests: Vec<RawLineItem>,
}

impl PurchaseRequest {
    pub fn new(account_id: i64, ticket_type_requests: Vec<RawLineItem>) -> Self {
        Self {
            account_id: JsonValue::from(account_id),
            ticket_type_requests,
        }
    }

    /// Turn the raw request into an account number and typed line items.
    ///
    /// The account number is only checked for being an integer here; the
    /// remaining rules run in the validator.
    pub fn decode(&self) -> PurchaseResult<(i64, Vec<LineItem>)> {
        let account_id = AccountId::number_from_json(&self.account_id)?;
        let line_items = self
            .ticket_type_requests
            .iter()
            .map(RawLineItem::decode)
            .collect::<PurchaseResult<Vec<_>>>()?;
        Ok((account_id, line_items))
    }
}

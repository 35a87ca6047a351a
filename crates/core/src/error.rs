//! Purchase error model.

use thiserror::Error;

use crate::limits::{MAX_TICKETS_PER_PURCHASE, MIN_SEATS};

/// Result type used across the purchase flow.
pub type PurchaseResult<T> = Result<T, PurchaseError>;

/// Why a ticket count was rejected at line-item construction.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum CountFault {
    /// The count was not an integer (untyped input only).
    #[error("noOfTickets must be a number")]
    NotANumber,
    /// The count was zero or negative.
    #[error("noOfTickets must be at least 1")]
    BelowOne,
}

/// Every way a ticket purchase can fail.
///
/// Collaborator faults never appear here in raw form: `ReservationError` and
/// `PaymentError` carry no source, the collaborator's fault goes to the fault log.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PurchaseError {
    #[error("accountId must be a number")]
    InvalidAccountIdType,

    #[error("accountId is less than 0")]
    InvalidAccountId,

    #[error("type must be {expected}")]
    InvalidCategory { expected: String },

    #[error("{0}")]
    InvalidCount(CountFault),

    #[error("number of tickets must be less than or equal to {}", MAX_TICKETS_PER_PURCHASE)]
    TooManyTicketsInLine,

    /// Raised by a catalog that has no entry for the category.
    #[error("type of ticket not found")]
    UnknownCategory,

    #[error("request must be for at least 1 ticket")]
    EmptyRequest,

    /// Raised by the validator when its catalog cannot price a line item.
    #[error("type of ticket not found")]
    UnknownTicketType,

    #[error("an adult ticket is required to be purchased")]
    MissingAdult,

    #[error("number of tickets must be less than or equal to {}", MAX_TICKETS_PER_PURCHASE)]
    TooManyTickets,

    #[error("more infant tickets requested than adult tickets")]
    TooManyInfants,

    #[error("number of seats must be greater than {}", MIN_SEATS)]
    InvalidReservation,

    #[error("unable to allocate seat")]
    ReservationError,

    #[error("payment amount must be greater than 0")]
    InvalidPayment,

    #[error("unable to process payment")]
    PaymentError,
}

/// Coarse classification of a [`PurchaseError`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    /// The input could not be interpreted (wrong type, unknown category).
    Malformed,
    /// The input was well-formed but broke a purchase rule.
    BusinessRule,
    /// A seat reservation or payment collaborator failed.
    Downstream,
    /// An internal guarantee did not hold (should be unreachable).
    Invariant,
}

impl PurchaseError {
    pub fn class(&self) -> ErrorClass {
        match self {
            PurchaseError::InvalidAccountIdType
            | PurchaseError::InvalidCategory { .. }
            | PurchaseError::InvalidCount(_)
            | PurchaseError::UnknownCategory => ErrorClass::Malformed,
            PurchaseError::InvalidAccountId
            | PurchaseError::TooManyTicketsInLine
            | PurchaseError::EmptyRequest
            | PurchaseError::MissingAdult
            | PurchaseError::TooManyTickets
            | PurchaseError::TooManyInfants => ErrorClass::BusinessRule,
            PurchaseError::ReservationError | PurchaseError::PaymentError => {
                ErrorClass::Downstream
            }
            PurchaseError::UnknownTicketType
            | PurchaseError::InvalidReservation
            | PurchaseError::InvalidPayment => ErrorClass::Invariant,
        }
    }

    pub fn invalid_category(expected: impl Into<String>) -> Self {
        Self::InvalidCategory {
            expected: expected.into(),
        }
    }

    pub fn is_downstream(&self) -> bool {
        self.class() == ErrorClass::Downstream
    }
}

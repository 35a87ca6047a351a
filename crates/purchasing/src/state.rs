//! Per-call purchase state machine.
//!
//! ```text
//! Start → Validated → SeatReserved → Paid
//!   ↓         ↓             ↓
//! ValidationFailed  ReservationFailed  PaymentFailed
//! ```
//!
//! Every state is terminal for the call it belongs to; nothing is retried or
//! resumed. `PaymentFailed` leaves the reservation in place.

use serde::Serialize;

use boxoffice_core::PurchaseError;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseState {
    Start,
    Validated,
    SeatReserved,
    Paid,
    ValidationFailed,
    ReservationFailed,
    PaymentFailed,
}

impl PurchaseState {
    /// State a call ends in when it fails with `error` while in `self`.
    pub fn fail(self, error: &PurchaseError) -> Self {
        match (self, error) {
            (_, PurchaseError::InvalidReservation | PurchaseError::ReservationError) => {
                PurchaseState::ReservationFailed
            }
            (_, PurchaseError::InvalidPayment | PurchaseError::PaymentError) => {
                PurchaseState::PaymentFailed
            }
            (PurchaseState::Start, _) => PurchaseState::ValidationFailed,
            (PurchaseState::Validated, _) => PurchaseState::ReservationFailed,
            (PurchaseState::SeatReserved, _) => PurchaseState::PaymentFailed,
            (terminal, _) => terminal,
        }
    }

    /// True once a seat reservation has gone through, whatever happened after.
    pub fn holds_reservation(self) -> bool {
        matches!(
            self,
            PurchaseState::SeatReserved | PurchaseState::Paid | PurchaseState::PaymentFailed
        )
    }
}

impl core::fmt::Display for PurchaseState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            PurchaseState::Start => "start",
            PurchaseState::Validated => "validated",
            PurchaseState::SeatReserved => "seat_reserved",
            PurchaseState::Paid => "paid",
            PurchaseState::ValidationFailed => "validation_failed",
            PurchaseState::ReservationFailed => "reservation_failed",
            PurchaseState::PaymentFailed => "payment_failed",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_map_to_the_phase_they_happen_in() {
        assert_eq!(
            PurchaseState::Start.fail(&PurchaseError::EmptyRequest),
            PurchaseState::ValidationFailed
        );
        assert_eq!(
            PurchaseState::Validated.fail(&PurchaseError::ReservationError),
            PurchaseState::ReservationFailed
        );
        assert_eq!(
            PurchaseState::SeatReserved.fail(&PurchaseError::PaymentError),
            PurchaseState::PaymentFailed
        );
    }

    #[test]
    fn payment_failure_keeps_the_reservation() {
        assert!(PurchaseState::PaymentFailed.holds_reservation());
        assert!(!PurchaseState::ReservationFailed.holds_reservation());
    }
}

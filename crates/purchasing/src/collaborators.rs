//! Seat reservation and payment collaborators.
//!
//! Both are external systems. Their failures are opaque to the purchase flow:
//! any `Err` is logged and replaced by a purchase-level error.

use std::sync::Arc;

/// Reserves seats for an account.
pub trait SeatReservationService: Send + Sync {
    fn reserve_seat(&self, account_id: i64, seat_count: u32) -> anyhow::Result<()>;
}

/// Charges an account.
pub trait TicketPaymentService: Send + Sync {
    fn make_payment(&self, account_id: i64, amount: u64) -> anyhow::Result<()>;
}

impl<S> SeatReservationService for Arc<S>
where
    S: SeatReservationService + ?Sized,
{
    fn reserve_seat(&self, account_id: i64, seat_count: u32) -> anyhow::Result<()> {
        (**self).reserve_seat(account_id, seat_count)
    }
}

impl<S> TicketPaymentService for Arc<S>
where
    S: TicketPaymentService + ?Sized,
{
    fn make_payment(&self, account_id: i64, amount: u64) -> anyhow::Result<()> {
        (**self).make_payment(account_id, amount)
    }
}

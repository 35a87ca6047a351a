//! In-memory collaborators for tests/dev.

use std::sync::{Mutex, MutexGuard};

use anyhow::anyhow;

use crate::collaborators::{SeatReservationService, TicketPaymentService};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Records every reservation it is asked for.
///
/// - No IO
/// - Optionally fails every call with a fixed message
#[derive(Debug, Default)]
pub struct InMemorySeatReservation {
    calls: Mutex<Vec<(i64, u32)>>,
    failure: Option<String>,
}

impl InMemorySeatReservation {
    pub fn new() -> Self {
        Self::default()
    }

    /// A service whose every call fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: Some(message.into()),
        }
    }

    /// `(account_id, seat_count)` for every call made, failed ones included.
    pub fn calls(&self) -> Vec<(i64, u32)> {
        lock(&self.calls).clone()
    }
}

impl SeatReservationService for InMemorySeatReservation {
    fn reserve_seat(&self, account_id: i64, seat_count: u32) -> anyhow::Result<()> {
        lock(&self.calls).push((account_id, seat_count));
        match &self.failure {
            Some(message) => Err(anyhow!("{message}")),
            None => Ok(()),
        }
    }
}

/// Records every payment it is asked to take.
#[derive(Debug, Default)]
pub struct InMemoryPayments {
    calls: Mutex<Vec<(i64, u64)>>,
    failure: Option<String>,
}

impl InMemoryPayments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: Some(message.into()),
        }
    }

    /// `(account_id, amount)` for every call made, failed ones included.
    pub fn calls(&self) -> Vec<(i64, u64)> {
        lock(&self.calls).clone()
    }

    pub fn total_charged(&self, account_id: i64) -> u64 {
        if self.failure.is_some() {
            return 0;
        }
        lock(&self.calls)
            .iter()
            .filter(|(id, _)| *id == account_id)
            .map(|(_, amount)| amount)
            .sum()
    }
}

impl TicketPaymentService for InMemoryPayments {
    fn make_payment(&self, account_id: i64, amount: u64) -> anyhow::Result<()> {
        lock(&self.calls).push((account_id, amount));
        match &self.failure {
            Some(message) => Err(anyhow!("{message}")),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_calls_in_order() {
        let seats = InMemorySeatReservation::new();
        seats.reserve_seat(1, 2).unwrap();
        seats.reserve_seat(3, 4).unwrap();
        assert_eq!(seats.calls(), vec![(1, 2), (3, 4)]);
    }

    #[test]
    fn failing_service_still_records_the_attempt() {
        let payments = InMemoryPayments::failing("card declined");
        let err = payments.make_payment(7, 40).unwrap_err();
        assert_eq!(err.to_string(), "card declined");
        assert_eq!(payments.calls(), vec![(7, 40)]);
        assert_eq!(payments.total_charged(7), 0);
    }

    #[test]
    fn totals_per_account() {
        let payments = InMemoryPayments::new();
        payments.make_payment(1, 20).unwrap();
        payments.make_payment(2, 10).unwrap();
        payments.make_payment(1, 30).unwrap();
        assert_eq!(payments.total_charged(1), 50);
        assert_eq!(payments.total_charged(2), 10);
    }
}

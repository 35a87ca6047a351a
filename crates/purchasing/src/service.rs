//! Ticket purchase orchestration.
//!
//! ```text
//! purchase_tickets(account_id, line_items)
//!   ↓
//! 1. Validate (pure; errors returned unchanged)
//!   ↓
//! 2. Reserve seats (collaborator; fault → ReservationError, stop)
//!   ↓
//! 3. Take payment (collaborator; fault → PaymentError)
//! ```
//!
//! Calls are synchronous and strictly ordered. Nothing is retried, and a
//! payment failure does not release the seats reserved in step 2.

use boxoffice_core::{MIN_SEATS, PurchaseError, PurchaseResult};
use boxoffice_tickets::{Aggregate, Catalog, LineItem, Validator};

use crate::collaborators::{SeatReservationService, TicketPaymentService};
use crate::fault_log::{FaultLog, TracingFaultLog};
use crate::request::PurchaseRequest;
use crate::state::PurchaseState;

/// Public entry point for buying tickets.
///
/// ## Generic Parameters
///
/// - `R`: seat reservation collaborator
/// - `P`: payment collaborator
/// - `L`: where collaborator faults are logged (defaults to `tracing`)
///
/// Holds no per-purchase state; concurrent calls for the same account are
/// not coordinated here.
#[derive(Debug)]
pub struct TicketService<R, P, L = TracingFaultLog> {
    reservations: R,
    payments: P,
    fault_log: L,
    validator: Validator,
}

impl<R, P> TicketService<R, P> {
    pub fn new(reservations: R, payments: P) -> Self {
        Self {
            reservations,
            payments,
            fault_log: TracingFaultLog,
            validator: Validator::default(),
        }
    }
}

impl<R, P, L> TicketService<R, P, L> {
    pub fn with_fault_log<L2>(self, fault_log: L2) -> TicketService<R, P, L2> {
        TicketService {
            reservations: self.reservations,
            payments: self.payments,
            fault_log,
            validator: self.validator,
        }
    }

    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.validator = Validator::new(catalog);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        self.validator.catalog()
    }

    pub fn into_parts(self) -> (R, P, L) {
        (self.reservations, self.payments, self.fault_log)
    }
}

impl<R, P, L> TicketService<R, P, L>
where
    R: SeatReservationService,
    P: TicketPaymentService,
    L: FaultLog,
{
    /// Validate, reserve seats, then pay.
    ///
    /// Returns `Ok(())` only when both collaborators succeeded.
    pub fn purchase_tickets(&self, account_id: i64, line_items: &[LineItem]) -> PurchaseResult<()> {
        let mut state = PurchaseState::Start;
        let result = self.run(account_id, line_items, &mut state);

        match &result {
            Ok(()) => tracing::info!(account_id, state = %state, "ticket purchase completed"),
            Err(err) => {
                let state = state.fail(err);
                tracing::debug!(
                    account_id,
                    state = %state,
                    holds_reservation = state.holds_reservation(),
                    error = %err,
                    "ticket purchase failed"
                );
            }
        }

        result
    }

    /// Decode an untyped request and purchase it.
    pub fn purchase_request(&self, request: &PurchaseRequest) -> PurchaseResult<()> {
        let (account_id, line_items) = request.decode()?;
        self.purchase_tickets(account_id, &line_items)
    }

    /// Price a request without reserving or paying.
    pub fn quote(&self, account_id: i64, line_items: &[LineItem]) -> PurchaseResult<Aggregate> {
        self.validator.validate(account_id, line_items)
    }

    fn run(
        &self,
        account_id: i64,
        line_items: &[LineItem],
        state: &mut PurchaseState,
    ) -> PurchaseResult<()> {
        let totals = self.validator.validate(account_id, line_items)?;
        *state = PurchaseState::Validated;
        tracing::debug!(
            account_id,
            seats = totals.total_seats,
            amount = totals.total_cost,
            adults = totals.counts.adults,
            children = totals.counts.children,
            infants = totals.counts.infants,
            "purchase validated"
        );

        let account_id = totals.account.get();
        self.reserve_seats(account_id, totals.total_seats)?;
        *state = PurchaseState::SeatReserved;

        self.make_payment(account_id, totals.total_cost)?;
        *state = PurchaseState::Paid;

        Ok(())
    }

    fn reserve_seats(&self, account_id: i64, seats: u32) -> PurchaseResult<()> {
        if seats <= MIN_SEATS {
            return Err(PurchaseError::InvalidReservation);
        }

        self.reservations
            .reserve_seat(account_id, seats)
            .map_err(|fault| {
                self.fault_log
                    .record(PurchaseState::ReservationFailed, account_id, &fault);
                PurchaseError::ReservationError
            })?;

        tracing::info!(account_id, seats, "seats reserved");
        Ok(())
    }

    fn make_payment(&self, account_id: i64, amount: u64) -> PurchaseResult<()> {
        // Only reachable with a catalog that has zero-cost seated tickets.
        if amount == 0 {
            return Err(PurchaseError::InvalidPayment);
        }

        self.payments
            .make_payment(account_id, amount)
            .map_err(|fault| {
                self.fault_log
                    .record(PurchaseState::PaymentFailed, account_id, &fault);
                PurchaseError::PaymentError
            })?;

        tracing::info!(account_id, amount, "payment taken");
        Ok(())
    }
}

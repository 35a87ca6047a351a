//! Ticket purchasing: validation, seat reservation, payment.
//!
//! [`TicketService`] is the entry point. It runs the purchase rules from
//! `boxoffice-tickets`, then drives the seat reservation and payment
//! collaborators in that order.

pub mod collaborators;
pub mod fault_log;
pub mod in_memory;
pub mod request;
pub mod service;
pub mod state;

pub use collaborators::{SeatReservationService, TicketPaymentService};
pub use fault_log::{FaultLog, RecordedFault, RecordingFaultLog, TracingFaultLog};
pub use in_memory::{InMemoryPayments, InMemorySeatReservation};
pub use request::{PurchaseRequest, RawLineItem};
pub use service::TicketService;
pub use state::PurchaseState;

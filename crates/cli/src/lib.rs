//! `boxoffice` command line: run a JSON purchase request against in-memory
//! seat reservation and payment services.
//!
//! ```text
//! boxoffice <request.json | -> [--quote]
//! ```
//!
//! `BOXOFFICE_FAIL_RESERVATION=1` / `BOXOFFICE_FAIL_PAYMENT=1` make the
//! corresponding service fail every call.

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;

use boxoffice_purchasing::{
    InMemoryPayments, InMemorySeatReservation, PurchaseRequest, TicketService,
};
use boxoffice_tickets::TicketCounts;

pub const FAIL_RESERVATION_ENV: &str = "BOXOFFICE_FAIL_RESERVATION";
pub const FAIL_PAYMENT_ENV: &str = "BOXOFFICE_FAIL_PAYMENT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "boxoffice")]
#[command(about = "Validate and purchase a JSON ticket request")]
pub struct CliArgs {
    /// Path to the request document, or `-` for stdin
    pub input: String,

    /// Price the request only; no seats are reserved and nothing is charged
    #[arg(long)]
    pub quote: bool,
}

impl CliArgs {
    pub fn source(&self) -> Input {
        if self.input == "-" {
            Input::Stdin
        } else {
            Input::File(PathBuf::from(&self.input))
        }
    }
}

/// Which in-memory collaborators should fail.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct CollaboratorConfig {
    pub fail_reservation: bool,
    pub fail_payment: bool,
}

impl CollaboratorConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let enabled = |key: &str| {
            lookup(key)
                .map(|v| matches!(v.trim(), "1" | "true" | "yes"))
                .unwrap_or(false)
        };
        Self {
            fail_reservation: enabled(FAIL_RESERVATION_ENV),
            fail_payment: enabled(FAIL_PAYMENT_ENV),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Report {
    Quoted {
        account_id: i64,
        seats: u32,
        amount: u64,
        tickets: TicketCounts,
    },
    Purchased {
        account_id: i64,
        seats_reserved: u32,
        amount_charged: u64,
    },
}

pub fn read_input(args: &CliArgs) -> anyhow::Result<String> {
    match args.source() {
        Input::Stdin => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read request from stdin")?;
            Ok(raw)
        }
        Input::File(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read request from {}", path.display())),
    }
}

/// Parse `raw` as a purchase request and quote or purchase it.
pub fn run(
    args: &CliArgs,
    collaborators: &CollaboratorConfig,
    raw: &str,
) -> anyhow::Result<Report> {
    let request: PurchaseRequest =
        serde_json::from_str(raw).context("request is not a valid purchase request document")?;

    let seats = Arc::new(if collaborators.fail_reservation {
        InMemorySeatReservation::failing("seat reservation service unavailable")
    } else {
        InMemorySeatReservation::new()
    });
    let payments = Arc::new(if collaborators.fail_payment {
        InMemoryPayments::failing("payment gateway declined the charge")
    } else {
        InMemoryPayments::new()
    });
    let service = TicketService::new(seats.clone(), payments.clone());

    let (account_id, line_items) = request.decode()?;

    if args.quote {
        let totals = service
            .quote(account_id, &line_items)
            .with_context(|| format!("cannot quote purchase for account {account_id}"))?;
        return Ok(Report::Quoted {
            account_id,
            seats: totals.total_seats,
            amount: totals.total_cost,
            tickets: totals.counts,
        });
    }

    service
        .purchase_tickets(account_id, &line_items)
        .with_context(|| format!("purchase for account {account_id} failed"))?;

    tracing::debug!(account_id, "purchase recorded by in-memory services");
    Ok(Report::Purchased {
        account_id,
        seats_reserved: seats.calls().iter().map(|(_, n)| n).sum(),
        amount_charged: payments.total_charged(account_id),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxoffice_core::PurchaseError;

    fn args(quote: bool) -> CliArgs {
        CliArgs {
            input: "-".to_string(),
            quote,
        }
    }

    const FAMILY: &str = r#"{
        "accountId": 7,
        "ticketTypeRequests": [
            { "type": "ADULT", "noOfTickets": 2 },
            { "type": "CHILD", "noOfTickets": 1 },
            { "type": "INFANT", "noOfTickets": 1 }
        ]
    }"#;

    #[test]
    fn parses_path_and_quote_flag() {
        let parsed = CliArgs::try_parse_from(["boxoffice", "req.json", "--quote"]).unwrap();
        assert_eq!(parsed.source(), Input::File(PathBuf::from("req.json")));
        assert!(parsed.quote);

        let parsed = CliArgs::try_parse_from(["boxoffice", "-"]).unwrap();
        assert_eq!(parsed.source(), Input::Stdin);
        assert!(!parsed.quote);
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(CliArgs::try_parse_from(["boxoffice"]).is_err());
        assert!(CliArgs::try_parse_from(["boxoffice", "a.json", "--nope"]).is_err());
        assert!(CliArgs::try_parse_from(["boxoffice", "a.json", "b.json"]).is_err());
    }

    #[test]
    fn failure_switches_come_from_the_environment() {
        let config = CollaboratorConfig::from_lookup(|key| {
            (key == FAIL_PAYMENT_ENV).then(|| "1".to_string())
        });
        assert_eq!(
            config,
            CollaboratorConfig {
                fail_reservation: false,
                fail_payment: true,
            }
        );
    }

    #[test]
    fn purchases_a_family_request() {
        let report = run(&args(false), &CollaboratorConfig::default(), FAMILY).unwrap();
        assert_eq!(
            report,
            Report::Purchased {
                account_id: 7,
                seats_reserved: 3,
                amount_charged: 50,
            }
        );
    }

    #[test]
    fn quotes_without_purchasing() {
        let report = run(&args(true), &CollaboratorConfig::default(), FAMILY).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "quoted");
        assert_eq!(json["seats"], 3);
        assert_eq!(json["amount"], 50);
        assert_eq!(json["tickets"]["infants"], 1);
    }

    #[test]
    fn reservation_failure_surfaces_as_purchase_error() {
        let config = CollaboratorConfig {
            fail_reservation: true,
            fail_payment: false,
        };
        let err = run(&args(false), &config, FAMILY).unwrap_err();
        assert_eq!(
            err.downcast_ref::<PurchaseError>(),
            Some(&PurchaseError::ReservationError)
        );
    }

    #[test]
    fn malformed_documents_are_reported() {
        assert!(run(&args(false), &CollaboratorConfig::default(), "not json").is_err());

        let err = run(
            &args(false),
            &CollaboratorConfig::default(),
            r#"{ "accountId": "one", "ticketTypeRequests": [] }"#,
        )
        .unwrap_err();
        assert_eq!(
            err.downcast_ref::<PurchaseError>(),
            Some(&PurchaseError::InvalidAccountIdType)
        );
    }
}

//! Where collaborator faults go.
//!
//! The orchestrator hands each downstream fault to a [`FaultLog`] exactly once,
//! then returns its own error. The fault itself never reaches the caller.

use std::sync::{Arc, Mutex};

use crate::state::PurchaseState;

pub trait FaultLog: Send + Sync {
    /// `state` is the failure state the purchase ends in.
    fn record(&self, state: PurchaseState, account_id: i64, fault: &anyhow::Error);
}

impl<L> FaultLog for Arc<L>
where
    L: FaultLog + ?Sized,
{
    fn record(&self, state: PurchaseState, account_id: i64, fault: &anyhow::Error) {
        (**self).record(state, account_id, fault)
    }
}

/// Emits one `error` level event per fault.
#[derive(Debug, Default, Copy, Clone)]
pub struct TracingFaultLog;

impl FaultLog for TracingFaultLog {
    fn record(&self, state: PurchaseState, account_id: i64, fault: &anyhow::Error) {
        tracing::error!(
            account_id,
            state = %state,
            error = %format_args!("{fault:#}"),
            "downstream call failed"
        );
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedFault {
    pub state: PurchaseState,
    pub account_id: i64,
    /// The fault with its source chain, as `{:#}` renders it.
    pub message: String,
}

/// Keeps faults in memory (tests/dev).
#[derive(Debug, Default)]
pub struct RecordingFaultLog {
    entries: Mutex<Vec<RecordedFault>>,
}

impl RecordingFaultLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<RecordedFault> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl FaultLog for RecordingFaultLog {
    fn record(&self, state: PurchaseState, account_id: i64, fault: &anyhow::Error) {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(RecordedFault {
                state,
                account_id,
                message: format!("{fault:#}"),
            });
    }
}

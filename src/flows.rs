//! Mutation and upload flow state machine
//!
//! Every create/edit/delete/upload flow walks the same explicit machine:
//! `Idle → Ready → Submitting → Success | Error`. Transitions are total
//! over the table below and everything else is an error value, so states
//! like "success with no data" cannot be reached by accident. `Error` is
//! recoverable (back to `Ready` or `Idle`) without restarting the program;
//! `Success` carries the transient confirmation message.
//!
//! After a successful mutation the driver reloads the authoritative list
//! from the backend instead of patching any local copy: operation edits use
//! supersede semantics, so the edited row's identity changes and a local
//! merge would keep a stale id.

use std::future::Future;
use std::path::Path;

use anyhow::Context;
use thiserror::Error;
use tracing::debug;

use crate::error::{ApiError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    Ready,
    Submitting,
    Success { message: String },
    Error { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEvent {
    /// Input selected/validated; the flow may be submitted.
    Prepare,
    Submit,
    Succeed { message: String },
    Fail { message: String },
    /// Clear a terminal message. Errors return to `Ready`, success to `Idle`.
    Dismiss,
    /// Abandon the flow entirely.
    Reset,
}

impl FlowEvent {
    fn name(&self) -> &'static str {
        match self {
            FlowEvent::Prepare => "Prepare",
            FlowEvent::Submit => "Submit",
            FlowEvent::Succeed { .. } => "Succeed",
            FlowEvent::Fail { .. } => "Fail",
            FlowEvent::Dismiss => "Dismiss",
            FlowEvent::Reset => "Reset",
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("illegal flow transition: {state} on {event}")]
pub struct IllegalTransition {
    state: &'static str,
    event: &'static str,
}

impl FlowState {
    fn name(&self) -> &'static str {
        match self {
            FlowState::Idle => "Idle",
            FlowState::Ready => "Ready",
            FlowState::Submitting => "Submitting",
            FlowState::Success { .. } => "Success",
            FlowState::Error { .. } => "Error",
        }
    }

    /// Exhaustive transition table.
    pub fn apply(self, event: FlowEvent) -> std::result::Result<FlowState, IllegalTransition> {
        use FlowEvent::*;
        use FlowState::*;

        let state = self.name();
        let next = match (self, event) {
            (Idle, Prepare) => Ready,
            // re-selecting input keeps the flow ready
            (Ready, Prepare) => Ready,
            (Ready, Submit) => Submitting,
            (Submitting, Succeed { message }) => Success { message },
            (Submitting, Fail { message }) => Error { message },
            (Success { .. }, Dismiss) => Idle,
            (Error { .. }, Dismiss) => Ready,
            (Error { .. }, Reset) | (Ready, Reset) | (Success { .. }, Reset) => Idle,
            (_, event) => {
                return Err(IllegalTransition {
                    state,
                    event: event.name(),
                })
            }
        };
        debug!("flow transition: {} -> {}", state, next.name());
        Ok(next)
    }

    /// Terminal confirmation or error message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            FlowState::Success { message } | FlowState::Error { message } => Some(message),
            _ => None,
        }
    }
}

/// Result of a completed mutation: the terminal `Success` state plus the
/// freshly reloaded data.
#[derive(Debug)]
pub struct MutationOutcome<T> {
    pub state: FlowState,
    pub data: T,
}

/// Drives a single mutation through the machine: submit, then reload the
/// authoritative list (read-after-write). The CLI serializes mutations
/// naturally, so there is never more than one in flight.
pub async fn run_mutation<T, S, SF, R, RF>(submit: S, reload: R) -> Result<MutationOutcome<T>>
where
    S: FnOnce() -> SF,
    SF: Future<Output = std::result::Result<String, ApiError>>,
    R: FnOnce() -> RF,
    RF: Future<Output = std::result::Result<T, ApiError>>,
{
    let ready = FlowState::Idle.apply(FlowEvent::Prepare)?;
    let submitting = ready.apply(FlowEvent::Submit)?;

    match submit().await {
        Ok(message) => {
            let state = submitting.apply(FlowEvent::Succeed { message })?;
            let data = reload()
                .await
                .context("mutation succeeded but reloading the list failed")?;
            Ok(MutationOutcome { state, data })
        }
        Err(err) => {
            // land in the recoverable Error state before propagating
            let _errored = submitting.apply(FlowEvent::Fail {
                message: err.to_string(),
            })?;
            Err(err.into())
        }
    }
}

/// Validates the file, then drives the upload through the same machine.
pub async fn run_upload<T, U, UF>(path: &Path, upload: U) -> Result<MutationOutcome<T>>
where
    U: FnOnce() -> UF,
    UF: Future<Output = std::result::Result<T, ApiError>>,
{
    let metadata = std::fs::metadata(path).map_err(|_| {
        ApiError::Validation(format!("file not found: {}", path.display()))
    })?;
    if !metadata.is_file() {
        return Err(ApiError::Validation(format!("not a file: {}", path.display())).into());
    }
    if metadata.len() == 0 {
        return Err(ApiError::Validation(format!("file is empty: {}", path.display())).into());
    }

    let ready = FlowState::Idle.apply(FlowEvent::Prepare)?;
    let submitting = ready.apply(FlowEvent::Submit)?;

    match upload().await {
        Ok(data) => {
            let state = submitting.apply(FlowEvent::Succeed {
                message: "upload processed".to_string(),
            })?;
            Ok(MutationOutcome { state, data })
        }
        Err(err) => {
            let _errored = submitting.apply(FlowEvent::Fail {
                message: err.to_string(),
            })?;
            Err(err.into())
        }
    }
}

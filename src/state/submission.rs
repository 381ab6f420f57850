//! Submission controller state: busy flag, latest result, and the notice slot.
//!
//! SYSTEM CONTEXT
//! ==============
//! The check-in page wraps every submission in `begin` / `finish`. `finish`
//! is the only exit and always clears `busy`, whichever way the round trip
//! ended, so the submit control can never stay disabled. `begin` hands out a
//! ticket; `invalidate` (run on reset) makes every outstanding ticket stale,
//! and `finish` drops the outcome of a stale ticket.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use std::future::Future;

use crate::error::{CheckInError, Severity};
use crate::net::types::SubmissionResult;
use crate::state::form::{FormData, validate};

/// Transient, dismissable notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
    pub seq: u64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubmissionState {
    pub busy: bool,
    pub result: Option<SubmissionResult>,
    /// Bumped for every new result so the panel restarts its reveal.
    pub result_seq: u64,
    pub notice: Option<Notice>,
    notice_seq: u64,
    generation: u64,
}

impl SubmissionState {
    /// Enter the busy state and return the submission's ticket, or `None` if
    /// a submission is already running.
    pub fn begin(&mut self) -> Option<u64> {
        if self.busy {
            return None;
        }
        self.busy = true;
        self.notice = None;
        Some(self.generation)
    }

    /// Leave the busy state and record the outcome of submission `ticket`.
    /// Outcomes of tickets issued before the last `invalidate` are dropped.
    pub fn finish(&mut self, ticket: u64, outcome: Result<SubmissionResult, CheckInError>) {
        if ticket != self.generation {
            return;
        }
        self.busy = false;
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.result_seq += 1;
            }
            Err(err) => {
                if err.severity() == Severity::Error {
                    leptos::logging::warn!("check-in submission failed: {err}");
                }
                self.show_error(&err);
            }
        }
    }

    /// Abandon any in-flight submission; the form becomes submittable again.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.busy = false;
    }

    /// Replace the notice slot with `err`. Returns the new notice's sequence number.
    pub fn show_error(&mut self, err: &CheckInError) -> u64 {
        self.notice_seq += 1;
        self.notice = Some(Notice { severity: err.severity(), message: err.user_message(), seq: self.notice_seq });
        self.notice_seq
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Dismiss only if the notice `seq` is still the one showing.
    pub fn expire_notice(&mut self, seq: u64) {
        if self.notice.as_ref().is_some_and(|n| n.seq == seq) {
            self.notice = None;
        }
    }

    pub fn clear_result(&mut self) {
        self.result = None;
    }

    pub fn results_visible(&self) -> bool {
        self.result.is_some()
    }
}

/// Validate `data` and, if it passes, hand it to `send`.
///
/// # Errors
///
/// Returns the validation error without calling `send`, or whatever `send`
/// resolves to.
pub async fn run_submission<S, Fut>(data: FormData, send: S) -> Result<SubmissionResult, CheckInError>
where
    S: FnOnce(FormData) -> Fut,
    Fut: Future<Output = Result<SubmissionResult, CheckInError>>,
{
    validate(&data)?;
    send(data).await
}

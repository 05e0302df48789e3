// src/job.rs
//! One-shot unit of work around a cryptor request
//!
//! A job owns its request and working buffer, so any number of jobs can
//! run in parallel with no shared state and no locking. The only
//! cross-thread signal is the cancelled flag: cancellation applies
//! before the job starts, never mid-transform — a partially executed
//! cryptographic operation must not be observable.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use log::trace;

use crate::cryptor::{execute, CryptorResult};
use crate::request::CryptorRequest;

/// Requests that a not-yet-started [`CryptorJob`] be skipped.
///
/// Cancelling after the job has started has no effect; the job runs to
/// completion.
#[derive(Debug, Clone)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }
}

/// A pending cryptor invocation: runs once, finishes once.
#[derive(Debug)]
pub struct CryptorJob {
    request: CryptorRequest,
    cancelled: Arc<AtomicBool>,
}

impl CryptorJob {
    /// Wrap a request as a schedulable job.
    ///
    /// Taking the request by value fixes it for good; there is no way
    /// to alter a job's parameters after construction.
    pub fn new(request: CryptorRequest) -> Self {
        Self {
            request,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Handle for cancelling this job before it starts
    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle(Arc::clone(&self.cancelled))
    }

    /// Run the job to completion on the current thread.
    ///
    /// Returns `None` if the job was cancelled before this call; the
    /// transform is then skipped entirely. Once `run` begins the
    /// transform there is no further cancellation point.
    pub fn run(self) -> Option<CryptorResult> {
        if self.cancelled.load(Ordering::Acquire) {
            trace!("cryptor job cancelled before start, skipping");
            return None;
        }
        Some(execute(self.request))
    }

    /// Run the job on a new thread.
    ///
    /// This crate imposes no scheduling policy of its own; callers who
    /// need pooling, timeouts or backpressure should submit
    /// [`CryptorJob::run`] to their own executor instead.
    pub fn spawn(self) -> thread::JoinHandle<Option<CryptorResult>> {
        thread::spawn(move || self.run())
    }
}

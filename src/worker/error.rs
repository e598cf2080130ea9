//! Error types for the background worker.

use std::any::Any;
use std::io;

use thiserror::Error;

/// Errors seen by callers of the worker.
#[derive(Debug, Error)]
pub enum WorkerError {
    /// The worker thread has stopped, so the job was not queued.
    #[error("worker is not running, job `{job}` was not queued")]
    Disconnected { job: String },

    /// The worker thread itself panicked outside of any job.
    #[error("worker thread panicked")]
    ThreadPanicked,
}

/// Why a job failed. Failures are logged by the worker and never stop it.
#[derive(Debug, Error)]
pub enum JobError {
    #[error("{0}")]
    Failed(String),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync>),

    #[error("panicked: {0}")]
    Panicked(String),
}

impl JobError {
    pub fn failed(message: impl Into<String>) -> Self {
        JobError::Failed(message.into())
    }

    /// Wrap any error raised by a job body.
    pub fn other(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        JobError::Other(Box::new(error))
    }

    pub(crate) fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => match payload.downcast_ref::<&str>() {
                Some(message) => (*message).to_string(),
                None => "unknown panic payload".to_string(),
            },
        };
        JobError::Panicked(message)
    }
}

pub type Result<T, E = WorkerError> = std::result::Result<T, E>;

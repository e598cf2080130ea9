//! Background job queue.
//!
//! One consumer thread runs named jobs in strict submission order. A job
//! that fails or panics is logged at `warn` with its name and the error;
//! the queue keeps going. There is no priority, timeout or cancellation,
//! and the queue is unbounded.
//!
//! ```ignore
//! use hsym::worker::{Worker, WorkerConfig};
//!
//! let worker = Worker::spawn(WorkerConfig::default())?;
//! let db = db.clone();
//! worker.run_async("inspect Main.hs", move || {
//!     let facts = inspect("Main.hs")?;
//!     db.write().load_module(facts, location, now).map_err(JobError::other)?;
//!     Ok(())
//! })?;
//! worker.shutdown()?;
//! ```
//!
//! The symbol database is not locked by the queue. Jobs that merge into a
//! database read elsewhere go through a [`SharedSymbolDb`](crate::hir::SharedSymbolDb).

mod error;
mod queue;

pub use error::{JobError, Result, WorkerError};
pub use queue::{Worker, WorkerConfig, WorkerHandle};

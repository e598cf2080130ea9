//! The job queue and its consumer thread.

use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc;
use std::thread::{self, JoinHandle};

use tracing::{debug, trace, warn};

use super::error::{JobError, Result, WorkerError};

/// Configuration for [`Worker::spawn`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerConfig {
    /// Name of the consumer thread, as shown in panics and debuggers.
    pub thread_name: String,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            thread_name: "hsym-worker".to_string(),
        }
    }
}

impl WorkerConfig {
    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = name.into();
        self
    }
}

type JobFn = Box<dyn FnOnce() -> Result<(), JobError> + Send + 'static>;

struct Job {
    name: String,
    run: JobFn,
}

enum Message {
    Run(Job),
    Shutdown,
}

/// Submits jobs to a running [`Worker`]. Cheap to clone and usable from
/// any thread; submission never blocks.
#[derive(Clone, Debug)]
pub struct WorkerHandle {
    sender: mpsc::Sender<Message>,
}

impl WorkerHandle {
    /// Queue a named job. Jobs run one at a time in submission order.
    pub fn run_async<F>(&self, name: impl Into<String>, job: F) -> Result<()>
    where
        F: FnOnce() -> Result<(), JobError> + Send + 'static,
    {
        let name = name.into();
        trace!(job = %name, "queueing job");
        self.sender
            .send(Message::Run(Job {
                name,
                run: Box::new(job),
            }))
            .map_err(|mpsc::SendError(message)| match message {
                Message::Run(job) => WorkerError::Disconnected { job: job.name },
                Message::Shutdown => WorkerError::Disconnected {
                    job: String::new(),
                },
            })
    }
}

/// A single background thread draining a FIFO job queue.
///
/// A failing or panicking job is logged with its name and the queue moves
/// on. Dropping the worker without [`shutdown`](Self::shutdown) detaches
/// the thread; it exits once every handle is gone and the queue is empty.
#[derive(Debug)]
pub struct Worker {
    handle: WorkerHandle,
    thread: JoinHandle<()>,
}

impl Worker {
    /// Start the consumer thread.
    ///
    /// The thread logs through the dispatcher current at the call site.
    pub fn spawn(config: WorkerConfig) -> io::Result<Worker> {
        let (sender, receiver) = mpsc::channel();
        let dispatch = tracing::dispatcher::get_default(|dispatch| dispatch.clone());
        let thread = thread::Builder::new()
            .name(config.thread_name.clone())
            .spawn(move || {
                tracing::dispatcher::with_default(&dispatch, || consume(receiver));
            })?;
        debug!(thread = %config.thread_name, "worker started");
        Ok(Worker {
            handle: WorkerHandle { sender },
            thread,
        })
    }

    pub fn handle(&self) -> WorkerHandle {
        self.handle.clone()
    }

    pub fn run_async<F>(&self, name: impl Into<String>, job: F) -> Result<()>
    where
        F: FnOnce() -> Result<(), JobError> + Send + 'static,
    {
        self.handle.run_async(name, job)
    }

    /// Close the queue, run every job already queued, and join the thread.
    ///
    /// Jobs submitted through other handles after this call are discarded,
    /// and later submissions fail with [`WorkerError::Disconnected`].
    pub fn shutdown(self) -> Result<()> {
        // The thread may already be gone; joining reports how it ended.
        let _ = self.handle.sender.send(Message::Shutdown);
        drop(self.handle);
        self.thread.join().map_err(|_| WorkerError::ThreadPanicked)
    }
}

fn consume(receiver: mpsc::Receiver<Message>) {
    for message in receiver.iter() {
        match message {
            Message::Run(job) => run_job(job),
            Message::Shutdown => {
                for late in receiver.try_iter() {
                    if let Message::Run(job) = late {
                        warn!(job = %job.name, "worker shutting down, job discarded");
                    }
                }
                break;
            }
        }
    }
    debug!("worker stopped");
}

fn run_job(job: Job) {
    let Job { name, run } = job;
    trace!(job = %name, "running job");
    let outcome = match panic::catch_unwind(AssertUnwindSafe(run)) {
        Ok(result) => result,
        Err(payload) => Err(JobError::from_panic(payload)),
    };
    match outcome {
        Ok(()) => trace!(job = %name, "job done"),
        Err(error) => warn!(job = %name, error = %error, "job failed"),
    }
}

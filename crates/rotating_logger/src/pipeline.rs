use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, unbounded, Sender};

use crate::writer::{run_consumer, Consumer, LogCommand};
use crate::{LogRecord, LogTarget, LoggerError};

pub const WORKER_THREAD_NAME: &str = "logger-worker";

/// Created -> Running -> Draining -> Stopped. Nothing leaves Stopped.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
#[repr(u8)]
pub enum PipelineState {
    Created = 0,
    Running = 1,
    Draining = 2,
    Stopped = 3,
}

impl From<u8> for PipelineState {
    fn from(value: u8) -> Self {
        match value {
            0 => PipelineState::Created,
            1 => PipelineState::Running,
            2 => PipelineState::Draining,
            _ => PipelineState::Stopped,
        }
    }
}

/// Many producers, one consumer thread.
///
/// Producers push onto an unbounded FIFO and never block on I/O. The single
/// worker owns the target, so file writes and rotation need no lock.
pub struct AsyncLogPipeline {
    sender: RwLock<Option<Sender<LogCommand>>>,
    consumer: Mutex<Option<Consumer>>,
    worker: Mutex<Option<JoinHandle<()>>>,
    state: AtomicU8,
    is_running: Arc<AtomicBool>,
}

impl AsyncLogPipeline {
    pub fn with_target(target: Box<dyn LogTarget + Send>) -> Self {
        let (sender, receiver) = unbounded();
        AsyncLogPipeline {
            sender: RwLock::new(Some(sender)),
            consumer: Mutex::new(Some((receiver, target))),
            worker: Mutex::new(None),
            state: AtomicU8::new(PipelineState::Created as u8),
            is_running: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn state(&self) -> PipelineState {
        PipelineState::from(self.state.load(Ordering::Acquire))
    }

    pub fn is_running(&self) -> bool {
        self.is_running.load(Ordering::Acquire)
    }

    /// Spawns the worker. Calling it again, or after shutdown, does nothing.
    pub fn start(&self) -> Result<(), LoggerError> {
        let mut worker = self.worker.lock().unwrap_or_else(PoisonError::into_inner);
        let Some((receiver, target)) = self.consumer.lock().unwrap_or_else(PoisonError::into_inner).take() else {
            return Ok(());
        };

        self.is_running.store(true, Ordering::Release);
        let is_running = self.is_running.clone();
        let spawned = thread::Builder::new()
            .name(WORKER_THREAD_NAME.to_string())
            .spawn(move || run_consumer(receiver, target, is_running));

        match spawned {
            Ok(handle) => {
                *worker = Some(handle);
                self.set_state(PipelineState::Running);
                Ok(())
            }
            Err(err) => {
                // the consumer went down with the closure, nothing can drain the queue
                self.is_running.store(false, Ordering::Release);
                self.sender.write().unwrap_or_else(PoisonError::into_inner).take();
                self.set_state(PipelineState::Stopped);
                Err(LoggerError::WorkerSpawn(err))
            }
        }
    }

    /// Appends the record to the queue tail. Fails only once shutdown has begun.
    pub fn enqueue(&self, record: LogRecord) -> Result<(), LoggerError> {
        self.send(LogCommand::Record(record))
    }

    /// Blocks until every record enqueued before this call has been written.
    /// Returns immediately while the worker has not been started.
    pub fn flush(&self) -> Result<(), LoggerError> {
        let (ack_sender, ack_receiver) = bounded(1);
        self.send(LogCommand::Flush(ack_sender))?;
        if self.state() == PipelineState::Created {
            return Ok(());
        }
        ack_receiver.recv().map_err(|_| LoggerError::Stopped)
    }

    /// Stops accepting records, then blocks until everything already queued is
    /// written and the worker has exited. Safe to call more than once.
    pub fn shutdown(&self) {
        let mut worker = self.worker.lock().unwrap_or_else(PoisonError::into_inner);
        let sender = self.sender.write().unwrap_or_else(PoisonError::into_inner).take();
        if sender.is_none() && self.state() == PipelineState::Stopped {
            return;
        }

        self.is_running.store(false, Ordering::Release);
        self.set_state(PipelineState::Draining);
        drop(sender);

        if let Some(handle) = worker.take() {
            if handle.join().is_err() {
                eprintln!("Logger worker panicked during shutdown");
            }
        } else if let Some((receiver, target)) = self.consumer.lock().unwrap_or_else(PoisonError::into_inner).take() {
            // never started: the calling thread becomes the only writer
            run_consumer(receiver, target, self.is_running.clone());
        }

        self.set_state(PipelineState::Stopped);
    }

    fn send(&self, command: LogCommand) -> Result<(), LoggerError> {
        let sender = self.sender.read().unwrap_or_else(PoisonError::into_inner);
        match sender.as_ref() {
            Some(sender) => sender.send(command).map_err(|_| LoggerError::Stopped),
            None => Err(LoggerError::Stopped),
        }
    }

    fn set_state(&self, state: PipelineState) {
        self.state.store(state as u8, Ordering::Release);
    }
}

impl Drop for AsyncLogPipeline {
    fn drop(&mut self) {
        self.shutdown();
    }
}

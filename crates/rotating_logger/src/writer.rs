use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};

use crate::{LogRecord, LogTarget};

/// How long the consumer waits for a record before re-checking the running flag.
pub(crate) const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub(crate) enum LogCommand {
    Record(LogRecord),
    Flush(Sender<()>),
}

pub(crate) type Consumer = (Receiver<LogCommand>, Box<dyn LogTarget + Send>);

/// Drains the queue into the target until the queue is closed and empty.
///
/// This is the only code path that writes to the target.
pub(crate) fn run_consumer(receiver: Receiver<LogCommand>,
                           mut target: Box<dyn LogTarget + Send>,
                           is_running: Arc<AtomicBool>
) {
    loop {
        match receiver.recv_timeout(POLL_INTERVAL) {
            Ok(command) => handle_command(command, target.as_mut()),
            Err(RecvTimeoutError::Timeout) => {
                if !is_running.load(Ordering::Acquire) && receiver.is_empty() {
                    break;
                }
            }
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }
}

fn handle_command(command: LogCommand,
                  target: &mut (dyn LogTarget + Send)
) {
    match command {
        LogCommand::Record(record) => {
            let line = record.to_string();
            match panic::catch_unwind(AssertUnwindSafe(|| target.write(&line))) {
                Ok(Ok(())) => {},
                Ok(Err(err)) => eprintln!("Failed to write log record: {}", err),
                Err(_) => eprintln!("Log target panicked, record dropped: {}", line),
            }
        }
        LogCommand::Flush(ack) => {
            let _ = ack.send(());
        }
    }
}

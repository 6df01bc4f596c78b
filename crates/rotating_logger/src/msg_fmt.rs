use std::thread::{self, ThreadId};
use chrono::{DateTime, Local};

#[derive(Debug, Eq, PartialEq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }
}

impl AsRef<str> for LogLevel {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self,
           f: &mut std::fmt::Formatter
    ) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One log line, stamped on the producer side when it is enqueued.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub(crate) timestamp: DateTime<Local>,
    pub(crate) thread_id: ThreadId,
    pub(crate) thread_name: String,
    pub(crate) level: String,
    pub(crate) message: String,
}

impl LogRecord {
    /// Captures the wall clock and the calling thread.
    pub fn new(message: impl Into<String>,
               level: impl AsRef<str>
    ) -> Self {
        let current = thread::current();
        let thread_id = current.id();
        let thread_name = match current.name() {
            Some(name) => name.to_string(),
            None => format!("{:?}", thread_id),
        };

        LogRecord {
            timestamp: Local::now(),
            thread_id,
            thread_name,
            level: level.as_ref().to_string(),
            message: message.into(),
        }
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn thread_id(&self) -> ThreadId {
        self.thread_id
    }

    pub fn thread_name(&self) -> &str {
        &self.thread_name
    }

    pub fn level(&self) -> &str {
        &self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

// [YYYY-MM-DD HH:MM:SS] [thread-name] LEVEL: message
impl std::fmt::Display for LogRecord {
    fn fmt(&self,
           f: &mut std::fmt::Formatter
    ) -> std::fmt::Result {
        write!(f, "[{}] [{}] {}: {}",
               self.timestamp.format("%Y-%m-%d %H:%M:%S"),
               self.thread_name,
               self.level,
               self.message
        )
    }
}

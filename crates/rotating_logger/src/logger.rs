use crate::{AsyncLogPipeline, LogRecord, LogSink, LoggerConfig, LoggerError, PipelineState};

/// Logging service: one configuration, one pipeline, one file sink.
///
/// Can be built and owned directly by an application, or shared process-wide
/// through [`crate::get_instance`].
pub struct ProcessLogger {
    config: LoggerConfig,
    pipeline: AsyncLogPipeline,
}

impl ProcessLogger {
    /// Builds the logger without starting its worker.
    pub fn new(config: LoggerConfig) -> Self {
        let sink = LogSink::from_config(&config);
        ProcessLogger {
            config,
            pipeline: AsyncLogPipeline::with_target(Box::new(sink)),
        }
    }

    pub fn start(&self) -> Result<(), LoggerError> {
        self.pipeline.start()
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn state(&self) -> PipelineState {
        self.pipeline.state()
    }

    pub fn is_running(&self) -> bool {
        self.pipeline.is_running()
    }

    /// Stamps time and calling thread, then queues the record.
    ///
    /// Returns [`LoggerError::Stopped`] once `shutdown` has been called.
    pub fn log(&self,
               message: impl Into<String>,
               level: impl AsRef<str>
    ) -> Result<(), LoggerError> {
        self.pipeline.enqueue(LogRecord::new(message, level))
    }

    pub fn flush(&self) -> Result<(), LoggerError> {
        self.pipeline.flush()
    }

    pub fn shutdown(&self) {
        self.pipeline.shutdown();
    }
}

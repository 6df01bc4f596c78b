// The process-wide logger is shared by every test in a binary, so this file
// holds a single test that walks it through its whole life.
#[cfg(test)]
mod tests {
    use std::fs;
    use std::sync::{Arc, Barrier};
    use std::thread;

    use rotating_logger::{get_instance, is_logger_running, LogLevel, LoggerConfig, LoggerError, PipelineState};
    use tempfile::tempdir;

    #[test]
    fn test_singleton_lifecycle() {
        let dir = tempdir().unwrap();
        let barrier = Arc::new(Barrier::new(8));

        let handles: Vec<_> = (0..8).map(|i| {
            let barrier = barrier.clone();
            let config = LoggerConfig::default().log_file(dir.path().join(format!("app-{}.log", i)));
            thread::spawn(move || {
                barrier.wait();
                get_instance(Some(config))
            })
        }).collect();
        let loggers: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        for logger in &loggers {
            assert!(Arc::ptr_eq(logger, &loggers[0]));
        }
        assert_eq!(loggers[0].state(), PipelineState::Running);
        assert!(is_logger_running());

        // later configurations are ignored
        let winner = loggers[0].config().log_file.clone();
        let again = get_instance(Some(LoggerConfig::default().log_file(dir.path().join("ignored.log"))));
        assert!(Arc::ptr_eq(&again, &loggers[0]));
        assert_eq!(again.config().log_file, winner);

        rotating_logger::info!("hello {}", "world");
        rotating_logger::error!("something broke: {}", 42);
        rotating_logger::log!("AUDIT", "custom tag");
        rotating_logger::flush().unwrap();

        let content = fs::read_to_string(&winner).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("INFO: hello world"));
        assert!(lines[1].ends_with("ERROR: something broke: 42"));
        assert!(lines[2].ends_with("AUDIT: custom tag"));
        assert!(!dir.path().join("ignored.log").exists());

        rotating_logger::shutdown();
        rotating_logger::shutdown();
        assert!(!is_logger_running());
        assert_eq!(loggers[0].state(), PipelineState::Stopped);

        assert!(matches!(rotating_logger::log("late", LogLevel::Info), Err(LoggerError::Stopped)));
        rotating_logger::warn!("silently dropped");
        assert_eq!(fs::read_to_string(&winner).unwrap().lines().count(), 3);
    }
}

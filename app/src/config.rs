use std::env;
use std::str::FromStr;

use rotating_logger::{LoggerConfig, DEFAULT_BACKUP_COUNT, DEFAULT_LOG_FILE, DEFAULT_MAX_SIZE_KB};

pub struct Config {
    pub logger: LoggerConfig,
    pub threads: usize,
    pub messages_per_thread: usize,
}

impl Default for Config {
    fn default() -> Self {
        let log_file = env::var("LOG_FILE").unwrap_or(DEFAULT_LOG_FILE.to_string());
        let max_size_kb = env_or("LOG_MAX_SIZE_KB", DEFAULT_MAX_SIZE_KB);
        let backup_count = env_or("LOG_BACKUP_COUNT", DEFAULT_BACKUP_COUNT);

        Self {
            logger: LoggerConfig::new(log_file, max_size_kb, backup_count),
            threads: env_or("APP_THREADS", 3),
            messages_per_thread: env_or("APP_MESSAGES_PER_THREAD", 5),
        }
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(value) => value.trim().parse().unwrap_or_else(|_| {
            eprintln!("Ignoring invalid {}={:?}", key, value);
            default
        }),
        Err(_) => default,
    }
}

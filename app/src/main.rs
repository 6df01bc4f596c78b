use std::thread;

use dotenv::dotenv;
use logged_macro::logged;
use rotating_logger::LogLevel;

mod config;

#[logged(debug)]
fn worker_thread(thread_id: usize, messages: usize) {
    let logger = rotating_logger::get_instance(None);
    for i in 0..messages {
        if let Err(err) = logger.log(format!("Log message {} from thread {}", i, thread_id), LogLevel::Info) {
            eprintln!("Thread {} could not log: {}", thread_id, err);
        }
    }
}

fn main() {
    dotenv().ok();

    let cfg = config::Config::default();
    let log_file = cfg.logger.log_file.clone();
    let logger = rotating_logger::get_instance(Some(cfg.logger));

    let mut threads = Vec::with_capacity(cfg.threads);
    for i in 0..cfg.threads {
        let messages = cfg.messages_per_thread;
        let spawned = thread::Builder::new()
            .name(format!("Thread-{}", i))
            .spawn(move || worker_thread(i, messages));
        match spawned {
            Ok(handle) => threads.push(handle),
            Err(err) => eprintln!("Failed to spawn Thread-{}: {}", i, err),
        }
    }

    for t in threads {
        let _ = t.join();
    }

    logger.shutdown();
    println!("Logging completed. Check the {} file for output.", log_file.display());
}

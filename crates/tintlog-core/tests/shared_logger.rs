//! Process-wide logger and concurrent emission

use std::collections::HashSet;
use std::fs;
use std::sync::Arc;
use std::thread;

use tintlog_core::logging::{self, bridge};
use tintlog_core::{
    log_error, log_info, log_verbose, log_warn, Logger, LoggerConfig, LogLevel, LogType,
    MemorySink, NoOpSink,
};

#[test]
fn test_shared_logger_lifecycle() {
    let shared = Logger::shared();
    assert!(std::ptr::eq(shared, Logger::shared()));

    let first = logging::current_log_path();
    assert_eq!(first, logging::current_log_path());
    assert_eq!(first, shared.current_log_path());

    logging::set_level(LogLevel::ERROR);
    assert!(!shared.is_enabled(LogType::Warning));
    assert!(shared.is_enabled(LogType::Error));

    logging::set_color_enabled(false);
    logging::set_color(tintlog_core::Color::rgb(1, 2, 3), LogType::Verbose);
    let config = shared.config();
    assert!(!config.color_enabled);
    assert_eq!(config.color_for(LogType::Verbose), Some(tintlog_core::Color::rgb(1, 2, 3)));

    // Filtered out, nothing reaches stdout or disk
    logging::enable_write_log_to_file(true);
    log_verbose!("tick");
    log_info!("hello {}", "world");
    log_warn!("disk at {}%", 90);
    assert!(!first.exists());

    logging::enable_write_log_to_file(false);
    log_error!("printed on stdout only");
    assert!(!first.exists());

    shared.reset();
    assert_eq!(shared.config(), LoggerConfig::default());
    assert_eq!(logging::current_log_path(), first);

    assert!(bridge::init().is_ok());
    assert!(bridge::init().is_err());
}

#[test]
fn test_concurrent_lines_stay_whole() {
    const THREADS: usize = 8;
    const LINES: usize = 50;

    let dir = tempfile::TempDir::new().unwrap();
    let sink = Arc::new(MemorySink::new());
    let logger = Arc::new(
        Logger::builder()
            .config(LoggerConfig::default().with_write_to_file(true).with_color_enabled(false))
            .sink(sink.clone())
            .log_dir(dir.path())
            .build(),
    );
    let padding = "x".repeat(256);

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(&logger);
            let padding = padding.clone();
            thread::spawn(move || {
                for i in 0..LINES {
                    logger.log(LogType::Info, format_args!("thread-{} line-{} {}", t, i, padding));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let content = fs::read_to_string(logger.current_log_path()).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), THREADS * LINES);
    assert_eq!(sink.len(), THREADS * LINES);

    let mut seen = HashSet::new();
    for line in &lines {
        let (_, message) = line.split_once(" [INFO] ").expect("tag present");
        let mut parts = message.split(' ');
        let thread_part = parts.next().unwrap();
        let line_part = parts.next().unwrap();
        assert_eq!(parts.next(), Some(padding.as_str()));
        assert_eq!(parts.next(), None);
        assert!(seen.insert((thread_part.to_string(), line_part.to_string())));
    }

    // Per thread, lines keep their call order
    for t in 0..THREADS {
        let prefix = format!("thread-{} ", t);
        let order: Vec<usize> = lines
            .iter()
            .filter_map(|line| line.split_once(" [INFO] ").map(|(_, m)| m))
            .filter(|m| m.starts_with(&prefix))
            .filter_map(|m| m.split(' ').nth(1)?.strip_prefix("line-")?.parse().ok())
            .collect();
        assert_eq!(order, (0..LINES).collect::<Vec<_>>());
    }
}

#[test]
fn test_file_only_logger() {
    let dir = tempfile::TempDir::new().unwrap();
    let logger = Logger::builder()
        .config(LoggerConfig::default().with_level(LogLevel::ALL).with_write_to_file(true))
        .sink(Arc::new(NoOpSink::new()))
        .log_dir(dir.path().join("nested"))
        .build();

    logger.log(LogType::Verbose, format_args!("a"));
    logger.log(LogType::Error, format_args!("b"));

    let content = fs::read_to_string(logger.current_log_path()).unwrap();
    assert_eq!(content.lines().count(), 2);
    assert!(content.lines().all(|line| !line.contains('\x1b')));
}

//! Integration tests for the logging façade.
//!
//! These tests exercise the public API end to end:
//! - Severity filtering against every minimum level
//! - Unit tagging and formatted/plain equivalence
//! - File sinks and INI-driven configuration
//! - Concurrent writers sharing one context
//! - Swapping backends behind `Arc<dyn Logger>`

use std::sync::Arc;
use std::thread;

use unitlog::log::{NoOpLogger, TracingLogger};
use unitlog::{
    log_info, log_warn, LogConfig, LogContext, LogFormat, Logger, MemorySink, Severity, Sink,
};

// =============================================================================
// Test Helpers
// =============================================================================

fn memory_context(sink: &MemorySink, min_level: &str) -> LogContext {
    LogContext::new(
        LogConfig::default()
            .with_sink(sink.clone())
            .with_min_level(min_level)
            .with_timestamps(false),
    )
}

// =============================================================================
// Filtering
// =============================================================================

#[test]
fn test_every_minimum_against_every_severity() {
    for min in Severity::ALL {
        let sink = MemorySink::new();
        let logger = memory_context(&sink, min.as_str()).logger("grid");

        for severity in Severity::ALL {
            logger.log(severity, format_args!("at {}", severity));
        }

        let expected: Vec<String> = Severity::ALL
            .iter()
            .filter(|s| **s >= min)
            .map(|s| format!("[{}] grid: at {}", s, s))
            .collect();
        assert_eq!(sink.lines(), expected, "minimum {}", min);
    }
}

#[test]
fn test_warn_minimum_scenario() {
    let sink = MemorySink::new();
    let db = memory_context(&sink, "WARN").logger("db");

    db.debug("connecting");
    db.warn("slow query");

    assert_eq!(sink.lines(), vec!["[WARN] db: slow query"]);
}

#[test]
fn test_all_defaults_scenario() {
    let sink = MemorySink::new();
    let context = LogContext::new(
        LogConfig::default()
            .with_sink(sink.clone())
            .with_timestamps(false),
    );

    context.logger("api").error("boom");

    assert_eq!(sink.lines(), vec!["[ERROR] api: boom"]);
}

#[test]
fn test_invalid_minimum_never_silences() {
    let sink = MemorySink::new();
    let logger = memory_context(&sink, "not-a-level").logger("svc");
    sink.clear();

    for severity in Severity::ALL {
        logger.log(severity, format_args!("m"));
    }

    // Everything from DEBUG upwards passes
    assert_eq!(sink.lines().len(), Severity::ALL.len() - 1);
}

// =============================================================================
// Tagging and formatting
// =============================================================================

#[test]
fn test_unit_appears_in_every_format() {
    for format in [LogFormat::Plain, LogFormat::Json, LogFormat::Console] {
        let sink = MemorySink::new();
        let context = LogContext::new(
            LogConfig::default()
                .with_sink(sink.clone())
                .with_format(format)
                .with_ansi(false),
        );
        context.logger("payments").info("charged");

        let output = sink.contents();
        assert!(output.contains("payments"), "{format}: {output}");
        assert!(output.contains("charged"), "{format}: {output}");
    }
}

#[test]
fn test_formatted_and_plain_writes_are_identical() {
    let sink = MemorySink::new();
    let logger = memory_context(&sink, "debug").logger("db");

    log_info!(logger, "{} rows in {:.1}s", 42, 1.5);
    logger.info("42 rows in 1.5s");

    let lines = sink.lines();
    assert_eq!(lines, vec!["[INFO] db: 42 rows in 1.5s"; 2]);
}

#[test]
fn test_json_records_parse() {
    let sink = MemorySink::new();
    let context = LogContext::new(
        LogConfig::default()
            .with_sink(sink.clone())
            .with_format(LogFormat::Json),
    );
    let logger = context.logger("auth");
    log_warn!(logger, "token for {} expires soon", "ada");
    logger.panic("corrupt session");

    let records: Vec<serde_json::Value> = sink
        .lines()
        .iter()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["level"], "warn");
    assert_eq!(records[0]["unit"], "auth");
    assert_eq!(records[0]["message"], "token for ada expires soon");
    assert!(records[0]["time"].as_str().unwrap().ends_with('Z'));
    assert_eq!(records[1]["level"], "panic");
}

// =============================================================================
// Sinks and configuration sources
// =============================================================================

#[test]
fn test_file_sink_creates_directories_and_appends() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs/nested/app.log");

    let config = LogConfig::default()
        .with_sink(Sink::File(path.clone()))
        .with_timestamps(false);
    LogContext::new(config.clone()).logger("first").info("one");
    LogContext::new(config).logger("second").info("two");

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "[INFO] first: one\n[INFO] second: two\n"
    );
}

#[test]
fn test_ini_file_drives_context() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("service.log");
    let config_path = dir.path().join("logging.ini");
    std::fs::write(
        &config_path,
        format!(
            "[logging]\nlevel = info\nlevels = info, error\ntimestamps = false\nfile = {}\n",
            log_path.display()
        ),
    )
    .unwrap();

    let config = LogConfig::load_from(&config_path).unwrap();
    let logger = LogContext::new(config).logger("worker");
    logger.debug("d");
    logger.info("i");
    logger.warn("w");
    logger.error("e");

    assert_eq!(
        std::fs::read_to_string(&log_path).unwrap(),
        "[INFO] worker: i\n[ERROR] worker: e\n"
    );
}

#[test]
fn test_custom_writer_sink() {
    let buffer = MemorySink::new();
    let context = LogContext::new(
        LogConfig::default()
            .with_sink(Sink::writer(buffer.clone()))
            .with_timestamps(false),
    );
    context.logger("w").info("through a writer");
    assert_eq!(buffer.lines(), vec!["[INFO] w: through a writer"]);
}

// =============================================================================
// Concurrency
// =============================================================================

#[test]
fn test_concurrent_writers_produce_whole_lines() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 200;

    let sink = MemorySink::new();
    let context = memory_context(&sink, "debug");

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = context.logger(&format!("t{}", t));
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    log_info!(logger, "message {}", i);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let lines = sink.lines();
    assert_eq!(lines.len(), THREADS * PER_THREAD);
    assert!(lines
        .iter()
        .all(|line| line.starts_with("[INFO] t") && line.contains(": message ")));

    // Per-thread order survives interleaving between threads
    for t in 0..THREADS {
        let prefix = format!("[INFO] t{}: message ", t);
        let sequence: Vec<usize> = lines
            .iter()
            .filter_map(|line| line.strip_prefix(&prefix))
            .map(|n| n.parse().unwrap())
            .collect();
        assert_eq!(sequence, (0..PER_THREAD).collect::<Vec<_>>());
    }
}

// =============================================================================
// Backend swapping
// =============================================================================

struct Service {
    logger: Arc<dyn Logger>,
}

impl Service {
    fn handle(&self, id: u32) {
        log_info!(self.logger, "handling request {}", id);
    }
}

#[test]
fn test_component_accepts_any_backend() {
    let sink = MemorySink::new();
    let backends: Vec<Arc<dyn Logger>> = vec![
        Arc::new(memory_context(&sink, "debug").logger("svc")),
        Arc::new(NoOpLogger),
        Arc::new(TracingLogger::with_unit("svc")),
    ];

    for logger in backends {
        Service { logger }.handle(7);
    }

    assert_eq!(sink.lines(), vec!["[INFO] svc: handling request 7"]);
}

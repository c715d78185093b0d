//! Stress tests for concurrent logging
//!
//! These tests verify:
//! - Lines written from many threads never interleave
//! - A shared prefix table renders identically from every thread
//! - Metrics stay exact under contention

use parking_lot::Mutex;
use rust_console_logger::prelude::*;
use std::io::{self, Write};
use std::sync::Arc;
use std::thread;

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuffer {
    // Byte-at-a-time writes make any missing serialization visible
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match buf.first() {
            Some(byte) => {
                self.0.lock().push(*byte);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_concurrent_lines_do_not_interleave() {
    const THREADS: usize = 8;
    const MESSAGES: usize = 200;

    let buffer = SharedBuffer::default();
    let logger = Arc::new(
        Logger::builder(Arc::new(PrefixTable::new(PrefixStyle::Short)))
            .level(LogLevel::Debug)
            .time_format(TimeFormat::disabled())
            .output(WriterAppender::new(buffer.clone()))
            .build(),
    );

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..MESSAGES {
                    let level = if i % 2 == 0 { LogLevel::Info } else { LogLevel::Debug };
                    logger.log(level, format!("thread {} message {}", t, i));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Logging thread panicked");
    }

    let content = String::from_utf8(buffer.0.lock().clone()).expect("log output is UTF-8");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), THREADS * MESSAGES);
    for line in lines {
        assert!(
            line.starts_with("[INFO] thread ") || line.starts_with("[DBUG] thread "),
            "interleaved line: {:?}",
            line
        );
        assert_eq!(line.matches("thread").count(), 1, "interleaved line: {:?}", line);
    }
    assert_eq!(logger.metrics().lines_written(), (THREADS * MESSAGES) as u64);
}

#[test]
fn test_shared_prefix_table_across_threads() {
    let table = Arc::new(PrefixTable::new(PrefixStyle::Long));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let table = Arc::clone(&table);
            thread::spawn(move || {
                (0..1000)
                    .map(|i| table.render(LogLevel::ALL[i % 5], i % 2 == 0).to_string())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let results: Vec<Vec<String>> = handles
        .into_iter()
        .map(|h| h.join().expect("Render thread panicked"))
        .collect();
    for result in &results[1..] {
        assert_eq!(result, &results[0]);
    }
}

#[test]
fn test_suppression_count_under_contention() {
    let logger = Arc::new(
        Logger::builder(Arc::new(PrefixTable::default()))
            .level(LogLevel::Error)
            .output(WriterAppender::new(io::sink()))
            .build(),
    );

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for _ in 0..500 {
                    logger.debug("filtered");
                    logger.error("kept");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Logging thread panicked");
    }

    assert_eq!(logger.metrics().suppressed_count(), 2000);
    assert_eq!(logger.metrics().lines_written(), 2000);
}

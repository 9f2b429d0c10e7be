//! Shared fixtures for the adapter integration tests.
#![allow(dead_code)]

use logbridge_adapters::LogSink;
use logbridge_ports::Logger;
use slog::{o, Drain, FnValue, PushFnValue};
use std::io;
use std::sync::{Arc, Mutex};

/// A log sink backed by a shared line buffer.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn take(&self) -> Vec<String> {
        let mut guard = self.lines.lock().expect("memory sink lock");
        std::mem::take(&mut *guard)
    }
}

impl LogSink for MemorySink {
    fn write_line(&self, line: &str) {
        let mut guard = self.lines.lock().expect("memory sink lock");
        guard.push(line.to_string());
    }
}

/// An `io::Write` backed by a shared byte buffer.
#[derive(Clone, Default)]
pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    pub fn contents(&self) -> String {
        let guard = self.0.lock().expect("shared buffer lock");
        String::from_utf8_lossy(&guard).into_owned()
    }

    /// Parse each buffered line as a JSON object.
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.contents()
            .lines()
            .map(|line| serde_json::from_str(line).expect("buffered line is JSON"))
            .collect()
    }
}

impl io::Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self.0.lock().expect("shared buffer lock");
        guard.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// An `slog::Logger` rendering JSON lines into the returned buffer.
///
/// Each line carries `level` and `msg` plus whatever pairs the record and its
/// context contribute.
pub fn json_slog() -> (slog::Logger, SharedBuf) {
    let buf = SharedBuf::default();
    let drain = slog_json::Json::new(buf.clone())
        .set_newlines(true)
        .add_key_value(o!(
            "level" => FnValue(|record: &slog::Record<'_>| record.level().as_str()),
            "msg" => PushFnValue(|record: &slog::Record<'_>, ser| ser.emit(record.msg())),
        ))
        .build()
        .fuse();
    let drain = Mutex::new(drain).fuse();
    (slog::Logger::root(drain, o!()), buf)
}

/// Issue one info record through the given handle from this file.
pub fn info_from_support(logger: &dyn Logger, message: &str) -> u32 {
    let line = line!() + 1;
    logger.info(format_args!("{message}"));
    line
}

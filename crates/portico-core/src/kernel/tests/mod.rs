#[cfg(test)]
mod error_tests;
#[cfg(test)]
mod instance_tests;

use std::sync::Mutex;

/// Keeps every log line emitted by the crate while tests run
struct CapturedLog {
    lines: Mutex<Vec<String>>,
}

impl log::Log for CapturedLog {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        self.lines.lock().unwrap().push(record.args().to_string());
    }

    fn flush(&self) {}
}

static CAPTURED_LOG: CapturedLog = CapturedLog {
    lines: Mutex::new(Vec::new()),
};

/// Route `log` records into the shared capture; later calls are no-ops.
pub(crate) fn capture_log() {
    if log::set_logger(&CAPTURED_LOG).is_ok() {
        log::set_max_level(log::LevelFilter::Info);
    }
}

pub(crate) fn captured_lines() -> Vec<String> {
    CAPTURED_LOG.lines.lock().unwrap().clone()
}

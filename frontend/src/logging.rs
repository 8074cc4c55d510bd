use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;
use web_sys::console;

/// Forwards `log` records to the browser console.
pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line: JsValue =
            format_record(record.level(), record.target(), &record.args().to_string()).into();
        match record.level() {
            Level::Error => console::error_1(&line),
            Level::Warn => console::warn_1(&line),
            Level::Info => console::info_1(&line),
            Level::Debug | Level::Trace => console::log_1(&line),
        }
    }

    fn flush(&self) {}
}

fn format_record(level: Level, target: &str, message: &str) -> String {
    format!("[{level} {target}] {message}")
}

pub fn max_level(debug_mode: bool) -> LevelFilter {
    if debug_mode {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

// A second call keeps the first logger in place.
pub fn init(debug_mode: bool) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(max_level(debug_mode));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_line_carries_level_and_target() {
        assert_eq!(
            format_record(Level::Warn, "videos::feed", "stale response"),
            "[WARN videos::feed] stale response"
        );
    }

    #[test]
    fn debug_mode_lowers_the_level() {
        assert_eq!(max_level(true), LevelFilter::Debug);
        assert_eq!(max_level(false), LevelFilter::Info);
    }
}

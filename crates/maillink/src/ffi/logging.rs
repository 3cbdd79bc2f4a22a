//! FFI logging backend that routes logs to Swift/Kotlin via callback
//!
//! Installs a `log` backend that forwards records to a foreign [`LogCallback`],
//! so resolution and launch decisions show up in the host's unified logging.

use std::sync::{Arc, OnceLock, RwLock};

use log::{Level, Log, Metadata, Record};

use super::types::{FfiLogLevel, LogCallback};

/// Global storage for the bridge logger
static BRIDGE_LOGGER: OnceLock<BridgeLogger> = OnceLock::new();

/// Logger that forwards to a foreign callback when one is set
struct BridgeLogger {
    callback: RwLock<Option<Arc<dyn LogCallback>>>,
    max_level: RwLock<Level>,
}

impl BridgeLogger {
    fn new(max_level: Level) -> Self {
        Self {
            callback: RwLock::new(None),
            max_level: RwLock::new(max_level),
        }
    }

    fn replace_callback(&self, callback: Option<Arc<dyn LogCallback>>) {
        if let Ok(mut guard) = self.callback.write() {
            *guard = callback;
        }
    }

    fn set_max_level(&self, level: Level) {
        if let Ok(mut guard) = self.max_level.write() {
            *guard = level;
        }
    }

    fn max_level(&self) -> Level {
        self.max_level.read().map(|l| *l).unwrap_or(Level::Info)
    }

    fn has_callback(&self) -> bool {
        self.callback.read().is_ok_and(|cb| cb.is_some())
    }
}

impl Log for BridgeLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level() && self.has_callback()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        if let Ok(guard) = self.callback.read() {
            if let Some(ref callback) = *guard {
                callback.on_log(
                    FfiLogLevel::from(record.level()),
                    record.target().to_string(),
                    record.args().to_string(),
                );
            }
        }
    }

    fn flush(&self) {}
}

/// Install the bridge logger and route records to `callback`
///
/// Returns `false` when another logger was already installed as the global
/// logger; the callback is still stored and used if the bridge is later the
/// active logger.
#[uniffi::export]
pub fn init_logging(callback: Box<dyn LogCallback>, max_level: FfiLogLevel) -> bool {
    let level = Level::from(max_level);
    let logger = BRIDGE_LOGGER.get_or_init(|| BridgeLogger::new(level));
    logger.set_max_level(level);
    logger.replace_callback(Some(Arc::from(callback)));

    if log::set_logger(logger).is_err() {
        return false;
    }
    log::set_max_level(level.to_level_filter());
    true
}

/// Replace the callback receiving log records
#[uniffi::export]
pub fn set_log_callback(callback: Box<dyn LogCallback>) {
    if let Some(logger) = BRIDGE_LOGGER.get() {
        logger.replace_callback(Some(Arc::from(callback)));
    }
}

/// Stop forwarding log records; they are dropped until a callback is set
#[uniffi::export]
pub fn clear_log_callback() {
    if let Some(logger) = BRIDGE_LOGGER.get() {
        logger.replace_callback(None);
    }
}

/// Update the maximum log level
#[uniffi::export]
pub fn set_log_level(level: FfiLogLevel) {
    if let Some(logger) = BRIDGE_LOGGER.get() {
        let level = Level::from(level);
        logger.set_max_level(level);
        log::set_max_level(level.to_level_filter());
    }
}

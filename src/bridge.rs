use crate::{global, Caller, LinelogError, Severity};
use log::{LevelFilter, Log, Metadata, Record};

// Forwards records of the `log` facade to the process-wide router.
struct LogBridge;

static LOG_BRIDGE: LogBridge = LogBridge;

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        global::current().is_enabled(Severity::from(metadata.level()))
    }

    fn log(&self, record: &Record) {
        let caller = match (record.module_path_static(), record.line()) {
            (Some(module_path), Some(line)) => Caller::new(module_path, line),
            _ => Caller::unknown(),
        };
        global::current().log_fmt(Severity::from(record.level()), caller, *record.args());
    }

    fn flush(&self) {}
}

/// Makes the macros of the [`log`](https://docs.rs/log) crate write through `linelog`,
/// e.g. to capture the output of libraries that use `log`.
///
/// Records go to the process-wide router, like those of the `linelog` macros;
/// `TRACE` is treated as `DEBUG`. The caller label is derived from the module path,
/// as the `log` macros do not expose the function name.
///
/// Filtering is left to the [`LevelSet`](crate::LevelSet) of the router,
/// so the maximum level of the `log` crate is set to `Trace`.
///
/// ```rust
/// let _logger = linelog::init("development", true);
/// linelog::bridge_log_crate().unwrap();
/// log::warn!("from a library");
/// ```
///
/// # Errors
///
/// `LinelogError::Log` if another logger was already registered with the `log` crate.
pub fn bridge_log_crate() -> Result<(), LinelogError> {
    log::set_logger(&LOG_BRIDGE)?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}

// only enables the `doc_cfg` feature when the `docsrs` configuration attribute is defined
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::needless_doctest_main)]
//! A leveled logger for Linux utilities and daemons that tags every line
//! with the calling function.
//!
//! Initialize it once, at the start of your program, and use the logging macros:
//!
//! ```rust
//! fn main() {
//!     let _logger = linelog::init("development", true);
//!
//!     linelog::infof!("listening on port {}", 8080);
//!     linelog::info_kv!("request completed", "status", 200, "path", "/api/users");
//!     linelog::api!(404, "no such user");
//! }
//! ```
//!
//! which produces, in development mode, colored lines like
//!
//! ```text
//! [INFO] 2024/05/17 14:03:59 [my_server::main:4] listening on port 8080
//! [INFO] 2024/05/17 14:03:59 [my_server::main:5] request completed status=200 path=/api/users
//! [WARN] 2024/05/17 14:03:59 [my_server::main:6] [404] no such user
//! ```
//!
//! In production mode, the lines go to the systemd journal (with the program name as syslog
//! identifier), or, if no journal is reachable, without color and timestamp to stdout
//! (`DEBUG`, `INFO`) and stderr (`WARN`, `ERROR`, `FATAL`).
//!
//! See
//!
//! * the [`macros`] module for the logging macros,
//! * the builder [`Logger`] for all configuration options and the routing rules,
//! * [`LevelSet`] for the syntax of the environment variable
//!   [`LOGGER_LEVELS`](LEVELS_ENV_VAR), which restricts the enabled severities,
//! * the module [`writers`] for the outputs, including the journal connection.
//!
//! Concurrent log calls never produce interleaved or partial lines: all writes,
//! including the copy to the log file, are serialized by a single lock.
//!
//! The logging macros never return errors. Problems while writing are reported on stderr,
//! prefixed with `[linelog]`. The only log call that changes control flow is `FATAL`,
//! which terminates the process with exit code 1.
//!
//! By default, i.e. if feature `colors` is not switched off, the severity labels in development
//! mode are colored.

#[doc(hidden)]
pub mod __private_api;
mod backend;
mod bridge;
mod caller;
mod deferred_now;
mod global;
pub mod kv;
mod level_set;
mod linelog_error;
mod logger;
mod logger_handle;
pub mod macros;
mod router;
mod severity;
mod util;
pub mod writers;

pub use crate::bridge::bridge_log_crate;
pub use crate::caller::Caller;
pub use crate::deferred_now::{DeferredNow, TS_FORMAT};
pub use crate::global::{current, init, init_with_file, teardown};
pub use crate::level_set::{LevelSet, LEVELS_ENV_VAR};
pub use crate::linelog_error::LinelogError;
pub use crate::logger::{Logger, Mode};
pub use crate::logger_handle::LoggerHandle;
pub use crate::router::Router;
pub use crate::severity::Severity;

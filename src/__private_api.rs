// Entry points of the logging macros; not part of the public API.

use crate::{global, kv::Value, Caller, Router, Severity};
use std::fmt::{self, Display};

pub use crate::caller::type_name_of;

pub fn log_fmt(o_router: Option<&Router>, severity: Severity, caller: Caller, args: fmt::Arguments<'_>) {
    match o_router {
        Some(router) => router.log_fmt(severity, caller, args),
        None => global::current().log_fmt(severity, caller, args),
    }
}

pub fn log_plain(
    o_router: Option<&Router>,
    severity: Severity,
    caller: Caller,
    items: &[&dyn Display],
) {
    match o_router {
        Some(router) => router.log_plain(severity, caller, items),
        None => global::current().log_plain(severity, caller, items),
    }
}

pub fn log_kv(
    o_router: Option<&Router>,
    severity: Severity,
    caller: Caller,
    message: &str,
    items: &[Value<'_>],
) {
    match o_router {
        Some(router) => router.log_kv(severity, caller, message, items),
        None => global::current().log_kv(severity, caller, message, items),
    }
}

// Accepts any integer type; values beyond the range of `i64` are clamped.
pub fn log_api<S: TryInto<i64>>(
    o_router: Option<&Router>,
    caller: Caller,
    status: S,
    args: fmt::Arguments<'_>,
) {
    let status = status.try_into().unwrap_or(i64::MAX);
    match o_router {
        Some(router) => router.api(caller, status, args),
        None => global::current().api(caller, status, args),
    }
}

pub fn fatal_fmt(o_router: Option<&Router>, caller: Caller, args: fmt::Arguments<'_>) -> ! {
    match o_router {
        Some(router) => router.fatal_fmt(caller, args),
        None => global::current().fatal_fmt(caller, args),
    }
}

pub fn fatal_plain(o_router: Option<&Router>, caller: Caller, items: &[&dyn Display]) -> ! {
    match o_router {
        Some(router) => router.fatal_plain(caller, items),
        None => global::current().fatal_plain(caller, items),
    }
}

pub fn fatal_kv(
    o_router: Option<&Router>,
    caller: Caller,
    message: &str,
    items: &[Value<'_>],
) -> ! {
    match o_router {
        Some(router) => router.fatal_kv(caller, message, items),
        None => global::current().fatal_kv(caller, message, items),
    }
}

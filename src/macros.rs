//! The logging macros.
//!
//! Each severity has three macro families:
//!
//! | family | macros | message |
//! |--------|--------|---------|
//! | formatted | [`debugf!`], [`infof!`], [`warnf!`], [`errorf!`], [`fatalf!`] | `format!` syntax |
//! | plain | [`debugln!`], [`infoln!`], [`warnln!`], [`errorln!`], [`fatalln!`] | the arguments' `Display` forms, without separator |
//! | structured | [`debug_kv!`], [`info_kv!`], [`warn_kv!`], [`error_kv!`], [`fatal_kv!`] | a message, then alternating keys and values |
//!
//! and [`api!`] chooses the severity from an HTTP status code.
//!
//! All macros prefix the message with the calling function and line, e.g. `[server::accept:42]`.
//! They write through the process-wide router, or, with a leading `logger: <&Router>` argument,
//! through the given router. They never fail and never panic.
//!
//! The `fatal` macros terminate the process with exit code 1 after writing
//! (also when `FATAL` is disabled, then without writing).

#[doc(hidden)]
#[macro_export]
macro_rules! __linelog_fmt {
    ($o_router:expr, $severity:ident, $($arg:tt)+) => {
        $crate::__private_api::log_fmt(
            $o_router,
            $crate::Severity::$severity,
            $crate::caller!(),
            ::std::format_args!($($arg)+),
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __linelog_plain {
    ($o_router:expr, $severity:ident $(, $arg:expr)*) => {
        $crate::__private_api::log_plain(
            $o_router,
            $crate::Severity::$severity,
            $crate::caller!(),
            &[$(&$arg as &dyn ::std::fmt::Display),*],
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __linelog_kv {
    ($o_router:expr, $severity:ident, $message:expr $(, $item:expr)*) => {
        $crate::__private_api::log_kv(
            $o_router,
            $crate::Severity::$severity,
            $crate::caller!(),
            ::std::convert::AsRef::<str>::as_ref(&$message),
            &[$($crate::kv::ToValue::to_value(&$item)),*],
        )
    };
}

/// Logs a formatted `DEBUG` record.
///
/// ```rust
/// linelog::debugf!("cache size is {}", 42);
/// ```
#[macro_export]
macro_rules! debugf {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::__linelog_fmt!(::std::option::Option::Some($logger), Debug, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__linelog_fmt!(::std::option::Option::None, Debug, $($arg)+)
    };
}

/// Logs a formatted `INFO` record.
///
/// ```rust
/// linelog::infof!("listening on {}:{}", "0.0.0.0", 8080);
/// ```
#[macro_export]
macro_rules! infof {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::__linelog_fmt!(::std::option::Option::Some($logger), Info, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__linelog_fmt!(::std::option::Option::None, Info, $($arg)+)
    };
}

/// Logs a formatted `WARN` record.
#[macro_export]
macro_rules! warnf {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::__linelog_fmt!(::std::option::Option::Some($logger), Warn, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__linelog_fmt!(::std::option::Option::None, Warn, $($arg)+)
    };
}

/// Logs a formatted `ERROR` record.
#[macro_export]
macro_rules! errorf {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::__linelog_fmt!(::std::option::Option::Some($logger), Error, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__linelog_fmt!(::std::option::Option::None, Error, $($arg)+)
    };
}

/// Logs a formatted `FATAL` record and terminates the process with exit code 1.
///
/// ```rust,no_run
/// let config_path = "/etc/myprog.conf";
/// linelog::fatalf!("cannot read {}", config_path);
/// ```
#[macro_export]
macro_rules! fatalf {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::__private_api::fatal_fmt(
            ::std::option::Option::Some($logger),
            $crate::caller!(),
            ::std::format_args!($($arg)+),
        )
    };
    ($($arg:tt)+) => {
        $crate::__private_api::fatal_fmt(
            ::std::option::Option::None,
            $crate::caller!(),
            ::std::format_args!($($arg)+),
        )
    };
}

/// Logs a `DEBUG` record that consists of the arguments, concatenated without separator.
///
/// ```rust
/// linelog::debugln!("retry ", 3, " of ", 5); // ... retry 3 of 5
/// ```
#[macro_export]
macro_rules! debugln {
    (logger: $logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__linelog_plain!(::std::option::Option::Some($logger), Debug $(, $arg)*)
    };
    ($($arg:expr),* $(,)?) => {
        $crate::__linelog_plain!(::std::option::Option::None, Debug $(, $arg)*)
    };
}

/// Logs an `INFO` record that consists of the arguments, concatenated without separator.
#[macro_export]
macro_rules! infoln {
    (logger: $logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__linelog_plain!(::std::option::Option::Some($logger), Info $(, $arg)*)
    };
    ($($arg:expr),* $(,)?) => {
        $crate::__linelog_plain!(::std::option::Option::None, Info $(, $arg)*)
    };
}

/// Logs a `WARN` record that consists of the arguments, concatenated without separator.
#[macro_export]
macro_rules! warnln {
    (logger: $logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__linelog_plain!(::std::option::Option::Some($logger), Warn $(, $arg)*)
    };
    ($($arg:expr),* $(,)?) => {
        $crate::__linelog_plain!(::std::option::Option::None, Warn $(, $arg)*)
    };
}

/// Logs an `ERROR` record that consists of the arguments, concatenated without separator.
#[macro_export]
macro_rules! errorln {
    (logger: $logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__linelog_plain!(::std::option::Option::Some($logger), Error $(, $arg)*)
    };
    ($($arg:expr),* $(,)?) => {
        $crate::__linelog_plain!(::std::option::Option::None, Error $(, $arg)*)
    };
}

/// Logs a `FATAL` record that consists of the arguments, concatenated without separator,
/// and terminates the process with exit code 1.
#[macro_export]
macro_rules! fatalln {
    (logger: $logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__private_api::fatal_plain(
            ::std::option::Option::Some($logger),
            $crate::caller!(),
            &[$(&$arg as &dyn ::std::fmt::Display),*],
        )
    };
    ($($arg:expr),* $(,)?) => {
        $crate::__private_api::fatal_plain(
            ::std::option::Option::None,
            $crate::caller!(),
            &[$(&$arg as &dyn ::std::fmt::Display),*],
        )
    };
}

/// Logs a `DEBUG` record with key-value fields.
///
/// See [`kv`](crate::kv) for how the items are rendered.
///
/// ```rust
/// linelog::debug_kv!("cache lookup", "key", "user:17", "hit", false);
/// ```
#[macro_export]
macro_rules! debug_kv {
    (logger: $logger:expr, $message:expr $(, $item:expr)* $(,)?) => {
        $crate::__linelog_kv!(::std::option::Option::Some($logger), Debug, $message $(, $item)*)
    };
    ($message:expr $(, $item:expr)* $(,)?) => {
        $crate::__linelog_kv!(::std::option::Option::None, Debug, $message $(, $item)*)
    };
}

/// Logs an `INFO` record with key-value fields.
///
/// See [`kv`](crate::kv) for how the items are rendered.
///
/// ```rust
/// linelog::info_kv!("request completed", "status", 200, "path", "/api/users");
/// ```
#[macro_export]
macro_rules! info_kv {
    (logger: $logger:expr, $message:expr $(, $item:expr)* $(,)?) => {
        $crate::__linelog_kv!(::std::option::Option::Some($logger), Info, $message $(, $item)*)
    };
    ($message:expr $(, $item:expr)* $(,)?) => {
        $crate::__linelog_kv!(::std::option::Option::None, Info, $message $(, $item)*)
    };
}

/// Logs a `WARN` record with key-value fields.
#[macro_export]
macro_rules! warn_kv {
    (logger: $logger:expr, $message:expr $(, $item:expr)* $(,)?) => {
        $crate::__linelog_kv!(::std::option::Option::Some($logger), Warn, $message $(, $item)*)
    };
    ($message:expr $(, $item:expr)* $(,)?) => {
        $crate::__linelog_kv!(::std::option::Option::None, Warn, $message $(, $item)*)
    };
}

/// Logs an `ERROR` record with key-value fields.
#[macro_export]
macro_rules! error_kv {
    (logger: $logger:expr, $message:expr $(, $item:expr)* $(,)?) => {
        $crate::__linelog_kv!(::std::option::Option::Some($logger), Error, $message $(, $item)*)
    };
    ($message:expr $(, $item:expr)* $(,)?) => {
        $crate::__linelog_kv!(::std::option::Option::None, Error, $message $(, $item)*)
    };
}

/// Logs a `FATAL` record with key-value fields and terminates the process with exit code 1.
#[macro_export]
macro_rules! fatal_kv {
    (logger: $logger:expr, $message:expr $(, $item:expr)* $(,)?) => {
        $crate::__private_api::fatal_kv(
            ::std::option::Option::Some($logger),
            $crate::caller!(),
            ::std::convert::AsRef::<str>::as_ref(&$message),
            &[$($crate::kv::ToValue::to_value(&$item)),*],
        )
    };
    ($message:expr $(, $item:expr)* $(,)?) => {
        $crate::__private_api::fatal_kv(
            ::std::option::Option::None,
            $crate::caller!(),
            ::std::convert::AsRef::<str>::as_ref(&$message),
            &[$($crate::kv::ToValue::to_value(&$item)),*],
        )
    };
}

/// Logs `[status] message` with a severity that depends on the HTTP status code:
/// `5xx` is `ERROR`, `4xx` is `WARN`, everything else (including `3xx`) is `INFO`.
///
/// The status can be of any integer type. The message uses `format!` syntax.
///
/// ```rust
/// let path = "/api/users/17";
/// linelog::api!(404, "no such user: {}", path); // [WARN] ... [404] no such user: /api/users/17
/// ```
#[macro_export]
macro_rules! api {
    (logger: $logger:expr, $status:expr, $($arg:tt)+) => {
        $crate::__private_api::log_api(
            ::std::option::Option::Some($logger),
            $crate::caller!(),
            $status,
            ::std::format_args!($($arg)+),
        )
    };
    ($status:expr, $($arg:tt)+) => {
        $crate::__private_api::log_api(
            ::std::option::Option::None,
            $crate::caller!(),
            $status,
            ::std::format_args!($($arg)+),
        )
    };
}

#[cfg(test)]
mod test {
    use crate::{kv::display, writers::SharedBuffer, LevelSet, Logger, Mode, Router};
    use std::sync::Arc;

    fn plain_router() -> (Router, SharedBuffer, SharedBuffer) {
        let out = SharedBuffer::new();
        let err = SharedBuffer::new();
        let router = Logger::new(Mode::Production)
            .journal(Arc::new(
                crate::writers::test_support::RecordingJournal::default(),
            ))
            .levels(LevelSet::all())
            .stdout(out.clone())
            .stderr(err.clone())
            .build();
        (router, out, err)
    }

    #[test]
    fn test_formatted_macros() {
        let (router, out, err) = plain_router();
        let line = line!() + 1;
        crate::infof!(logger: &router, "{} + {} = {}", 1, 2, 1 + 2);
        crate::debugf!(logger: &router, "plain text");
        crate::warnf!(logger: &router, "w{}", 1);
        crate::errorf!(logger: &router, "e{x}", x = 2);

        assert_eq!(
            out.lines(),
            [
                format!("[INFO] [test::test_formatted_macros:{line}] 1 + 2 = 3"),
                format!("[DEBUG] [test::test_formatted_macros:{}] plain text", line + 1),
            ]
        );
        assert_eq!(
            err.lines(),
            [
                format!("[WARN] [test::test_formatted_macros:{}] w1", line + 2),
                format!("[ERROR] [test::test_formatted_macros:{}] e2", line + 3),
            ]
        );
    }

    #[test]
    fn test_plain_macros() {
        let (router, out, err) = plain_router();
        let user = String::from("alice");
        crate::infoln!(logger: &router, "user ", user, " has ", 3, " sessions");
        crate::debugln!(logger: &router);
        crate::errorln!(logger: &router, 1.5, 'x', true,);
        crate::warnln!(logger: &router, "a", "b");

        let out = out.lines();
        assert!(out[0].ends_with("] user alice has 3 sessions"), "{}", out[0]);
        assert!(out[1].ends_with("] "), "{}", out[1]);
        let err = err.lines();
        assert!(err[0].ends_with("] 1.5xtrue"), "{}", err[0]);
        assert!(err[1].ends_with("] ab"), "{}", err[1]);
    }

    #[test]
    fn test_kv_macros() {
        let (router, out, err) = plain_router();
        let path = String::from("/api/users");
        let addr: std::net::IpAddr = "10.0.0.1".parse().unwrap();
        crate::info_kv!(logger: &router, "request completed", "status", 200, "path", path);
        crate::error_kv!(logger: &router, String::from("db error"), "peer", addr, 42, "dropped");
        crate::warn_kv!(logger: &router, "odd", "a", 1, "dangling");
        crate::debug_kv!(
            logger: &router,
            "wrapped",
            "elapsed",
            display(&format_args!("{}ms", 12))
        );

        let out = out.lines();
        assert!(
            out[0].ends_with("] request completed status=200 path=/api/users"),
            "{}",
            out[0]
        );
        assert!(out[1].ends_with("] wrapped elapsed=12ms"), "{}", out[1]);
        let err = err.lines();
        assert!(err[0].ends_with("] db error peer=10.0.0.1"), "{}", err[0]);
        assert!(err[1].ends_with("] odd a=1"), "{}", err[1]);
    }

    #[test]
    fn test_api_macro() {
        let (router, out, err) = plain_router();
        let line = line!() + 1;
        crate::api!(logger: &router, 200, "ok");
        crate::api!(logger: &router, 301, "moved to {}", "/new");
        crate::api!(logger: &router, 404, "missing");
        crate::api!(logger: &router, 500, "failed");

        assert_eq!(
            out.lines(),
            [
                format!("[INFO] [test::test_api_macro:{line}] [200] ok"),
                format!("[INFO] [test::test_api_macro:{}] [301] moved to /new", line + 1),
            ]
        );
        assert_eq!(
            err.lines(),
            [
                format!("[WARN] [test::test_api_macro:{}] [404] missing", line + 2),
                format!("[ERROR] [test::test_api_macro:{}] [500] failed", line + 3),
            ]
        );
    }

    #[test]
    fn test_api_macro_with_integer_types() {
        let (router, out, err) = plain_router();
        let status: i32 = 204;
        crate::api!(logger: &router, status, "no content");
        let status: usize = 429;
        crate::api!(logger: &router, status, "slow down");
        let status: u64 = 503;
        crate::api!(logger: &router, status, "unavailable");

        let out = out.lines();
        assert!(out[0].ends_with("] [204] no content"), "{}", out[0]);
        let err = err.lines();
        assert!(err[0].starts_with("[WARN] "), "{}", err[0]);
        assert!(err[0].ends_with("] [429] slow down"), "{}", err[0]);
        assert!(err[1].starts_with("[ERROR] "), "{}", err[1]);
        assert!(err[1].ends_with("] [503] unavailable"), "{}", err[1]);
    }

    #[test]
    fn test_caller_in_closure_and_nested_fn() {
        let (router, out, _err) = plain_router();
        let log = |n: i32| crate::infof!(logger: &router, "from closure {n}");
        log(1);

        fn helper(router: &Router) {
            crate::infof!(logger: router, "from helper");
        }
        helper(&router);

        let out = out.lines();
        assert!(
            out[0].contains("[test::test_caller_in_closure_and_nested_fn:"),
            "{}",
            out[0]
        );
        assert!(out[1].contains("[test_caller_in_closure_and_nested_fn::helper:"), "{}", out[1]);
    }

    #[test]
    fn test_arc_router() {
        let (router, out, _err) = plain_router();
        let router = Arc::new(router);
        crate::infof!(logger: &router, "through arc");
        assert!(out.contents().contains("through arc"));
    }
}

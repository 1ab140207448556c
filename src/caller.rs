use std::{borrow::Cow, fmt};

const UNKNOWN: &str = "unknown";

/// The call site of a logging macro.
///
/// Is created by the logging macros at compile time: the path of the enclosing function
/// and the line number of the macro invocation. The (cheap) shortening to the label that
/// appears in log lines is deferred until the record is known to be written.
#[derive(Copy, Clone, Debug)]
pub struct Caller {
    function: &'static str,
    line: u32,
}

impl Caller {
    /// Creates a `Caller` from a fully qualified function path and a line number.
    ///
    /// Normally you use [`caller!`](crate::caller) instead.
    #[must_use]
    pub const fn new(function: &'static str, line: u32) -> Self {
        Self { function, line }
    }

    /// A caller that could not be identified; is labeled as `unknown`.
    #[must_use]
    pub const fn unknown() -> Self {
        Self {
            function: "",
            line: 0,
        }
    }

    /// The line number of the call site.
    #[must_use]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Produces the short label `scope::function:line`.
    ///
    /// Only the last two path segments are kept, closure segments are skipped.
    /// Generic arguments are removed, and a qualified self type like
    /// `<app::Plain as app::Handler>` is reduced to `app::Plain`.
    /// Returns `unknown` if no function path is available.
    #[must_use]
    pub fn label(&self) -> String {
        let path = if self.function.contains('<') {
            Cow::Owned(without_generics(self.function))
        } else {
            Cow::Borrowed(self.function)
        };
        let mut segments = path
            .rsplit("::")
            .filter(|s| !s.is_empty() && *s != "{{closure}}");
        match (segments.next(), segments.next()) {
            (None, _) => UNKNOWN.to_string(),
            (Some(function), None) => format!("{function}:{}", self.line),
            (Some(function), Some(scope)) => format!("{scope}::{function}:{}", self.line),
        }
    }

    #[doc(hidden)]
    #[must_use]
    pub fn strip_marker(path: &'static str) -> &'static str {
        path.strip_suffix("::__linelog_caller").unwrap_or(path)
    }
}

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

// Drops generic argument lists and keeps only the self type of `<Type as Trait>`.
fn without_generics(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    // one entry per open `<`: whether its content is kept
    let mut kept: Vec<bool> = Vec::new();
    let mut prev = ' ';
    let mut rest = path;
    while let Some(c) = rest.chars().next() {
        let keeping = kept.last().copied().unwrap_or(true);
        if keeping && !kept.is_empty() && rest.starts_with(" as ") {
            if let Some(top) = kept.last_mut() {
                *top = false;
            }
            rest = &rest[" as ".len()..];
            continue;
        }
        match c {
            '<' => kept.push(keeping && (out.is_empty() || out.ends_with("::"))),
            // `->` of a fn pointer type
            '>' if prev == '-' => {}
            '>' => {
                kept.pop();
            }
            _ if keeping => out.push(c),
            _ => {}
        }
        prev = c;
        rest = &rest[c.len_utf8()..];
    }
    out
}

#[doc(hidden)]
#[must_use]
pub fn type_name_of<T>(_: T) -> &'static str {
    std::any::type_name::<T>()
}

/// Captures the enclosing function and the current line as [`Caller`].
///
/// Used by all logging macros; can also be used directly together with the
/// methods of [`Router`](crate::Router).
#[macro_export]
macro_rules! caller {
    () => {{
        fn __linelog_caller() {}
        $crate::Caller::new(
            $crate::Caller::strip_marker($crate::__private_api::type_name_of(__linelog_caller)),
            line!(),
        )
    }};
}

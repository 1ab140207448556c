//! Encoding of structured key-value fields.
//!
//! The structured logging macros (`info_kv!` etc.) take a message and then an
//! ordered list of items that is read in pairs: key, value, key, value, ...
//!
//! ```rust
//! linelog::info_kv!("request completed", "status", 200, "path", "/api/users");
//! // ... [app::handler:12] request completed status=200 path=/api/users
//! ```
//!
//! Items can be of different types. Only textual items (`str`, `String`, ...) qualify as keys;
//! a pair whose key is not textual is dropped silently, as is a trailing key without value.
//! Any other `Display` type can be passed as value by wrapping it with [`display`].

use std::{borrow::Cow, fmt};

/// One item of a key-value list.
#[derive(Copy, Clone)]
pub enum Value<'a> {
    /// Textual item; can serve as key.
    Text(&'a str),
    /// Any other item, rendered with its `Display` implementation.
    Display(&'a dyn fmt::Display),
}

impl Value<'_> {
    fn as_key(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            Value::Display(_) => None,
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Display(d) => d.fmt(f),
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "Text({s:?})"),
            Value::Display(d) => write!(f, "Display({d})"),
        }
    }
}

/// Wraps an arbitrary `Display` type as (non-key) item.
#[must_use]
pub fn display(value: &dyn fmt::Display) -> Value<'_> {
    Value::Display(value)
}

/// Conversion into a [`Value`]; used by the structured logging macros.
pub trait ToValue {
    /// Borrow `self` as item.
    fn to_value(&self) -> Value<'_>;
}

impl ToValue for Value<'_> {
    fn to_value(&self) -> Value<'_> {
        *self
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value<'_> {
        Value::Text(self)
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value<'_> {
        Value::Text(self)
    }
}

impl ToValue for Cow<'_, str> {
    fn to_value(&self) -> Value<'_> {
        Value::Text(self)
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value<'_> {
        (**self).to_value()
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value<'_> {
        match self {
            Some(v) => v.to_value(),
            None => Value::Text("<none>"),
        }
    }
}

macro_rules! impl_to_value_by_display {
    ($($t:ty),* $(,)?) => {
        $(
            impl ToValue for $t {
                fn to_value(&self) -> Value<'_> {
                    Value::Display(self)
                }
            }
        )*
    };
}

impl_to_value_by_display!(
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    std::net::IpAddr,
    std::net::SocketAddr,
    std::io::Error,
    fmt::Arguments<'_>,
);

/// Renders the items as ` key=value key=value`.
///
/// Items are read pairwise. Pairs with a non-textual key and an unpaired trailing item are
/// dropped. The result is empty if no pair survives, and otherwise starts with a single space.
#[must_use]
pub fn encode_fields(items: &[Value<'_>]) -> String {
    let mut out = String::new();
    for pair in items.chunks_exact(2) {
        if let Some(key) = pair[0].as_key() {
            // writing into a String cannot fail
            let _ = fmt::write(&mut out, format_args!(" {key}={}", pair[1]));
        }
    }
    out
}

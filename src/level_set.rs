use crate::Severity;
use std::fmt;

/// Name of the environment variable that restricts the set of active severities.
///
/// The value is a comma-separated, case-insensitive list of severity names,
/// e.g. `LOGGER_LEVELS="info,error"`.
pub const LEVELS_ENV_VAR: &str = "LOGGER_LEVELS";

/// The set of severities that currently produce output.
///
/// A `LevelSet` is membership-based: enabling `ERROR` does not implicitly enable `FATAL`.
///
/// The textual form works with the following rules:
///
/// ```text
/// <level_list> ::= [<token>{,<token>}]
/// <token>      ::= DEBUG | INFO | WARN | WARNING | ERROR | FATAL   (case-insensitive)
/// ```
///
/// * An empty (or whitespace-only) list enables all severities.
/// * A non-empty list enables exactly the listed severities; everything else is off.
/// * Tokens that are no severity names are ignored, they never cause an error.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct LevelSet {
    enabled: [bool; 5],
}

impl LevelSet {
    /// All severities enabled.
    #[must_use]
    pub const fn all() -> Self {
        Self { enabled: [true; 5] }
    }

    /// No severity enabled.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            enabled: [false; 5],
        }
    }

    /// Parses a comma-separated list of severity names.
    ///
    /// See the type documentation for the syntax. This function never fails.
    #[must_use]
    pub fn parse(list: &str) -> Self {
        let list = list.trim();
        if list.is_empty() {
            return Self::all();
        }
        list.split(',')
            .filter_map(Severity::from_token)
            .fold(Self::none(), LevelSet::with)
    }

    /// Reads the level list from the environment variable [`LEVELS_ENV_VAR`].
    ///
    /// Returns `None` if the variable is not set or is empty,
    /// so that the caller can keep its default.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        match std::env::var(LEVELS_ENV_VAR) {
            Ok(s) if !s.is_empty() => Some(Self::parse(&s)),
            _ => None,
        }
    }

    /// Returns a copy with the given severity enabled.
    #[must_use]
    pub fn with(mut self, severity: Severity) -> Self {
        self.enabled[severity.index()] = true;
        self
    }

    /// Returns a copy with the given severity disabled.
    #[must_use]
    pub fn without(mut self, severity: Severity) -> Self {
        self.enabled[severity.index()] = false;
        self
    }

    /// Is the given severity enabled?
    #[inline]
    #[must_use]
    pub fn is_enabled(&self, severity: Severity) -> bool {
        self.enabled[severity.index()]
    }
}

impl Default for LevelSet {
    fn default() -> Self {
        Self::all()
    }
}

impl fmt::Debug for LevelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(Severity::ALL.iter().filter(|s| self.is_enabled(**s)))
            .finish()
    }
}

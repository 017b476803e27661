//! Rule severity levels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use serde_json::Value;
use thiserror::Error;

/// Level controlling how violations of a rule are reported.
///
/// Severities parse from the keywords `"off"`, `"warn"` and `"error"`
/// (ASCII case-insensitive) and from the numeric levels `0`, `1` and `2`.
/// They always serialise as the lower-case keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The rule is disabled.
    Off,
    /// Violations are reported as warnings.
    Warn,
    /// Violations are reported as errors.
    Error,
}

/// Error returned when a keyword does not name a known variant.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("expected one of {expected}, found '{found}'")]
pub struct ParseKeywordError {
    expected: &'static str,
    found: String,
}

impl ParseKeywordError {
    pub(crate) fn new(expected: &'static str, found: &str) -> Self {
        Self {
            expected,
            found: found.to_owned(),
        }
    }
}

impl Severity {
    /// Returns the canonical keyword for this severity.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Returns the numeric level (`0`, `1` or `2`).
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Self::Off => 0,
            Self::Warn => 1,
            Self::Error => 2,
        }
    }

    /// Interpret a JSON value as a severity marker.
    ///
    /// Returns `None` for anything that is neither a recognised keyword nor
    /// one of the numeric levels.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_compose::Severity;
    /// use serde_json::json;
    ///
    /// assert_eq!(Severity::from_value(&json!("warn")), Some(Severity::Warn));
    /// assert_eq!(Severity::from_value(&json!(2)), Some(Severity::Error));
    /// assert_eq!(Severity::from_value(&json!(7)), None);
    /// ```
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(keyword) => keyword.parse().ok(),
            Value::Number(level) => match level.as_u64()? {
                0 => Some(Self::Off),
                1 => Some(Self::Warn),
                2 => Some(Self::Error),
                _ => None,
            },
            _ => None,
        }
    }
}

impl FromStr for Severity {
    type Err = ParseKeywordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "off" => Ok(Self::Off),
            "warn" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(ParseKeywordError::new("off, warn, error", s)),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Self::from_value(&raw)
            .ok_or_else(|| D::Error::custom(format!("invalid severity {raw}")))
    }
}

impl From<Severity> for Value {
    fn from(severity: Severity) -> Self {
        Self::String(severity.as_str().to_owned())
    }
}

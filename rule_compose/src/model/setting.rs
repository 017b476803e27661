//! Typed view over an opaque rule setting value.

use serde_json::Value;

use super::Severity;

/// A rule's severity, optionally paired with its options.
///
/// The merge engine never requires settings to be well formed; this type is a
/// read-only interpretation of the stored value.
///
/// # Examples
///
/// ```
/// use rule_compose::{RuleSetting, Severity};
/// use serde_json::json;
///
/// let setting = RuleSetting::parse(&json!(["error", {"ignoreClass": "fieldsOnly"}]))
///     .expect("array settings parse");
/// assert_eq!(setting.severity(), Severity::Error);
/// assert_eq!(setting.options(), &[json!({"ignoreClass": "fieldsOnly"})]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum RuleSetting {
    /// A bare severity marker such as `"warn"` or `2`.
    Severity(Severity),
    /// A `[severity, ...options]` array.
    Configured {
        /// Leading severity marker.
        severity: Severity,
        /// Positional options following the severity.
        options: Vec<Value>,
    },
}

impl RuleSetting {
    /// Interpret `value` as a rule setting.
    ///
    /// Returns `None` when the value is neither a severity marker nor an
    /// array whose first element is one.
    #[must_use]
    pub fn parse(value: &Value) -> Option<Self> {
        match value {
            Value::Array(items) => {
                let (first, options) = items.split_first()?;
                Some(Self::Configured {
                    severity: Severity::from_value(first)?,
                    options: options.to_vec(),
                })
            }
            other => Severity::from_value(other).map(Self::Severity),
        }
    }

    /// Returns the severity of the setting.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::Severity(severity) | Self::Configured { severity, .. } => *severity,
        }
    }

    /// Returns the options following the severity, if any.
    #[must_use]
    pub fn options(&self) -> &[Value] {
        match self {
            Self::Severity(_) => &[],
            Self::Configured { options, .. } => options,
        }
    }

    /// Returns `true` when the rule is switched off.
    #[must_use]
    pub fn is_off(&self) -> bool {
        self.severity() == Severity::Off
    }
}

impl From<Severity> for RuleSetting {
    fn from(severity: Severity) -> Self {
        Self::Severity(severity)
    }
}

impl From<RuleSetting> for Value {
    fn from(setting: RuleSetting) -> Self {
        match setting {
            RuleSetting::Severity(severity) => severity.into(),
            RuleSetting::Configured { severity, options } => {
                Self::Array(std::iter::once(severity.into()).chain(options).collect())
            }
        }
    }
}

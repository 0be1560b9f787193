use std::fmt::{Display, Formatter, Result as FmtResult};

use chrono::{DateTime, FixedOffset, TimeZone};

/// A replacement value substituted into `{{name}}` placeholders.
///
/// Every variant renders through [`Display`], which is the only conversion
/// placeholder substitution uses.
///
/// # Example
///
/// ```
/// use tolk::Value;
///
/// let count: Value = 42.into();
/// let price: Value = 3.5.into();
/// let name: Value = "Alice".into();
///
/// assert_eq!(count.to_string(), "42");
/// assert_eq!(price.to_string(), "3.5");
/// assert_eq!(name.to_string(), "Alice");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A string value, inserted verbatim.
    String(String),

    /// An integer number.
    Number(i64),

    /// A floating-point number, rendered in its shortest form (`3.0` as `3`).
    Float(f64),

    /// A point in time, rendered with chrono's standard format
    /// (`2020-02-02 00:00:00 +00:00`).
    Date(DateTime<FixedOffset>),
}

impl Value {
    /// Get this value as a string, if it is one.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get this value as a number, if it is one.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this value as a float. Integers widen.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Number(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Get this value as a date, if it is one.
    pub fn as_date(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            Value::Date(d) => Some(d),
            _ => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Value::String(s) => write!(f, "{s}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Date(d) => write!(f, "{d}"),
        }
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(i64::from(n))
    }
}

/// Counts beyond `i64::MAX` become floats.
impl From<usize> for Value {
    fn from(n: usize) -> Self {
        i64::try_from(n).map_or(Value::Float(n as f64), Value::Number)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(f64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(date: DateTime<Tz>) -> Self {
        Value::Date(date.fixed_offset())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_usize_is_a_number() {
        assert_eq!(Value::from(7_usize), Value::Number(7));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn huge_usize_does_not_wrap() {
        let value = Value::from(usize::MAX);
        assert_eq!(value.as_number(), None);
        assert!(value.as_float().is_some_and(|f| f > 0.0));
    }
}

use std::fmt;

/// Represents a runtime value in the interpreter.
///
/// Variables only ever hold integers. Booleans appear solely as the result of
/// an inequality test and are consumed by `while`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean produced by an inequality test.
    Boolean(bool),
}

impl Value {
    /// Returns `true` unless both values have the same kind and payload.
    ///
    /// Values of different kinds are always unequal.
    #[must_use]
    pub fn differs_from(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a != b,
            (Self::Boolean(a), Self::Boolean(b)) => a != b,
            _ => true,
        }
    }

    /// Short name of the value's kind, for diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Boolean(_) => "boolean",
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_kind_equal_payload_does_not_differ() {
        assert!(!Value::Integer(1000).differs_from(&Value::Integer(1000)));
        assert!(!Value::Boolean(false).differs_from(&Value::Boolean(false)));
    }

    #[test]
    fn same_kind_different_payload_differs() {
        assert!(Value::Integer(-1).differs_from(&Value::Integer(1)));
        assert!(Value::Boolean(true).differs_from(&Value::Boolean(false)));
    }

    #[test]
    fn mixed_kinds_always_differ() {
        assert!(Value::Integer(1).differs_from(&Value::Boolean(true)));
        assert!(Value::Boolean(false).differs_from(&Value::Integer(0)));
    }
}

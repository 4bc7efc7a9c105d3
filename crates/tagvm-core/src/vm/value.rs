//! Runtime Value Representation
//!
//! Every value carries exactly one [`Kind`], fixed at construction and read
//! by direct match. There is no implicit coercion between kinds.

use std::fmt;

/// Runtime kind tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Nil,
    True,
    False,
    Integer,
    /// Kind of a kind-descriptor value (what `a_kind` pushes)
    Kind,
    /// Kinds introduced by instructions outside the core set
    Other(u16),
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Nil => f.write_str("nil"),
            Kind::True => f.write_str("true"),
            Kind::False => f.write_str("false"),
            Kind::Integer => f.write_str("integer"),
            Kind::Kind => f.write_str("kind"),
            Kind::Other(tag) => write!(f, "other({})", tag),
        }
    }
}

/// Runtime value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Absence of a value; all nils are interchangeable
    Nil,

    Bool(bool),

    Integer(i64),

    /// Descriptor naming the kind of another value
    Kind(Kind),

    /// Opaque value of an extended kind
    Other(u16),
}

impl Value {
    pub fn nil() -> Self {
        Value::Nil
    }

    pub fn other(tag: u16) -> Self {
        Value::Other(tag)
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Nil => Kind::Nil,
            Value::Bool(true) => Kind::True,
            Value::Bool(false) => Kind::False,
            Value::Integer(_) => Kind::Integer,
            Value::Kind(_) => Kind::Kind,
            Value::Other(tag) => Kind::Other(*tag),
        }
    }

    /// Kind equality, ignoring payload
    pub fn same_kind(&self, other: &Value) -> bool {
        self.kind() == other.kind()
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("nil"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Kind(kind) => write!(f, "<kind {}>", kind),
            Value::Other(tag) => write!(f, "<other {}>", tag),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_variant() {
        assert_eq!(Value::nil().kind(), Kind::Nil);
        assert_eq!(Value::Bool(true).kind(), Kind::True);
        assert_eq!(Value::Bool(false).kind(), Kind::False);
        assert_eq!(Value::Integer(9).kind(), Kind::Integer);
        assert_eq!(Value::Kind(Kind::Nil).kind(), Kind::Kind);
        assert_eq!(Value::other(12).kind(), Kind::Other(12));
    }

    #[test]
    fn no_coercion_between_kinds() {
        assert_ne!(Value::Nil, Value::Bool(false));
        assert_ne!(Value::Bool(false), Value::Integer(0));
        assert!(!Value::Nil.same_kind(&Value::Bool(false)));
        assert!(Value::Nil.same_kind(&Value::nil()));
        assert!(Value::Integer(1).same_kind(&Value::Integer(2)));
        assert!(!Value::other(1).same_kind(&Value::other(2)));
    }

    #[test]
    fn display_names() {
        assert_eq!(Kind::Other(3).to_string(), "other(3)");
        assert_eq!(Value::Kind(Kind::Integer).to_string(), "<kind integer>");
        assert_eq!(Value::Nil.to_string(), "nil");
    }
}

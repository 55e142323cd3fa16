use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::defs::ArgKind;
use crate::error::ParseError;

/// Unsigned decimal with no leading zeros, optionally a fractional part.
static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0|[1-9][0-9]*)(\.[0-9]+)?$").expect("static regex must compile")
});

const TRUTHY: [&str; 4] = ["yes", "true", "1", "y"];
const FALSY: [&str; 4] = ["no", "false", "0", "n"];

/// A typed value produced by coercion or declared as a default.
///
/// Serializes untagged, so a parsed result prints as plain JSON shapes
/// (`null`, `true`, `8080`, `"Alice"`, `["a","b"]`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Numeric view, widening `Int` to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(n) => Some(*n as f64),
            Self::Float(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => f.write_str(s),
            Self::List(items) => {
                f.write_str("[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(n.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

/// Declared type constraint for an argument's value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Accepts {
    #[default]
    Str,
    Number,
    Bool,
    /// Enumeration: the value must equal one of the members, case-sensitively.
    OneOf(Vec<String>),
}

impl Accepts {
    pub fn one_of<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::OneOf(members.into_iter().map(Into::into).collect())
    }
}

/// Coerce one raw token against a declared constraint.
///
/// `name` is the display name for error messages: the alias the user typed
/// for options, the canonical name for positionals.
pub(crate) fn coerce(
    raw: &str,
    accepts: &Accepts,
    kind: ArgKind,
    name: &str,
) -> Result<Value, ParseError> {
    match accepts {
        Accepts::Str => Ok(Value::Str(raw.to_string())),
        Accepts::Number => coerce_number(raw, kind, name),
        Accepts::Bool => {
            let folded = raw.to_ascii_lowercase();
            if TRUTHY.contains(&folded.as_str()) {
                Ok(Value::Bool(true))
            } else if FALSY.contains(&folded.as_str()) {
                Ok(Value::Bool(false))
            } else {
                Err(ParseError::InvalidBoolean {
                    kind,
                    name: name.to_string(),
                })
            }
        }
        Accepts::OneOf(allowed) => {
            if allowed.iter().any(|member| member == raw) {
                Ok(Value::Str(raw.to_string()))
            } else {
                Err(ParseError::InvalidEnumValue {
                    kind,
                    name: name.to_string(),
                    allowed: allowed.clone(),
                })
            }
        }
    }
}

fn coerce_number(raw: &str, kind: ArgKind, name: &str) -> Result<Value, ParseError> {
    if !NUMBER.is_match(raw) {
        return Err(ParseError::InvalidNumber {
            kind,
            name: name.to_string(),
        });
    }
    if raw.contains('.') {
        return match raw.parse::<f64>() {
            Ok(x) => Ok(Value::Float(x)),
            Err(_) => Err(ParseError::InvalidNumber {
                kind,
                name: name.to_string(),
            }),
        };
    }
    // Integers wider than i64 still satisfy the grammar; they become floats.
    match raw.parse::<i64>() {
        Ok(n) => Ok(Value::Int(n)),
        Err(_) => match raw.parse::<f64>() {
            Ok(x) => Ok(Value::Float(x)),
            Err(_) => Err(ParseError::InvalidNumber {
                kind,
                name: name.to_string(),
            }),
        },
    }
}

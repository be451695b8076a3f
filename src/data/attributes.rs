// src/data/attributes.rs

//! Typed, schema-validated access to the attribute bag (`attr`) of a
//! [`LogRecord`].
//!
//! Keys are addressed by a dotted path from the top of the attribute bag,
//! e.g. `"buildInfo.environment.distmod"`. Any failure is a [`FieldError`]
//! that names the message identity and the full key path.
//!
//! [`LogRecord`]: crate::data::logrecord::LogRecord

use crate::data::logrecord::{Map, Value};

use std::fmt;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Key path used in a [`FieldError`] about the attribute bag itself.
pub const ATTR_KEY: &str = "attr";

/// Short name of the JSON type of `value`, for error messages.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// What went wrong with an attribute.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldProblem {
    /// The key is required but not present.
    Missing,
    /// The key is present but holds the wrong JSON type.
    Mismatch {
        expected: &'static str,
        found: &'static str,
    },
    /// The key holds a number or string that is not an integer.
    NotAnInteger {
        value: String,
    },
}

impl fmt::Display for FieldProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldProblem::Missing => write!(f, "is missing"),
            FieldProblem::Mismatch { expected, found } => {
                write!(f, "expected {} but found {}", expected, found)
            }
            FieldProblem::NotAnInteger { value } => {
                write!(f, "expected an integer but found {}", value)
            }
        }
    }
}

/// An interesting record's attribute bag does not have the expected shape.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("message {message:?}: attribute {key:?} {problem}")]
pub struct FieldError {
    /// The message identity (`msg` text) being extracted.
    pub message: &'static str,
    /// Dotted key path of the offending attribute.
    pub key: String,
    pub problem: FieldProblem,
}

/// Coerce a JSON number or numeric string to an `i64`.
///
/// Returns `None` for any other JSON type; returns `Some(Err)` for a
/// number or string that is not integral.
fn coerce_integer(value: &Value) -> Option<Result<i64, FieldProblem>> {
    match value {
        Value::Number(number) => {
            if let Some(i) = number.as_i64() {
                return Some(Ok(i));
            }
            match number.as_f64() {
                Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 => {
                    Some(Ok(f as i64))
                }
                _ => Some(Err(FieldProblem::NotAnInteger { value: number.to_string() })),
            }
        }
        Value::String(s) => match s.trim().parse::<i64>() {
            Ok(i) => Some(Ok(i)),
            Err(_) => Some(Err(FieldProblem::NotAnInteger { value: format!("{:?}", s) })),
        },
        _ => None,
    }
}

/// The attribute bag of one interesting record, bound to the message
/// identity it is being read for.
#[derive(Debug)]
pub struct Attributes<'a> {
    message: &'static str,
    object: &'a Map<String, Value>,
}

impl<'a> Attributes<'a> {
    /// Wrap the attribute bag of a record for `message`.
    ///
    /// The attribute bag must be a JSON object.
    pub fn new(
        message: &'static str,
        attr: &'a Value,
    ) -> Result<Attributes<'a>, FieldError> {
        match attr.as_object() {
            Some(object) => Ok(Attributes { message, object }),
            None => Err(FieldError {
                message,
                key: String::from(ATTR_KEY),
                problem: FieldProblem::Mismatch {
                    expected: "object",
                    found: value_kind(attr),
                },
            }),
        }
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    fn error(&self, key: &str, problem: FieldProblem) -> FieldError {
        FieldError {
            message: self.message,
            key: String::from(key),
            problem,
        }
    }

    /// Walk the dotted `path`. A missing key anywhere along the path is
    /// `Ok(None)`; a non-object part-way along the path is an error naming
    /// that partial path.
    fn lookup(&self, path: &str) -> Result<Option<&'a Value>, FieldError> {
        let mut object: &'a Map<String, Value> = self.object;
        let mut walked: usize = 0;
        let mut parts = path.split('.').peekable();
        while let Some(part) = parts.next() {
            walked += part.len();
            let value: &'a Value = match object.get(part) {
                Some(val) => val,
                None => return Ok(None),
            };
            if parts.peek().is_none() {
                return Ok(Some(value));
            }
            object = match value.as_object() {
                Some(val) => val,
                None => {
                    return Err(self.error(
                        &path[..walked],
                        FieldProblem::Mismatch {
                            expected: "object",
                            found: value_kind(value),
                        },
                    ));
                }
            };
            // the '.'
            walked += 1;
        }

        Ok(None)
    }

    fn require(&self, path: &str) -> Result<&'a Value, FieldError> {
        match self.lookup(path)? {
            Some(value) => Ok(value),
            None => Err(self.error(path, FieldProblem::Missing)),
        }
    }

    /// Optional string attribute. Absent or `null` is `None`.
    pub fn string_opt(&self, path: &str) -> Result<Option<String>, FieldError> {
        match self.lookup(path)? {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(value) => Err(self.error(
                path,
                FieldProblem::Mismatch {
                    expected: "string",
                    found: value_kind(value),
                },
            )),
        }
    }

    /// Required string attribute.
    pub fn string(&self, path: &str) -> Result<String, FieldError> {
        match self.require(path)? {
            Value::String(s) => Ok(s.clone()),
            value => Err(self.error(
                path,
                FieldProblem::Mismatch {
                    expected: "string",
                    found: value_kind(value),
                },
            )),
        }
    }

    /// Required integer attribute; a JSON number or a numeric string.
    pub fn integer(&self, path: &str) -> Result<i64, FieldError> {
        let value = self.require(path)?;
        match coerce_integer(value) {
            Some(Ok(i)) => Ok(i),
            Some(Err(problem)) => Err(self.error(path, problem)),
            None => Err(self.error(
                path,
                FieldProblem::Mismatch {
                    expected: "number or numeric string",
                    found: value_kind(value),
                },
            )),
        }
    }

    /// Required object attribute, cloned.
    pub fn object(&self, path: &str) -> Result<Map<String, Value>, FieldError> {
        match self.require(path)? {
            Value::Object(object) => Ok(object.clone()),
            value => Err(self.error(
                path,
                FieldProblem::Mismatch {
                    expected: "object",
                    found: value_kind(value),
                },
            )),
        }
    }
}

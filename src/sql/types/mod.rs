use std::{cmp::Ordering, fmt::Display};

use serde::{Deserialize, Serialize};

/// Supported SQL column types
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DataType {
    Int,
    Float,
    Varchar,
}

impl DataType {
    /// Attempts to parse a type name from a CREATE TABLE column definition
    /// (case-insensitive)
    pub fn from_str(name: &str) -> Option<DataType> {
        Some(match name.to_uppercase().as_ref() {
            "INT" => DataType::Int,
            "FLOAT" => DataType::Float,
            "VARCHAR" => DataType::Varchar,
            _ => return None,
        })
    }

    /// Returns the lowercase SQL spelling, as emitted by DUMP
    pub fn to_str(&self) -> &str {
        match self {
            DataType::Int => "int",
            DataType::Float => "float",
            DataType::Varchar => "varchar",
        }
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

/// Runtime value stored in a row cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Null,
    Integer(i64),
    Float(f64),
    String(String),
}

impl Value {
    /// Returns the data type of the value, or None if it's Null
    pub fn datatype(&self) -> Option<DataType> {
        match self {
            Self::Null => None,
            Self::Integer(_) => Some(DataType::Int),
            Self::Float(_) => Some(DataType::Float),
            Self::String(_) => Some(DataType::Varchar),
        }
    }

    /// Re-serializes the value as a SQL literal for DUMP output.
    ///
    /// Strings are single-quoted with embedded quotes doubled, the form the
    /// lexer reads back. Floats always carry a fractional part so they re-lex
    /// as floats rather than integers.
    pub fn to_sql(&self) -> String {
        match self {
            Value::Null => "NULL".to_string(),
            Value::Integer(v) => v.to_string(),
            Value::Float(v) => {
                if v.fract() == 0.0 && v.is_finite() {
                    format!("{:.1}", v)
                } else {
                    v.to_string()
                }
            }
            Value::String(v) => format!("'{}'", v.replace('\'', "''")),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Integer(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::String(v) => write!(f, "{}", v),
        }
    }
}

/// Native same-type ordering used by the WHERE matcher.
///
/// Integers and floats compare numerically with each other; strings compare
/// lexically. Every other pairing, including anything involving Null, is
/// incomparable and returns None, which the matcher treats as a non-match.
impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a.partial_cmp(b),
            (Value::Integer(a), Value::Float(b)) => (*a as f64).partial_cmp(b),
            (Value::Float(a), Value::Integer(b)) => a.partial_cmp(&(*b as f64)),
            (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
            (Value::String(a), Value::String(b)) => a.partial_cmp(b),
            (_, _) => None,
        }
    }
}

/// A row is a vector of values, positionally aligned with the table's columns
pub type Row = Vec<Value>;

//! Positional tuple values and the typed decode boundary.
//!
//! Contract reads settle as positionally-typed tuples. `Tuple` consumes
//! one field at a time with typed accessors; any arity or type violation
//! is a decode error naming the contract function and the field index,
//! so misaligned results are rejected here instead of silently producing
//! shifted records downstream.

use crate::domain::Address;
use crate::errors::{AppError, AppResult};

/// A single element of a contract-read result tuple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Uint(u64),
    Str(String),
    Address(Address),
    UintArray(Vec<u64>),
    StrArray(Vec<String>),
    AddressArray(Vec<Address>),
}

impl Value {
    /// Type name used in decode error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Uint(_) => "uint",
            Value::Str(_) => "string",
            Value::Address(_) => "address",
            Value::UintArray(_) => "uint[]",
            Value::StrArray(_) => "string[]",
            Value::AddressArray(_) => "address[]",
        }
    }
}

/// Cursor over a positional result tuple.
pub struct Tuple {
    function: String,
    values: std::vec::IntoIter<Value>,
    index: usize,
}

impl Tuple {
    pub fn new(function: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            function: function.into(),
            values: values.into_iter(),
            index: 0,
        }
    }

    fn next_value(&mut self, expected: &'static str) -> AppResult<Value> {
        let index = self.index;
        self.index += 1;
        self.values.next().ok_or_else(|| {
            AppError::decode(
                self.function.clone(),
                format!("field {}: expected {}, tuple exhausted", index, expected),
            )
        })
    }

    fn mismatch(&self, expected: &'static str, got: &Value) -> AppError {
        AppError::decode(
            self.function.clone(),
            format!(
                "field {}: expected {}, got {}",
                self.index - 1,
                expected,
                got.kind()
            ),
        )
    }

    pub fn uint(&mut self) -> AppResult<u64> {
        match self.next_value("uint")? {
            Value::Uint(v) => Ok(v),
            other => Err(self.mismatch("uint", &other)),
        }
    }

    pub fn string(&mut self) -> AppResult<String> {
        match self.next_value("string")? {
            Value::Str(v) => Ok(v),
            other => Err(self.mismatch("string", &other)),
        }
    }

    pub fn address(&mut self) -> AppResult<Address> {
        match self.next_value("address")? {
            Value::Address(v) => Ok(v),
            other => Err(self.mismatch("address", &other)),
        }
    }

    pub fn uints(&mut self) -> AppResult<Vec<u64>> {
        match self.next_value("uint[]")? {
            Value::UintArray(v) => Ok(v),
            other => Err(self.mismatch("uint[]", &other)),
        }
    }

    pub fn strings(&mut self) -> AppResult<Vec<String>> {
        match self.next_value("string[]")? {
            Value::StrArray(v) => Ok(v),
            other => Err(self.mismatch("string[]", &other)),
        }
    }

    pub fn addresses(&mut self) -> AppResult<Vec<Address>> {
        match self.next_value("address[]")? {
            Value::AddressArray(v) => Ok(v),
            other => Err(self.mismatch("address[]", &other)),
        }
    }

    /// Reject trailing fields the decoder did not consume.
    pub fn finish(mut self) -> AppResult<()> {
        if self.values.next().is_some() {
            return Err(AppError::decode(
                self.function,
                format!("unexpected trailing field at index {}", self.index),
            ));
        }
        Ok(())
    }
}

/// Validate that zipped parallel arrays share one length, returning it.
///
/// The contracts guarantee equal lengths; a mismatch means a corrupt or
/// misdecoded result and is rejected rather than zipped short.
pub fn check_parallel(function: &str, arrays: &[(&str, usize)]) -> AppResult<usize> {
    let mut iter = arrays.iter();
    let &(_, expected) = match iter.next() {
        Some(first) => first,
        None => return Ok(0),
    };
    for &(name, len) in iter {
        if len != expected {
            return Err(AppError::decode(
                function,
                format!("parallel array {} has length {}, expected {}", name, len, expected),
            ));
        }
    }
    Ok(expected)
}

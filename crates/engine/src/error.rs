//! The module contains the errors the engine can throw.
//!
//! [`DivisionByZero`] and [`InvalidOperation`] are validation failures: they
//! abort the write before anything is persisted. [`KeyNotFound`] covers both
//! a missing record and a record owned by someone else, on purpose.
//!
//! [`DivisionByZero`]: EngineError::DivisionByZero
//! [`InvalidOperation`]: EngineError::InvalidOperation
//! [`KeyNotFound`]: EngineError::KeyNotFound
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Cannot divide by zero")]
    DivisionByZero,
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
    #[error("{0} not found")]
    KeyNotFound(String),
    #[error("Invalid id: {0}")]
    InvalidId(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::DivisionByZero, Self::DivisionByZero) => true,
            (Self::InvalidOperation(a), Self::InvalidOperation(b)) => a == b,
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::InvalidId(a), Self::InvalidId(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}

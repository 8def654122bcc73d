use thiserror::Error;

use crate::complex::Complex;

pub type SeriesResult<T> = Result<T, SeriesError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SeriesError {
    #[error("dividing {dividend} by zero")]
    DivisionByZero { dividend: Complex },
    #[error("invalid input: {detail}")]
    InvalidInput { detail: &'static str },
    #[error("non-finite value at index {index} rejected by policy")]
    NonFiniteInput { index: usize },
    #[error("invalid worker count: {requested}")]
    InvalidWorkers { requested: usize },
    #[error("invalid configuration: {detail}")]
    InvalidConfig { detail: &'static str },
}

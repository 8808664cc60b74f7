//! Quality module - advisory data quality validation

mod validator;

pub use validator::{DataValidator, ValidationResult};

pub mod validator;

pub use validator::{RecordValidator, ValidationResult, ValidationStats};

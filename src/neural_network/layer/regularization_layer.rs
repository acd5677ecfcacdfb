/// Dropout transforms
pub mod dropout_layer;
/// Input validation functions for regularization transforms
mod input_validation_function;

pub use dropout_layer::*;

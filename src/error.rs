use crate::style::Category;
use thiserror::Error;

/// Errors that can occur when configuring the category style table.
#[derive(Error, Debug, Clone)]
pub enum StyleError {
    #[error("No background color configured for declared category '{0}'")]
    MissingBackground(Category),
}

/// Errors that can occur when converting a custom user format into a keizu
/// `FlowDescription`.
#[derive(Error, Debug, Clone)]
pub enum FlowConversionError {
    #[error("Invalid workflow data: {0}")]
    ValidationError(String),
}

use thiserror::Error;

use crate::tag::TagIdentity;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Unexpected child tag under <{parent}>: {found}")]
    UnexpectedTag { parent: String, found: TagIdentity },
    #[error("Missing attribute '{attribute}' on {tag}")]
    MissingAttribute { tag: TagIdentity, attribute: String },
    #[error("Invalid number {value:?} in attribute '{attribute}' on {tag}")]
    InvalidNumber { tag: TagIdentity, attribute: String, value: String },
    #[error("Invalid day {value:?} in {tag}")]
    InvalidDay { tag: TagIdentity, value: String },
    #[error("Markup error: {message}")]
    Markup { message: String, line: Option<usize>, col: Option<usize> },
    #[error("Config error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

// Helper conversions
impl From<config::ConfigError> for CatalogError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
impl From<std::io::Error> for CatalogError {
    fn from(e: std::io::Error) -> Self { Self::Io(e.to_string()) }
}

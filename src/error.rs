use thiserror::Error;

use crate::world::ValidationError;

/// Errors that can arise while building a world from a TOML description.
#[derive(Debug, Error)]
pub enum WorldError {
    /// The world file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The world file is not valid TOML or does not match the expected layout.
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid world: {0}")]
    Invalid(String),

    #[error("duplicate room id: {0}")]
    DuplicateRoom(String),

    /// The world parsed but failed structural validation.
    #[error("world failed validation: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<&str>>()
        .join("; ")
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("{0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// True for failures caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        matches!(self, ServiceError::Validation(_) | ServiceError::Model(models::errors::ModelError::Validation(_)))
    }
}

impl From<common::time::TimeParseError> for ServiceError {
    fn from(e: common::time::TimeParseError) -> Self { ServiceError::Validation(e.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_is_fixed() {
        assert_eq!(ServiceError::not_found("Room").to_string(), "Room not found");
    }

    #[test]
    fn model_validation_is_client_error() {
        let e: ServiceError = models::errors::ModelError::Validation("bad".into()).into();
        assert!(e.is_client_error());
        assert!(!ServiceError::Db("down".into()).is_client_error());
    }
}

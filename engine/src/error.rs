use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("Invalid request payload: {0}")]
    RequestError(String),

    #[error("Report error: {0}")]
    ReportError(String),

    // Catch-all for anyhow errors when direct conversion is suitable
    #[error(transparent)]
    AnyhowError(#[from] anyhow::Error),
}

impl From<EngineError> for tonic::Status {
    fn from(err: EngineError) -> Self {
        tracing::error!("Mapping EngineError to tonic::Status: {:?}", err);
        match err {
            EngineError::ConfigError(msg) => {
                tonic::Status::failed_precondition(format!("Configuration error: {}", msg))
            }
            EngineError::IoError { source } => {
                tonic::Status::internal(format!("I/O error: {}", source))
            }
            EngineError::RequestError(msg) => {
                tonic::Status::invalid_argument(format!("Invalid request payload: {}", msg))
            }
            EngineError::ReportError(msg) => {
                tonic::Status::internal(format!("Report error: {}", msg))
            }
            EngineError::AnyhowError(source) => {
                tonic::Status::internal(format!("An internal error occurred: {}", source))
            }
        }
    }
}

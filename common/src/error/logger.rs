use crate::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum LoggerError {
    #[error("Log File Error: {message} {location}")]
    LogFile {
        message: String,
        location: ErrorLocation,
    },

    #[error("Logger Dispatch Error: {message} {location}")]
    Dispatch {
        message: String,
        location: ErrorLocation,
    },
}

//! Error type for the I/O and configuration layers around the calculators

#[derive(Debug)]
pub enum StatsError {
    Io(std::io::Error),
    Json(serde_json::Error),
    /// Required environment variable is unset
    MissingVar(&'static str),
    /// Environment variable holds something that is not a date
    InvalidDate { key: &'static str, raw: String },
}

impl From<std::io::Error> for StatsError {
    fn from(err: std::io::Error) -> Self {
        StatsError::Io(err)
    }
}

impl From<serde_json::Error> for StatsError {
    fn from(err: serde_json::Error) -> Self {
        StatsError::Json(err)
    }
}

impl std::fmt::Display for StatsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsError::Io(e) => write!(f, "IO error: {}", e),
            StatsError::Json(e) => write!(f, "Serialization error: {}", e),
            StatsError::MissingVar(key) => write!(f, "Configuration error: {} must be set", key),
            StatsError::InvalidDate { key, raw } => {
                write!(f, "Configuration error: {} is not a valid date: {:?}", key, raw)
            }
        }
    }
}

impl std::error::Error for StatsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StatsError::Io(e) => Some(e),
            StatsError::Json(e) => Some(e),
            StatsError::MissingVar(_) | StatsError::InvalidDate { .. } => None,
        }
    }
}

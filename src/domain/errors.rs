#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("profile file not found: {0}")]
    ProfileNotFound(String),
    #[error("could not read profile {path}: {source}")]
    ProfileUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse profile {path}: {source}")]
    ProfileMalformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid settings file {path}: {reason}")]
    Settings { path: String, reason: String },
}

impl ConfigError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        ConfigError::InvalidConfiguration(msg.into())
    }

    /// Stable code used in the `--json` error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::InvalidConfiguration(_) | ConfigError::Settings { .. } => {
                "INVALID_CONFIGURATION"
            }
            ConfigError::ProfileNotFound(_)
            | ConfigError::ProfileUnreadable { .. }
            | ConfigError::ProfileMalformed { .. } => "PROFILE_LOAD_FAILURE",
        }
    }
}

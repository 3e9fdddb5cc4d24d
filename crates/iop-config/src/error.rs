use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid iop.toml: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("server_host must be set")]
    MissingServerHost,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

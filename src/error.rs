use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
  /// Raised locally before any command is composed.
  #[error("configuration error: {0}")]
  Configuration(String),

  /// Raised by an executor when the round trip itself fails.
  #[error("transport error: {0}")]
  Transport(String),

  /// Raised by an executor when the server answers with a non-zero error code.
  #[error("server query error {code}: {text}")]
  ServerQuery { code: i32, text: String },

  #[error("invalid config: {0}")]
  Config(#[from] serde_yaml::Error),

  #[error(transparent)]
  Io(#[from] std::io::Error),

  #[error("logging init failed: {0}")]
  Logging(#[from] tracing_subscriber::util::TryInitError),
}

impl Error {
  pub(crate) fn missing_layout() -> Self {
    Self::Configuration("The FileMaker layout name has not been specified.".into())
  }

  pub fn is_configuration(&self) -> bool {
    matches!(self, Self::Configuration(_))
  }
}

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingSection;
use crate::error::Result;

/// Install a global fmt subscriber. `RUST_LOG` overrides the configured level.
pub fn init(logging: &LoggingSection) -> Result<()> {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging.level.clone().into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .try_init()?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::Error;

  #[test]
  fn second_init_fails_as_logging_error() {
    let logging = LoggingSection::default();
    let _ = init(&logging);
    let err = init(&logging).unwrap_err();
    assert!(matches!(err, Error::Logging(_)));
    assert!(!err.is_configuration());
  }
}

use thiserror::Error;

/// Failures while answering a weather query
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WeatherError {
    /// The variant has no live backend wired up
    #[error("'{provider}' has no live weather backend wired up")]
    Unimplemented { provider: &'static str },
}

use crate::core::data::resolution::ResolutionError;
use crate::core::exploration::exploration_config::ExplorationConfigError;
use std::error::Error;
use std::fmt;

/// Failures surfaced by the engine. Rendering itself cannot fail; only the
/// setup and the framebuffer can.
#[derive(Debug)]
pub enum EngineError<E> {
    Config(ExplorationConfigError),
    Resolution(ResolutionError),
    Framebuffer(E),
}

impl<E: fmt::Display> fmt::Display for EngineError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid exploration config: {}", err),
            Self::Resolution(err) => write!(f, "unusable framebuffer: {}", err),
            Self::Framebuffer(err) => write!(f, "framebuffer write failed: {}", err),
        }
    }
}

impl<E: Error + 'static> Error for EngineError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Resolution(err) => Some(err),
            Self::Framebuffer(err) => Some(err),
        }
    }
}

impl<E> From<ExplorationConfigError> for EngineError<E> {
    fn from(err: ExplorationConfigError) -> Self {
        Self::Config(err)
    }
}

impl<E> From<ResolutionError> for EngineError<E> {
    fn from(err: ResolutionError) -> Self {
        Self::Resolution(err)
    }
}

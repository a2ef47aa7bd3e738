use crate::error::{ErrorVerbosity, ErrorVerbosityProvider};

/// State shared by every route.
///
/// Requests never write to it, so it is a plain copyable value.
#[derive(Debug, Clone, Copy)]
pub struct ApiState {
    error_verbosity: ErrorVerbosity,
}

impl ApiState {
    pub fn new(error_verbosity: ErrorVerbosity) -> Self {
        Self { error_verbosity }
    }
}

impl ErrorVerbosityProvider for ApiState {
    fn error_verbosity(&self) -> ErrorVerbosity {
        self.error_verbosity
    }
}

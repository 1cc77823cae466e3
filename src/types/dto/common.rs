use poem_openapi::Object;

/// Response model for health check endpoint
#[derive(Object, Debug)]
pub struct HealthResponse {
    /// Always true when the service answers
    pub success: bool,

    /// Human-readable status of the service
    pub message: String,

    /// Timestamp of the health check (ISO 8601 format)
    pub timestamp: String,
}

/// Uniform error envelope returned by every failing endpoint
#[derive(Object, Debug, Clone)]
pub struct ErrorResponse {
    /// Always false
    pub success: bool,

    /// Human-readable error message
    pub error: String,

    /// Failure detail, only present in development mode
    #[oai(skip_serializing_if_is_none)]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            message: None,
        }
    }

    pub fn with_message(mut self, message: Option<String>) -> Self {
        self.message = message;
        self
    }
}

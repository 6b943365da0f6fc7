// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("Missing element: {0}")]
    MissingElement(String),

    #[error("DOM error: {0}")]
    Dom(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),
}

impl PageError {
    pub fn missing(selector: &str) -> Self {
        Self::MissingElement(selector.to_string())
    }

    /// Missing optional markup is expected and only worth a debug line.
    pub fn is_missing_element(&self) -> bool {
        matches!(self, Self::MissingElement(_))
    }
}

pub type Result<T> = std::result::Result<T, PageError>;

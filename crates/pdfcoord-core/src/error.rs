use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewerError {
    #[error("Failed to load PDF: {0}")]
    Load(String),

    #[error("PDF has no pages")]
    NoPages,

    #[error("Invalid page width: {0}")]
    InvalidPageWidth(f64),

    #[error("Rendering failed: {0}")]
    Render(String),

    #[error("Clipboard write failed: {0}")]
    Clipboard(String),

    #[error("DOM error: {0}")]
    Dom(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptimiserError {
    #[error("Image optimisation is not configured")]
    Disabled,

    #[error("Optimiser request failed: {0}")]
    Request(String),

    #[error("Optimiser rejected the image ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Lossy size reduction for uploaded images. Callers treat every error as
/// "keep the original".
#[async_trait]
pub trait ImageOptimiser: Send + Sync {
    async fn optimise(&self, bytes: &[u8]) -> Result<Vec<u8>, OptimiserError>;
}

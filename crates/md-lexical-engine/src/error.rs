#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),
}

use thiserror::Error;

/// Per-device failure kinds. Every variant is recovered inside the
/// collection loop; a failed device is skipped and the loop moves on.
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("no connection to {address}: {source}")]
    Http {
        address: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("invalid response from {address}: {source}")]
    Parse {
        address: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{address} reported id {id} but omitted `{field}`")]
    MissingField {
        address: String,
        id: i64,
        field: &'static str,
    },
}

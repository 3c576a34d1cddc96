#[derive(thiserror::Error, Debug, serde::Deserialize, serde::Serialize)]
#[allow(clippy::enum_variant_names)]
pub enum Error {
    #[error("Generic {0}")]
    Generic(String),

    #[error("Search query must not be empty")]
    EmptyQuery,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected response from the books API: {0}")]
    BadResponse(String),
}

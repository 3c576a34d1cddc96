use serde::{Deserialize, Serialize};

/// Google Books volumes API response
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct SearchResponse {
    #[serde(rename = "totalItems", default)]
    pub total_items: u64,
    /// Absent entirely when the query matches nothing
    #[serde(default)]
    pub items: Vec<Volume>,
}

/// One volume entry from the API
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Volume {
    pub id: Option<String>,
    #[serde(rename = "volumeInfo", default)]
    pub volume_info: VolumeInfo,
}

/// Nested volume metadata holding the fields we render
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct VolumeInfo {
    pub title: Option<String>,
    pub authors: Option<Vec<String>>,
    #[serde(rename = "infoLink")]
    pub info_link: Option<String>,
}

/// Parsed representation of one search result
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct BookRecord {
    pub title: String,
    pub authors: String,
    pub info_link: String,
}

/// Complete search output with records and query metadata
#[derive(Debug, Serialize, Clone)]
pub struct SearchOutput {
    pub query: String,
    pub total_items: u64,
    pub items: Vec<BookRecord>,
}

/// Join an author list into a single display string, source order preserved
pub fn join_authors(authors: &[String]) -> String {
    authors.join(", ")
}

/// Transform API volumes into book records
///
/// Order-preserving: N volumes in, N records out. Missing fields become
/// empty strings rather than failures, so a volume without an authors
/// list still yields a record.
pub fn transform_volumes(volumes: Vec<Volume>) -> Vec<BookRecord> {
    volumes
        .into_iter()
        .map(|volume| BookRecord {
            title: volume.volume_info.title.unwrap_or_default(),
            authors: volume
                .volume_info
                .authors
                .as_deref()
                .map(join_authors)
                .unwrap_or_default(),
            info_link: volume.volume_info.info_link.unwrap_or_default(),
        })
        .collect()
}

/// Parse a raw response body into the typed search response
///
/// A body without an `items` array (zero matches) parses to an empty
/// response; a malformed body is an error.
pub fn parse_search_response(body: &str) -> Result<SearchResponse, serde_json::Error> {
    serde_json::from_str(body)
}

/// Build the search output handed to renderers
pub fn build_search_output(
    query: String,
    total_items: u64,
    records: Vec<BookRecord>,
) -> SearchOutput {
    SearchOutput {
        query,
        total_items,
        items: records,
    }
}

use crate::prelude::{println, *};
use booklist_core::books::{parse_search_response, SearchResponse};

pub mod search;

// Re-export public data functions
pub use search::search_books_data;

// Re-export domain types from core
pub use booklist_core::books::{BookRecord, SearchOutput};

const BOOKS_API_BASE: &str = "https://www.googleapis.com/books/v1/volumes";

#[derive(Debug, clap::Parser)]
#[command(name = "books")]
#[command(about = "Google Books catalog operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Search the catalog by keyword
    #[clap(name = "search")]
    Search(search::SearchOptions),
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Books API Base: {}", BOOKS_API_BASE);
        println!();
    }

    match app.command {
        Commands::Search(options) => search::run(options, global).await,
    }
}

// Shared utility functions
pub fn get_api_base() -> &'static str {
    BOOKS_API_BASE
}

/// Build the volumes query URL for a keyword and result cap
pub fn build_search_url(base: &str, query: &str, limit: usize) -> String {
    format!("{base}?q={}&maxResults={limit}", urlencoding::encode(query))
}

/// Reject empty or whitespace-only keywords before any request is issued
pub fn validate_query(query: &str) -> Result<&str> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(eyre!(Error::EmptyQuery));
    }
    Ok(trimmed)
}

pub async fn fetch_books(client: &reqwest::Client, url: &str) -> Result<SearchResponse> {
    let response = client.get(url).send().await.map_err(|e| {
        if e.is_connect() || e.is_timeout() {
            eyre!(Error::Network(e.to_string()))
        } else {
            eyre!("Failed to fetch books: {}", e)
        }
    })?;

    if !response.status().is_success() {
        return Err(eyre!(Error::BadResponse(f!(
            "HTTP {}",
            response.status()
        ))));
    }

    let body = response
        .text()
        .await
        .map_err(|e| eyre!("Failed to read response body: {}", e))?;

    let parsed =
        parse_search_response(&body).map_err(|e| eyre!(Error::BadResponse(e.to_string())))?;

    Ok(parsed)
}

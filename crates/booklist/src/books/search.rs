use crate::prelude::{println, *};
use booklist_core::books::{
    build_search_output, transform_volumes, BookRecord, SearchOutput,
};
use colored::Colorize;

use super::{build_search_url, fetch_books, get_api_base, validate_query};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct SearchOptions {
    /// Search keyword (e.g., "walden" or "rust programming")
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Maximum number of results to request
    #[arg(short, long, env = "BOOKS_LIMIT", default_value = "10")]
    pub limit: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output as a compact table
    #[arg(long)]
    pub table: bool,
}

pub async fn run(options: SearchOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Searching for \"{}\"...", options.query);
    }

    let search_output = search_books_data(&options.query, options.limit).await?;

    if options.json {
        output_json(&search_output)?;
    } else if options.table {
        output_table(&search_output);
    } else {
        output_formatted(&search_output)?;
    }

    Ok(())
}

/// Fetches book search results and returns them as a structured SearchOutput
///
/// Zero matches is not an error: the output simply carries an empty record
/// list. Transport failures, non-200 statuses, and malformed bodies surface
/// as errors instead.
pub async fn search_books_data(query: &str, limit: usize) -> Result<SearchOutput> {
    let keyword = validate_query(query)?;

    let client = reqwest::Client::new();
    let url = build_search_url(get_api_base(), keyword, limit);
    let response = fetch_books(&client, &url).await?;

    let total_items = response.total_items;
    let records = transform_volumes(response.items);

    Ok(build_search_output(
        keyword.to_string(),
        total_items,
        records,
    ))
}

/// Convert search output to JSON string
fn format_search_json(output: &SearchOutput) -> Result<String> {
    serde_json::to_string_pretty(output).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// Convert search output to formatted text with colors
fn format_search_text(output: &SearchOutput) -> String {
    let mut result = String::new();

    // Header
    result.push_str(&f!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&f!(
        "{}\n",
        f!("BOOK SEARCH RESULTS for \"{}\"", output.query)
            .bright_cyan()
            .bold()
    ));
    result.push_str(&f!("{}\n", "=".repeat(80).bright_cyan()));

    if output.items.is_empty() {
        result.push_str(&f!(
            "\n{}\n",
            f!("No books found for \"{}\".", output.query).yellow()
        ));
    } else {
        for (idx, record) in output.items.iter().enumerate() {
            result.push_str(&f!(
                "\n{} {}\n",
                f!("[{}]", idx + 1).yellow().bold(),
                if record.title.is_empty() {
                    "(No title)".to_string().white().bold()
                } else {
                    record.title.clone().white().bold()
                }
            ));

            if !record.authors.is_empty() {
                result.push_str(&f!(
                    "    {}: {}\n",
                    "By".green(),
                    record.authors.bright_white()
                ));
            }

            if !record.info_link.is_empty() {
                result.push_str(&f!(
                    "    {}: {}\n",
                    "Link".green(),
                    record.info_link.cyan().underline()
                ));
            }
        }

        result.push_str(&f!(
            "\n{} {} {} {} {}\n",
            "Showing".bright_white(),
            output.items.len().to_string().bright_cyan().bold(),
            "of".bright_white(),
            output.total_items.to_string().bright_cyan().bold(),
            "matching books".bright_white()
        ));
    }

    // Usage hints
    result.push_str(&f!(
        "\n{}:\n",
        "To change the result cap".bright_white().bold()
    ));
    result.push_str(&f!(
        "  {}\n",
        f!("booklist books search \"{}\" --limit <number>", output.query).cyan()
    ));

    result.push_str(&f!(
        "\n{}:\n",
        "To get JSON output".bright_white().bold()
    ));
    result.push_str(&f!(
        "  {}\n",
        f!("booklist books search \"{}\" --json", output.query).cyan()
    ));

    result.push('\n');
    result
}

/// Convert search output to a compact table
fn format_search_table(output: &SearchOutput) -> prettytable::Table {
    let mut table = new_table();

    table.set_titles(prettytable::row!["#", "TITLE", "AUTHORS", "LINK"]);

    for (idx, record) in output.items.iter().enumerate() {
        table.add_row(prettytable::row![
            idx + 1,
            record.title,
            record.authors,
            record.info_link
        ]);
    }

    table
}

fn output_json(output: &SearchOutput) -> Result<()> {
    let json = format_search_json(output)?;
    println!("{}", json);
    Ok(())
}

fn output_table(output: &SearchOutput) {
    format_search_table(output).printstd();
}

fn output_formatted(output: &SearchOutput) -> Result<()> {
    let formatted = format_search_text(output);
    print!("{}", formatted);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record(title: &str, authors: &str) -> BookRecord {
        BookRecord {
            title: title.to_string(),
            authors: authors.to_string(),
            info_link: f!("https://books.example.com/{}", title.to_lowercase()),
        }
    }

    fn create_test_output(items: Vec<BookRecord>, query: &str) -> SearchOutput {
        let total = items.len() as u64;
        build_search_output(query.to_string(), total, items)
    }

    #[test]
    fn test_format_search_json_basic() {
        let record = create_test_record("Walden", "Henry David Thoreau");
        let output = create_test_output(vec![record], "walden");

        let json = format_search_json(&output).unwrap();

        assert!(json.contains("\"title\": \"Walden\""));
        assert!(json.contains("\"authors\": \"Henry David Thoreau\""));
        assert!(json.contains("\"query\": \"walden\""));
        assert!(json.contains("\"total_items\": 1"));
    }

    #[test]
    fn test_format_search_json_empty() {
        let output = create_test_output(vec![], "nonexistent");

        let json = format_search_json(&output).unwrap();

        assert!(json.contains("\"items\": []"));
        assert!(json.contains("\"total_items\": 0"));
    }

    #[test]
    fn test_format_search_json_structure() {
        let record = create_test_record("Walden", "Henry David Thoreau");
        let output = create_test_output(vec![record], "walden");

        let json = format_search_json(&output).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(parsed.get("query").is_some());
        assert!(parsed.get("items").is_some());
        assert!(parsed.get("total_items").is_some());
        assert_eq!(parsed["items"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_format_search_text_basic() {
        let record = create_test_record("Walden", "Henry David Thoreau");
        let output = create_test_output(vec![record], "walden");

        let formatted = format_search_text(&output);

        assert!(formatted.contains("BOOK SEARCH RESULTS for \"walden\""));
        assert!(formatted.contains("Walden"));
        assert!(formatted.contains("Henry David Thoreau"));
        assert!(formatted.contains("[1]"));
    }

    #[test]
    fn test_format_search_text_multiple() {
        let items = vec![
            create_test_record("First", "Author One"),
            create_test_record("Second", "Author Two"),
            create_test_record("Third", "Author Three"),
        ];
        let output = create_test_output(items, "books");

        let formatted = format_search_text(&output);

        assert!(formatted.contains("[1]"));
        assert!(formatted.contains("[2]"));
        assert!(formatted.contains("[3]"));
        assert!(formatted.contains("First"));
        assert!(formatted.contains("Second"));
        assert!(formatted.contains("Third"));
    }

    #[test]
    fn test_format_search_text_empty_state() {
        let output = create_test_output(vec![], "gibberish");

        let formatted = format_search_text(&output);

        assert!(formatted.contains("No books found for \"gibberish\"."));
        assert!(!formatted.contains("[1]"));
    }

    #[test]
    fn test_format_search_text_includes_link() {
        let record = create_test_record("Walden", "Henry David Thoreau");
        let output = create_test_output(vec![record], "walden");

        let formatted = format_search_text(&output);

        assert!(formatted.contains("Link"));
        assert!(formatted.contains("https://books.example.com/walden"));
    }

    #[test]
    fn test_format_search_text_missing_fields() {
        let record = BookRecord {
            title: String::new(),
            authors: String::new(),
            info_link: String::new(),
        };
        let output = create_test_output(vec![record], "odd");

        let formatted = format_search_text(&output);

        assert!(formatted.contains("(No title)"));
        assert!(!formatted.contains("By"));
        assert!(!formatted.contains("Link:"));
    }

    #[test]
    fn test_format_search_text_shows_result_counts() {
        let items = vec![
            create_test_record("First", "Author One"),
            create_test_record("Second", "Author Two"),
        ];
        let mut output = create_test_output(items, "books");
        output.total_items = 120;

        let formatted = format_search_text(&output);

        assert!(formatted.contains("Showing"));
        assert!(formatted.contains("2"));
        assert!(formatted.contains("120"));
        assert!(formatted.contains("matching books"));
    }

    #[test]
    fn test_format_search_text_includes_usage_hints() {
        let record = create_test_record("Walden", "Henry David Thoreau");
        let output = create_test_output(vec![record], "walden");

        let formatted = format_search_text(&output);

        assert!(formatted.contains("To change the result cap"));
        assert!(formatted.contains("To get JSON output"));
        assert!(formatted.contains("booklist books search \"walden\" --json"));
    }

    #[test]
    fn test_format_search_table_has_header_and_rows() {
        let items = vec![
            create_test_record("First", "Author One"),
            create_test_record("Second", "Author Two"),
        ];
        let output = create_test_output(items, "books");

        let table = format_search_table(&output);

        // One row per record; the header lives in the title row
        assert_eq!(table.len(), 2);
        let rendered = table.to_string();
        assert!(rendered.contains("TITLE"));
        assert!(rendered.contains("First"));
        assert!(rendered.contains("Author Two"));
    }

    #[test]
    fn test_format_search_table_empty() {
        let output = create_test_output(vec![], "nothing");

        let table = format_search_table(&output);

        assert_eq!(table.len(), 0);
    }
}

//! Core library for booklist
//!
//! This crate implements the **Functional Core** of the booklist application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The booklist project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`booklist_core`** (this crate): Pure transformation functions with zero I/O
//! - **`booklist`**: I/O operations and orchestration (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Deterministic**: Behavior is predictable and reproducible
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! - [`books`]: Models and transformations for Google Books volumes API data
//!
//! The module contains:
//!
//! - **Domain models**: Structured types representing API responses and outputs
//! - **Transformation functions**: Pure functions that convert API data to domain models
//! - **Comprehensive tests**: Unit tests using fixture data (no mocking)
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use booklist_core::books::{parse_search_response, transform_volumes};
//!
//! // Parse a response body captured as fixture data (no HTTP required)
//! let response = parse_search_response(body)?;
//!
//! // Transform using pure functions
//! let records = transform_volumes(response.items);
//!
//! // Assert on results (no mocking needed)
//! assert_eq!(records[0].title, "Walden");
//! ```

pub mod books;

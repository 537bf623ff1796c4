//! countryinfo_rs
//!
//! A REST facade over the restcountries.com API: fetch country metadata,
//! reshape it, and serve derived views (filters, sorts, regional statistics,
//! pairwise comparisons) over HTTP. Pairs with the `countryinfo` server
//! binary.
//!
//! ### Features
//! - Fetch one country by name or the full country list
//! - Substring filtering and population/name/area sorting
//! - Regional statistics with top-5 language and currency frequency tables
//! - Pairwise comparison: population/area ratios, shared languages, borders
//!
//! ### Example
//! ```no_run
//! use countryinfo_rs::{Client, query};
//!
//! let client = Client::default();
//! let countries = client.fetch_all()?;
//! let matching = query::filter_by_substring(countries, "stan")?;
//! for country in query::sort_by_population_desc(matching) {
//!     println!("{}", query::format_with_population(&country));
//! }
//! # Ok::<(), countryinfo_rs::Error>(())
//! ```
//!
//! The engines are pure: they take a fetched snapshot as input and never
//! touch the network or shared state themselves. Each HTTP request fetches
//! its own snapshot, transforms it, and discards it.

pub mod aggregate;
pub mod api;
pub mod compare;
pub mod error;
pub mod http;
pub mod models;
pub mod query;

pub use api::Client;
pub use error::{Error, Result};
pub use models::Country;

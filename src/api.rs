//! Synchronous client for the **restcountries.com API (v3.1)**.
//!
//! This module covers the `/name/{name}` and `/all` endpoints and returns
//! results as `models::Country` records.
//!
//! ### Notes
//! - `/all` requires a `fields` projection; the client requests exactly the
//!   fields the list and aggregation operations consume.
//! - Network timeouts use a sane default (30s) and can be adjusted by editing
//!   the client builder.
//! - Transient failures (transport errors, 5xx) are retried a few times with a
//!   short backoff before the fetch is reported as unavailable. The engines
//!   downstream never retry on their own.
//!
//! Typical usage:
//! ```no_run
//! # use countryinfo_rs::Client;
//! let client = Client::default();
//! let matches = client.fetch_by_name("Germany")?;
//! # Ok::<(), countryinfo_rs::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::models::Country;
use log::debug;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use std::time::Duration;

/// Field projection for `/all`: everything the substring and region operations
/// read. Single-country lookups go through `/name/{name}` and get the full
/// document instead.
const ALL_FIELDS: &str = "name,region,subregion,population,area,languages,currencies";

// Allow -, _, . unescaped in path segments; spaces in names like
// "South Africa" become %20.
const SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30)) // total request timeout
            .connect_timeout(Duration::from_secs(10)) // connect timeout
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("countryinfo_rs/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("reqwest client build");
        Self {
            base_url: "https://restcountries.com/v3.1".into(),
            http,
        }
    }
}

impl Client {
    /// Fetch every country matching `name`.
    ///
    /// When multiple historical or alias matches exist the upstream returns
    /// them all; by upstream convention the first record is authoritative for
    /// single-country lookups.
    ///
    /// ### Errors
    /// - `InvalidInput` when `name` is empty or whitespace
    /// - `NotFound` when the upstream knows no such country
    /// - `Unavailable` on transport errors or persistent 5xx
    pub fn fetch_by_name(&self, name: &str) -> Result<Vec<Country>> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::InvalidInput(
                "country name must not be empty".into(),
            ));
        }
        let url = format!(
            "{}/name/{}",
            self.base_url,
            percent_encoding::utf8_percent_encode(name, SAFE)
        );
        debug!("fetching countries by name: {}", name);
        let countries = self.get_json(&url)?;
        if countries.is_empty() {
            // Upstream normally answers 404 for no match; an empty 200 array
            // means the same thing.
            return Err(Error::NotFound);
        }
        Ok(countries)
    }

    /// Fetch all known countries, restricted to the `ALL_FIELDS` projection.
    ///
    /// ### Errors
    /// - `Unavailable` on transport errors or persistent 5xx
    pub fn fetch_all(&self) -> Result<Vec<Country>> {
        let url = format!("{}/all?fields={}", self.base_url, ALL_FIELDS);
        debug!("fetching all countries");
        self.get_json(&url).map_err(|e| match e {
            // /all has no not-found case; a 404 here is an upstream fault.
            Error::NotFound => Error::Unavailable {
                reason: "unexpected HTTP 404 from /all".into(),
            },
            other => other,
        })
    }

    // Small retry for transient failures (5xx / network errors). A 404 is
    // final and surfaces as NotFound immediately.
    fn get_json(&self, url: &str) -> Result<Vec<Country>> {
        let mut last_err: Option<String> = None;
        for backoff_ms in [100u64, 300, 700] {
            match self.http.get(url).send() {
                Ok(r) if r.status().is_success() => {
                    return r.json().map_err(|e| Error::Unavailable {
                        reason: format!("decode json: {e}"),
                    });
                }
                Ok(r) if r.status() == StatusCode::NOT_FOUND => return Err(Error::NotFound),
                Ok(r) if r.status().is_server_error() => {
                    last_err = Some(format!("HTTP {}", r.status()));
                }
                Ok(r) => {
                    return Err(Error::Unavailable {
                        reason: format!("request failed with HTTP {}", r.status()),
                    });
                }
                Err(e) => last_err = Some(e.to_string()),
            }
            std::thread::sleep(Duration::from_millis(backoff_ms));
        }
        Err(Error::Unavailable {
            reason: last_err.unwrap_or_else(|| "retries exhausted".into()),
        })
    }
}

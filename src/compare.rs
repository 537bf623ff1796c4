//! Pairwise country comparison: ratios and set relationships.

use crate::error::{Error, Result};
use crate::models::Country;
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Result of comparing country A against country B.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    /// population(A) / population(B).
    pub population_ratio: f64,
    /// area(A) / area(B).
    pub area_ratio: f64,
    /// Language names (not codes) spoken in both countries, sorted ascending.
    pub shared_languages: Vec<String>,
    /// Whether the two border-code sets intersect.
    pub directly_bordering: bool,
}

/// Compare two already-fetched countries.
///
/// Ratios are raised as `InvalidComputation` rather than computed against a
/// zero or missing denominator. Absent border data is treated as the empty
/// set: a country with no recorded land borders cannot directly border
/// anything, which is a `false`, not an error.
pub fn compare(a: &Country, b: &Country) -> Result<Comparison> {
    if b.population == 0 {
        return Err(Error::InvalidComputation(format!(
            "population of {} is zero, ratio is undefined",
            b.name.common
        )));
    }
    let population_ratio = a.population as f64 / b.population as f64;

    let area_a = a.area.ok_or_else(|| missing_area(a))?;
    let area_b = b.area.ok_or_else(|| missing_area(b))?;
    if area_b == 0.0 {
        return Err(Error::InvalidComputation(format!(
            "area of {} is zero, ratio is undefined",
            b.name.common
        )));
    }
    let area_ratio = area_a / area_b;

    let shared_languages = match (&a.languages, &b.languages) {
        (Some(la), Some(lb)) => {
            let names_b: AHashSet<&str> = lb.values().map(String::as_str).collect();
            let mut shared: Vec<String> = la
                .values()
                .filter(|name| names_b.contains(name.as_str()))
                .cloned()
                .collect();
            shared.sort();
            shared.dedup();
            shared
        }
        // Absent language data on either side means no shared languages.
        _ => Vec::new(),
    };

    let directly_bordering = match (&a.borders, &b.borders) {
        (Some(ba), Some(bb)) => {
            let codes: AHashSet<&str> = ba.iter().map(String::as_str).collect();
            bb.iter().any(|code| codes.contains(code.as_str()))
        }
        _ => false,
    };

    Ok(Comparison {
        population_ratio,
        area_ratio,
        shared_languages,
        directly_bordering,
    })
}

fn missing_area(c: &Country) -> Error {
    Error::InvalidComputation(format!("no area recorded for {}", c.name.common))
}

//! Regional summary statistics and frequency tables.

use crate::error::{Error, Result};
use crate::models::Country;
use ahash::{AHashMap, AHashSet};
use log::debug;
use num_format::{Locale, ToFormattedString};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// How many entries the frequency tables keep.
pub const TOP_N: usize = 5;

/// One frequency-table row: a category key (language name or currency code)
/// and the number of countries exhibiting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FrequencyEntry {
    pub key: String,
    pub count: u64,
}

/// Summary statistics for one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegionStatistics {
    pub total_population: u64,
    pub total_area: f64,
    pub average_population_density: f64,
    /// Top languages by country count, most common first. An ordered list
    /// rather than a map: JSON objects do not guarantee key order.
    pub most_common_languages: Vec<FrequencyEntry>,
    /// Top currency codes by country count, most common first.
    pub most_common_currencies: Vec<FrequencyEntry>,
}

/// Countries whose `region` equals `region`, case-insensitively. No match
/// yields an empty vec; the facade maps that to not-found.
pub fn filter_by_region(countries: Vec<Country>, region: &str) -> Vec<Country> {
    countries
        .into_iter()
        .filter(|c| {
            c.region
                .as_deref()
                .is_some_and(|r| r.eq_ignore_ascii_case(region))
        })
        .collect()
}

/// Compute the summary statistics for an already-filtered set of countries.
///
/// Sums and frequency counts do not depend on input order; the top-5 tables
/// are deterministic (count descending, key ascending on ties).
///
/// ### Errors
/// - `NotFound` when `countries` is empty — a region with no matches must
///   never reach the density division
/// - `InvalidComputation` when the summed area is zero
pub fn region_statistics(countries: &[Country]) -> Result<RegionStatistics> {
    if countries.is_empty() {
        return Err(Error::NotFound);
    }
    debug!("computing statistics over {} countries", countries.len());

    let total_population: u64 = countries.iter().map(|c| c.population).sum();
    let total_area: f64 = countries.iter().filter_map(|c| c.area).sum();
    if total_area == 0.0 {
        return Err(Error::InvalidComputation(
            "total area is zero, population density is undefined".into(),
        ));
    }
    let average_population_density = total_population as f64 / total_area;

    // Languages count by display name, one occurrence per country per distinct
    // name (two codes mapping to the same name in one record count once).
    let mut language_freq: AHashMap<&str, u64> = AHashMap::new();
    for c in countries {
        if let Some(languages) = &c.languages {
            let distinct: AHashSet<&str> = languages.values().map(String::as_str).collect();
            for name in distinct {
                *language_freq.entry(name).or_insert(0) += 1;
            }
        }
    }

    // Currencies count by code; map keys are distinct within a record already.
    let mut currency_freq: AHashMap<&str, u64> = AHashMap::new();
    for c in countries {
        if let Some(currencies) = &c.currencies {
            for code in currencies.keys() {
                *currency_freq.entry(code).or_insert(0) += 1;
            }
        }
    }

    Ok(RegionStatistics {
        total_population,
        total_area,
        average_population_density,
        most_common_languages: top_n(language_freq, TOP_N),
        most_common_currencies: top_n(currency_freq, TOP_N),
    })
}

/// The `n` highest-count entries, count descending with ties broken by key
/// ascending so hash iteration order never leaks into the result. Fewer than
/// `n` distinct entries yield all of them.
fn top_n(freq: AHashMap<&str, u64>, n: usize) -> Vec<FrequencyEntry> {
    let mut entries: Vec<FrequencyEntry> = freq
        .into_iter()
        .map(|(key, count)| FrequencyEntry {
            key: key.to_string(),
            count,
        })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)));
    entries.truncate(n);
    entries
}

/// Facade-boundary transform for `?format=pretty`: every number in the
/// serialized statistics becomes a decimal string with comma thousands
/// separators (1000000 -> "1,000,000"); non-numeric values pass through
/// unchanged.
pub fn pretty_statistics(stats: &RegionStatistics) -> Value {
    // RegionStatistics always serializes; the fallback keeps this infallible.
    let value = serde_json::to_value(stats).unwrap_or(Value::Null);
    prettify(value)
}

fn prettify(value: Value) -> Value {
    match value {
        Value::Number(n) => Value::String(group_number(&n)),
        Value::Array(items) => Value::Array(items.into_iter().map(prettify).collect()),
        Value::Object(map) => Value::Object(map.into_iter().map(|(k, v)| (k, prettify(v))).collect()),
        other => other,
    }
}

fn group_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_u64() {
        return i.to_formatted_string(&Locale::en);
    }
    if let Some(i) = n.as_i64() {
        return i.to_formatted_string(&Locale::en);
    }
    group_f64(n.as_f64().unwrap_or(0.0))
}

/// Group the integer part and keep up to two fractional digits, trimmed.
fn group_f64(x: f64) -> String {
    if !x.is_finite() {
        return x.to_string();
    }
    let fixed = format!("{:.2}", x);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let grouped = int_part
        .parse::<i64>()
        .map(|i| i.to_formatted_string(&Locale::en))
        .unwrap_or_else(|_| int_part.to_string());
    let frac = frac_part.trim_end_matches('0');
    if frac.is_empty() {
        grouped
    } else {
        format!("{grouped}.{frac}")
    }
}

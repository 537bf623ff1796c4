//! Filtering, sorting, and formatting over a fetched snapshot of countries.
//!
//! Every operation takes the records as an explicit input and returns a new
//! value; nothing here touches the network or any shared state. An empty
//! result is a normal outcome — the HTTP facade decides whether that becomes
//! a 404.

use crate::error::{Error, Result};
use crate::models::Country;
use std::cmp::Ordering;

/// Countries whose common name contains `substring`, case-insensitively.
///
/// An empty or all-whitespace substring is rejected as `InvalidInput` rather
/// than matching everything; "all countries" is served by the region endpoints
/// instead.
pub fn filter_by_substring(countries: Vec<Country>, substring: &str) -> Result<Vec<Country>> {
    let needle = substring.trim().to_lowercase();
    if needle.is_empty() {
        return Err(Error::InvalidInput(
            "search substring must not be empty".into(),
        ));
    }
    Ok(countries
        .into_iter()
        .filter(|c| c.name.common.to_lowercase().contains(&needle))
        .collect())
}

/// Sort by population, largest first. The sort is stable: equal populations
/// keep their input order.
pub fn sort_by_population_desc(mut countries: Vec<Country>) -> Vec<Country> {
    countries.sort_by(|a, b| b.population.cmp(&a.population));
    countries
}

/// Case-insensitive sort by common name, ascending.
pub fn sort_by_name_asc(mut countries: Vec<Country>) -> Vec<Country> {
    countries.sort_by_cached_key(|c| c.name.common.to_lowercase());
    countries
}

/// Sort by area, largest first. Stable; countries without a recorded area sort
/// after every country that has one.
pub fn sort_by_area_desc(mut countries: Vec<Country>) -> Vec<Country> {
    countries.sort_by(|a, b| match (a.area, b.area) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    countries
}

/// `"<CommonName> (<Population>)"` with the population as a plain integer, no
/// grouping separators.
pub fn format_with_population(country: &Country) -> String {
    format!("{} ({})", country.name.common, country.population)
}

/// Join entries with the given separator (`"; "` for country listings, `", "`
/// for continents).
pub fn format_list<S: AsRef<str>>(items: &[S], separator: &str) -> String {
    items
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(separator)
}

use countryinfo_rs::Error;
use countryinfo_rs::aggregate::{filter_by_region, region_statistics};
use countryinfo_rs::models::{Country, CurrencyInfo};
use countryinfo_rs::query::sort_by_population_desc;
use serde_json::json;

fn country(name: &str, region: &str, population: u64, area: Option<f64>) -> Country {
    serde_json::from_value(json!({
        "name": {"common": name, "official": name},
        "region": region,
        "population": population,
        "area": area,
    }))
    .unwrap()
}

fn with_languages(mut c: Country, pairs: &[(&str, &str)]) -> Country {
    c.languages = Some(
        pairs
            .iter()
            .map(|(code, name)| (code.to_string(), name.to_string()))
            .collect(),
    );
    c
}

fn with_currencies(mut c: Country, codes: &[&str]) -> Country {
    c.currencies = Some(
        codes
            .iter()
            .map(|code| {
                (
                    code.to_string(),
                    CurrencyInfo {
                        name: code.to_string(),
                        symbol: None,
                    },
                )
            })
            .collect(),
    );
    c
}

#[test]
fn region_filter_is_case_insensitive() {
    let countries = vec![
        country("Germany", "Europe", 83_240_525, Some(357_114.0)),
        country("Japan", "Asia", 125_836_021, Some(377_930.0)),
        country("France", "Europe", 67_391_582, Some(551_695.0)),
    ];
    let europe = filter_by_region(countries, "eUrOpE");
    let names: Vec<&str> = europe.iter().map(Country::common_name).collect();
    assert_eq!(names, ["Germany", "France"]);
}

#[test]
fn unknown_region_filters_to_empty() {
    let countries = vec![country("Germany", "Europe", 83_240_525, Some(357_114.0))];
    assert!(filter_by_region(countries, "Atlantis").is_empty());
}

#[test]
fn statistics_sum_population_and_area() {
    let countries = vec![
        country("A", "Europe", 10, Some(5.0)),
        country("B", "Europe", 20, Some(5.0)),
        country("C", "Europe", 30, None), // missing area contributes nothing
    ];
    let stats = region_statistics(&countries).unwrap();
    assert_eq!(stats.total_population, 60);
    assert_eq!(stats.total_area, 10.0);
    assert!((stats.average_population_density - 6.0).abs() < 1e-9);
}

#[test]
fn empty_region_reports_not_found_not_divide_by_zero() {
    assert!(matches!(region_statistics(&[]), Err(Error::NotFound)));
}

#[test]
fn zero_total_area_is_invalid_computation() {
    let countries = vec![
        country("A", "Somewhere", 10, None),
        country("B", "Somewhere", 20, Some(0.0)),
    ];
    let err = region_statistics(&countries).unwrap_err();
    assert!(matches!(err, Error::InvalidComputation(_)));
}

#[test]
fn statistics_are_invariant_under_input_reordering() {
    let mut countries = vec![
        with_currencies(
            with_languages(country("A", "R", 10, Some(1.0)), &[("eng", "English")]),
            &["EUR"],
        ),
        with_currencies(
            with_languages(
                country("B", "R", 20, Some(2.0)),
                &[("eng", "English"), ("fra", "French")],
            ),
            &["EUR", "CHF"],
        ),
        with_currencies(
            with_languages(country("C", "R", 30, Some(3.0)), &[("deu", "German")]),
            &["EUR"],
        ),
    ];
    let forward = region_statistics(&countries).unwrap();
    countries.reverse();
    let backward = region_statistics(&countries).unwrap();
    assert_eq!(forward, backward);
}

#[test]
fn top_five_languages_with_deterministic_tie_break() {
    // English in 3 countries; French/German/Italian/Spanish/Dutch in 1 each.
    // The five singletons tie: key-ascending order decides, Spanish drops out.
    let countries = vec![
        with_languages(country("A", "R", 1, Some(1.0)), &[("eng", "English")]),
        with_languages(
            country("B", "R", 1, Some(1.0)),
            &[("eng", "English"), ("fra", "French")],
        ),
        with_languages(
            country("C", "R", 1, Some(1.0)),
            &[("eng", "English"), ("deu", "German")],
        ),
        with_languages(country("D", "R", 1, Some(1.0)), &[("ita", "Italian")]),
        with_languages(country("E", "R", 1, Some(1.0)), &[("spa", "Spanish")]),
        with_languages(country("F", "R", 1, Some(1.0)), &[("nld", "Dutch")]),
    ];
    let stats = region_statistics(&countries).unwrap();
    let table: Vec<(&str, u64)> = stats
        .most_common_languages
        .iter()
        .map(|e| (e.key.as_str(), e.count))
        .collect();
    assert_eq!(
        table,
        [
            ("English", 3),
            ("Dutch", 1),
            ("French", 1),
            ("German", 1),
            ("Italian", 1),
        ]
    );
}

#[test]
fn fewer_than_five_distinct_languages_returns_all_of_them() {
    let countries = vec![
        with_languages(country("A", "R", 1, Some(1.0)), &[("eng", "English")]),
        with_languages(country("B", "R", 1, Some(1.0)), &[("fra", "French")]),
        with_languages(
            country("C", "R", 1, Some(1.0)),
            &[("eng", "English"), ("deu", "German")],
        ),
    ];
    let stats = region_statistics(&countries).unwrap();
    assert_eq!(stats.most_common_languages.len(), 3);
    assert_eq!(stats.most_common_languages[0].key, "English");
    assert_eq!(stats.most_common_languages[0].count, 2);
}

#[test]
fn absent_language_and_currency_maps_contribute_nothing() {
    let countries = vec![
        country("Silent", "R", 1, Some(1.0)),
        with_currencies(
            with_languages(country("Loud", "R", 1, Some(1.0)), &[("eng", "English")]),
            &["USD"],
        ),
    ];
    let stats = region_statistics(&countries).unwrap();
    assert_eq!(stats.most_common_languages.len(), 1);
    assert_eq!(stats.most_common_currencies.len(), 1);
    assert_eq!(stats.most_common_languages[0].count, 1);
}

#[test]
fn duplicate_language_names_within_one_record_count_once() {
    // Two codes mapping to the same display name still mean one country
    // speaks it.
    let countries = vec![with_languages(
        country("A", "R", 1, Some(1.0)),
        &[("deu", "German"), ("gsw", "German")],
    )];
    let stats = region_statistics(&countries).unwrap();
    assert_eq!(stats.most_common_languages[0].count, 1);
}

#[test]
fn currencies_count_by_code_per_country() {
    let countries = vec![
        with_currencies(country("A", "R", 1, Some(1.0)), &["EUR"]),
        with_currencies(country("B", "R", 1, Some(1.0)), &["EUR", "CHF"]),
    ];
    let stats = region_statistics(&countries).unwrap();
    let table: Vec<(&str, u64)> = stats
        .most_common_currencies
        .iter()
        .map(|e| (e.key.as_str(), e.count))
        .collect();
    assert_eq!(table, [("EUR", 2), ("CHF", 1)]);
}

#[test]
fn europe_sorted_by_population_starts_with_russia() {
    let countries = vec![
        country("Germany", "Europe", 83_240_525, Some(357_114.0)),
        country("Russia", "Europe", 144_104_080, Some(17_098_242.0)),
        country("China", "Asia", 1_402_112_000, Some(9_706_961.0)),
        country("France", "Europe", 67_391_582, Some(551_695.0)),
    ];
    let europe = sort_by_population_desc(filter_by_region(countries, "Europe"));
    assert_eq!(europe[0].common_name(), "Russia");
}

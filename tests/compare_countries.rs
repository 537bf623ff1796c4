use countryinfo_rs::Error;
use countryinfo_rs::compare::compare;
use countryinfo_rs::models::Country;
use serde_json::json;

fn country(name: &str, population: u64, area: Option<f64>) -> Country {
    serde_json::from_value(json!({
        "name": {"common": name, "official": name},
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

fn with_borders(mut c: Country, codes: &[&str]) -> Country {
    c.borders = Some(codes.iter().map(|s| s.to_string()).collect());
    c
}

fn germany() -> Country {
    with_borders(
        with_languages(
            country("Germany", 83_240_525, Some(357_114.0)),
            &[("deu", "German")],
        ),
        &["AUT", "BEL", "CHE", "CZE", "DNK", "FRA", "LUX", "NLD", "POL"],
    )
}

fn austria() -> Country {
    with_borders(
        with_languages(
            country("Austria", 8_917_205, Some(83_871.0)),
            &[("de", "German")],
        ),
        &["CZE", "DEU", "HUN", "ITA", "LIE", "SVK", "SVN", "CHE"],
    )
}

#[test]
fn ratios_divide_a_by_b() {
    let result = compare(&germany(), &austria()).unwrap();
    assert!((result.population_ratio - 9.334).abs() < 0.01);
    assert!((result.area_ratio - 4.258).abs() < 0.01);
}

#[test]
fn population_ratio_is_reciprocal_when_swapped() {
    let forward = compare(&germany(), &austria()).unwrap();
    let backward = compare(&austria(), &germany()).unwrap();
    assert!((forward.population_ratio - 1.0 / backward.population_ratio).abs() < 1e-9);
}

#[test]
fn bordering_is_symmetric() {
    assert!(compare(&germany(), &austria()).unwrap().directly_bordering);
    assert!(compare(&austria(), &germany()).unwrap().directly_bordering);

    let portugal = with_borders(country("Portugal", 10_305_564, Some(92_090.0)), &["ESP"]);
    assert!(!compare(&germany(), &portugal).unwrap().directly_bordering);
    assert!(!compare(&portugal, &germany()).unwrap().directly_bordering);
}

#[test]
fn shared_languages_match_on_names_not_codes() {
    // Austria's map keys differ ("de" vs "deu"); the display name decides.
    let result = compare(&germany(), &austria()).unwrap();
    assert_eq!(result.shared_languages, ["German"]);
}

#[test]
fn shared_languages_are_sorted_ascending() {
    let switzerland = with_languages(
        country("Switzerland", 8_654_622, Some(41_284.0)),
        &[
            ("deu", "German"),
            ("fra", "French"),
            ("ita", "Italian"),
            ("roh", "Romansh"),
        ],
    );
    let belgium = with_languages(
        country("Belgium", 11_555_997, Some(30_528.0)),
        &[("deu", "German"), ("fra", "French"), ("nld", "Dutch")],
    );
    let result = compare(&switzerland, &belgium).unwrap();
    assert_eq!(result.shared_languages, ["French", "German"]);
}

#[test]
fn disjoint_languages_share_nothing() {
    let france = with_languages(
        country("France", 67_391_582, Some(551_695.0)),
        &[("fra", "French")],
    );
    let result = compare(&germany(), &france).unwrap();
    assert!(result.shared_languages.is_empty());
}

#[test]
fn absent_borders_mean_not_bordering_not_an_error() {
    // Iceland has no land borders at all: the upstream omits the field.
    let iceland = with_languages(
        country("Iceland", 366_425, Some(103_000.0)),
        &[("isl", "Icelandic")],
    );
    let result = compare(&iceland, &germany()).unwrap();
    assert!(!result.directly_bordering);
    let reverse = compare(&germany(), &iceland).unwrap();
    assert!(!reverse.directly_bordering);
}

#[test]
fn absent_languages_mean_no_shared_languages() {
    let quiet = country("Quiet", 100, Some(1.0));
    let result = compare(&quiet, &germany()).unwrap();
    assert!(result.shared_languages.is_empty());
}

#[test]
fn zero_population_denominator_is_invalid_computation() {
    let ghost = country("Ghost", 0, Some(1.0));
    let err = compare(&germany(), &ghost).unwrap_err();
    assert!(matches!(err, Error::InvalidComputation(_)));
}

#[test]
fn missing_area_is_invalid_computation() {
    let unmeasured = country("Unmeasured", 1_000, None);
    let err = compare(&germany(), &unmeasured).unwrap_err();
    assert!(matches!(err, Error::InvalidComputation(_)));

    let err = compare(&unmeasured, &germany()).unwrap_err();
    assert!(matches!(err, Error::InvalidComputation(_)));
}

#[test]
fn zero_area_denominator_is_invalid_computation() {
    let flat = country("Flat", 1_000, Some(0.0));
    let err = compare(&germany(), &flat).unwrap_err();
    assert!(matches!(err, Error::InvalidComputation(_)));
}

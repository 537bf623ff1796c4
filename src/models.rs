use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

/// One country as served by the restcountries.com v3.1 API.
///
/// Fields correspond to the upstream JSON document; see
/// <https://restcountries.com/v3.1/name/ireland> for an example. Everything the
/// upstream may omit is an `Option` so that "no data" stays distinguishable
/// from an empty value. Records are never mutated after deserialization; each
/// request works on its own freshly fetched snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub name: CountryName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cca2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cca3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub independent: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub un_member: Option<bool>,
    /// Currency code (e.g. "EUR") to descriptor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currencies: Option<HashMap<String, CurrencyInfo>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capital: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subregion: Option<String>,
    /// Language code (e.g. "deu") to display name (e.g. "German").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<HashMap<String, String>>,
    /// Language code to translated country name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translations: Option<HashMap<String, Translation>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latlng: Option<Vec<f64>>,
    /// cca3 codes of neighbouring countries. `None` means the upstream records
    /// no land borders (islands), which is not the same as an empty list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub borders: Option<Vec<String>>,
    /// Surface area in square kilometres. Absent or zero areas must never be
    /// used as a denominator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    #[serde(default)]
    pub population: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezones: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continents: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<Flags>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maps: Option<Maps>,
}

impl Country {
    /// The everyday English name ("Germany", not "Federal Republic of Germany").
    pub fn common_name(&self) -> &str {
        &self.name.common
    }
}

/// The `name` object: common and official names plus per-language native forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CountryName {
    pub common: String,
    #[serde(default)]
    pub official: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native_name: Option<HashMap<String, Translation>>,
}

/// A translated country name pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Translation {
    #[serde(default)]
    pub official: String,
    #[serde(default)]
    pub common: String,
}

/// Currency descriptor, keyed by currency code in `Country::currencies`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CurrencyInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

/// Flag image URLs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Flags {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub png: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub svg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// Map service URLs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Maps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_maps: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_street_maps: Option<String>,
}

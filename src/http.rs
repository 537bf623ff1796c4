//! Actix facade: maps routes onto the query/aggregation/comparison engines
//! and translates the error taxonomy into status codes.
//!
//! Handlers stay thin. Each one fetches a fresh snapshot through the blocking
//! upstream client (on the worker pool, via `web::block`), hands it to the
//! engines, and serializes whatever comes back. Not-found is an empty-result
//! outcome promoted to 404 here, never inside the engines.

use crate::aggregate;
use crate::api::Client;
use crate::compare;
use crate::error::Error;
use crate::models::{Country, CurrencyInfo};
use crate::query;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError, get, web};
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::{IntoParams, OpenApi, ToSchema};

/// Stable machine-readable error kinds, one per taxonomy entry plus the
/// worker-pool failure case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
enum ApiErrorKind {
    NotFound,
    InvalidInput,
    InvalidComputation,
    Unavailable,
    Internal,
}

/// Error envelope returned by every route.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ApiError {
    error: ApiErrorKind,
    #[schema(example = "no matching countries")]
    message: String,
}

impl ApiError {
    fn internal() -> Self {
        Self {
            error: ApiErrorKind::Internal,
            message: "internal server error".into(),
        }
    }
}

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        let kind = match &e {
            Error::NotFound => ApiErrorKind::NotFound,
            Error::InvalidInput(_) => ApiErrorKind::InvalidInput,
            Error::InvalidComputation(_) => ApiErrorKind::InvalidComputation,
            Error::Unavailable { .. } => ApiErrorKind::Unavailable,
        };
        Self {
            error: kind,
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.error {
            ApiErrorKind::NotFound => StatusCode::NOT_FOUND,
            ApiErrorKind::InvalidInput | ApiErrorKind::InvalidComputation => {
                StatusCode::BAD_REQUEST
            }
            ApiErrorKind::Unavailable => StatusCode::BAD_GATEWAY,
            ApiErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

/// Demographic view of one country: the reshape served by `/demographics`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Demographics {
    pub population: u64,
    pub area: Option<f64>,
    pub languages: Option<HashMap<String, String>>,
    pub currencies: Option<HashMap<String, CurrencyInfo>>,
    pub timezones: Option<Vec<String>>,
}

impl From<&Country> for Demographics {
    fn from(c: &Country) -> Self {
        Self {
            population: c.population,
            area: c.area,
            languages: c.languages.clone(),
            currencies: c.currencies.clone(),
            timezones: c.timezones.clone(),
        }
    }
}

// The upstream client is blocking; run it on the worker pool so the actix
// executor is never parked on network I/O.
async fn run_blocking<T, F>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, Error> + Send + 'static,
    T: Send + 'static,
{
    match web::block(f).await {
        Ok(result) => result.map_err(ApiError::from),
        Err(e) => {
            error!("blocking worker failed: {e}");
            Err(ApiError::internal())
        }
    }
}

/// First upstream match for `name`; the authoritative record per upstream
/// convention.
async fn fetch_first(client: &web::Data<Client>, name: String) -> Result<Country, ApiError> {
    let client = client.get_ref().clone();
    run_blocking(move || {
        let found = client.fetch_by_name(&name)?;
        found.into_iter().next().ok_or(Error::NotFound)
    })
    .await
}

async fn fetch_all(client: &web::Data<Client>) -> Result<Vec<Country>, ApiError> {
    let client = client.get_ref().clone();
    run_blocking(move || client.fetch_all()).await
}

fn text(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(body)
}

#[utoipa::path(
    get,
    path = "/countries/{name}",
    params(("name" = String, Path, description = "Country name, e.g. France")),
    responses(
        (status = 200, description = "Full country document", body = Country),
        (status = 404, description = "No such country", body = ApiError)
    )
)]
#[get("/countries/{name}")]
async fn country_info(
    client: web::Data<Client>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let country = fetch_first(&client, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(country))
}

#[utoipa::path(
    get,
    path = "/countries/{name}/flag",
    params(("name" = String, Path, description = "Country name")),
    responses(
        (status = 200, description = "Flag PNG URL", body = String),
        (status = 404, description = "Country or flag data missing", body = ApiError)
    )
)]
#[get("/countries/{name}/flag")]
async fn country_flag(
    client: web::Data<Client>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let country = fetch_first(&client, path.into_inner()).await?;
    let url = country
        .flags
        .and_then(|f| f.png)
        .ok_or_else(|| ApiError::from(Error::NotFound))?;
    Ok(text(url))
}

#[utoipa::path(
    get,
    path = "/countries/{name}/map",
    params(("name" = String, Path, description = "Country name")),
    responses(
        (status = 200, description = "Google Maps URL", body = String),
        (status = 404, description = "Country or map data missing", body = ApiError)
    )
)]
#[get("/countries/{name}/map")]
async fn country_map(
    client: web::Data<Client>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let country = fetch_first(&client, path.into_inner()).await?;
    let url = country
        .maps
        .and_then(|m| m.google_maps)
        .ok_or_else(|| ApiError::from(Error::NotFound))?;
    Ok(text(url))
}

#[utoipa::path(
    get,
    path = "/countries/{name}/continents",
    params(("name" = String, Path, description = "Country name")),
    responses(
        (status = 200, description = "Continents, comma-separated", body = String),
        (status = 404, description = "Country or continent data missing", body = ApiError)
    )
)]
#[get("/countries/{name}/continents")]
async fn country_continents(
    client: web::Data<Client>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let country = fetch_first(&client, path.into_inner()).await?;
    let continents = country
        .continents
        .filter(|c| !c.is_empty())
        .ok_or_else(|| ApiError::from(Error::NotFound))?;
    Ok(text(query::format_list(&continents, ", ")))
}

#[utoipa::path(
    get,
    path = "/countries/{name}/borders",
    params(("name" = String, Path, description = "Country name")),
    responses(
        (status = 200, description = "Bordering country codes", body = [String]),
        (status = 404, description = "Country missing or has no land borders", body = ApiError)
    )
)]
#[get("/countries/{name}/borders")]
async fn country_borders(
    client: web::Data<Client>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let country = fetch_first(&client, path.into_inner()).await?;
    let borders = country
        .borders
        .filter(|b| !b.is_empty())
        .ok_or_else(|| ApiError::from(Error::NotFound))?;
    Ok(HttpResponse::Ok().json(borders))
}

#[utoipa::path(
    get,
    path = "/countries/{name}/translation/{language}",
    params(
        ("name" = String, Path, description = "Country name"),
        ("language" = String, Path, description = "Language code, e.g. deu")
    ),
    responses(
        (status = 200, description = "Translated common name", body = String),
        (status = 404, description = "Country or translation missing", body = ApiError)
    )
)]
#[get("/countries/{name}/translation/{language}")]
async fn country_translation(
    client: web::Data<Client>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, ApiError> {
    let (name, language) = path.into_inner();
    let country = fetch_first(&client, name).await?;
    let translated = country
        .translations
        .as_ref()
        .and_then(|t| t.get(&language))
        .map(|t| t.common.clone())
        .filter(|c| !c.is_empty())
        .ok_or_else(|| ApiError::from(Error::NotFound))?;
    Ok(text(translated))
}

#[utoipa::path(
    get,
    path = "/countries/{name}/demographics",
    params(("name" = String, Path, description = "Country name")),
    responses(
        (status = 200, description = "Demographic summary", body = Demographics),
        (status = 404, description = "No such country", body = ApiError)
    )
)]
#[get("/countries/{name}/demographics")]
async fn country_demographics(
    client: web::Data<Client>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let country = fetch_first(&client, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(Demographics::from(&country)))
}

#[utoipa::path(
    get,
    path = "/countries/{substring}/mostPopulous",
    params(("substring" = String, Path, description = "Substring to match in country names")),
    responses(
        (status = 200, description = "Matching names, population-descending, joined with '; '", body = String),
        (status = 400, description = "Empty substring", body = ApiError),
        (status = 404, description = "No matching countries", body = ApiError)
    )
)]
#[get("/countries/{substring}/mostPopulous")]
async fn most_populous(
    client: web::Data<Client>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let substring = path.into_inner();
    info!("listing most populous countries matching {:?}", substring);
    let countries = fetch_all(&client).await?;
    let ranked = query::sort_by_population_desc(query::filter_by_substring(countries, &substring)?);
    if ranked.is_empty() {
        return Err(Error::NotFound.into());
    }
    let names: Vec<&str> = ranked.iter().map(Country::common_name).collect();
    Ok(text(query::format_list(&names, "; ")))
}

#[utoipa::path(
    get,
    path = "/countries/{substring}/mostPopulousWithPopulation",
    params(("substring" = String, Path, description = "Substring to match in country names")),
    responses(
        (status = 200, description = "Matching 'Name (Population)' entries, population-descending", body = String),
        (status = 400, description = "Empty substring", body = ApiError),
        (status = 404, description = "No matching countries", body = ApiError)
    )
)]
#[get("/countries/{substring}/mostPopulousWithPopulation")]
async fn most_populous_with_population(
    client: web::Data<Client>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let substring = path.into_inner();
    let countries = fetch_all(&client).await?;
    let ranked = query::sort_by_population_desc(query::filter_by_substring(countries, &substring)?);
    if ranked.is_empty() {
        return Err(Error::NotFound.into());
    }
    let entries: Vec<String> = ranked.iter().map(query::format_with_population).collect();
    Ok(text(query::format_list(&entries, "; ")))
}

#[derive(Debug, Deserialize, IntoParams)]
struct SortQuery {
    /// One of `population`, `name`, `area`; anything else keeps upstream order.
    #[serde(rename = "sortBy")]
    sort_by: Option<String>,
}

#[utoipa::path(
    get,
    path = "/countries/region/{region}/countries",
    params(
        ("region" = String, Path, description = "Region name, e.g. Europe"),
        SortQuery
    ),
    responses(
        (status = 200, description = "Common names of the region's countries", body = [String]),
        (status = 404, description = "No countries in that region", body = ApiError)
    )
)]
#[get("/countries/region/{region}/countries")]
async fn region_countries(
    client: web::Data<Client>,
    path: web::Path<String>,
    sort: web::Query<SortQuery>,
) -> Result<HttpResponse, ApiError> {
    let region = path.into_inner();
    let countries = fetch_all(&client).await?;
    let in_region = aggregate::filter_by_region(countries, &region);
    if in_region.is_empty() {
        return Err(Error::NotFound.into());
    }
    let sorted = match sort
        .sort_by
        .as_deref()
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("population") => query::sort_by_population_desc(in_region),
        Some("name") => query::sort_by_name_asc(in_region),
        Some("area") => query::sort_by_area_desc(in_region),
        _ => in_region,
    };
    let names: Vec<&str> = sorted.iter().map(Country::common_name).collect();
    Ok(HttpResponse::Ok().json(names))
}

#[derive(Debug, Deserialize, IntoParams)]
struct FormatQuery {
    /// `pretty` renders numbers as comma-grouped decimal strings.
    format: Option<String>,
}

#[utoipa::path(
    get,
    path = "/countries/region/{region}/statistics",
    params(
        ("region" = String, Path, description = "Region name, e.g. Europe"),
        FormatQuery
    ),
    responses(
        (status = 200, description = "Region statistics", body = aggregate::RegionStatistics),
        (status = 400, description = "Statistics not computable", body = ApiError),
        (status = 404, description = "No countries in that region", body = ApiError)
    )
)]
#[get("/countries/region/{region}/statistics")]
async fn region_statistics(
    client: web::Data<Client>,
    path: web::Path<String>,
    format: web::Query<FormatQuery>,
) -> Result<HttpResponse, ApiError> {
    let region = path.into_inner();
    let countries = fetch_all(&client).await?;
    let stats = aggregate::region_statistics(&aggregate::filter_by_region(countries, &region))?;
    if format.format.as_deref() == Some("pretty") {
        return Ok(HttpResponse::Ok().json(aggregate::pretty_statistics(&stats)));
    }
    Ok(HttpResponse::Ok().json(stats))
}

#[utoipa::path(
    get,
    path = "/countries/compare/{country1}/{country2}",
    params(
        ("country1" = String, Path, description = "First country name"),
        ("country2" = String, Path, description = "Second country name")
    ),
    responses(
        (status = 200, description = "Pairwise comparison", body = compare::Comparison),
        (status = 400, description = "Comparison not computable", body = ApiError),
        (status = 404, description = "Either country unknown", body = ApiError)
    )
)]
#[get("/countries/compare/{country1}/{country2}")]
async fn compare_countries(
    client: web::Data<Client>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, ApiError> {
    let (name1, name2) = path.into_inner();
    info!("comparing countries {} and {}", name1, name2);
    let a = fetch_first(&client, name1).await?;
    let b = fetch_first(&client, name2).await?;
    let comparison = compare::compare(&a, &b)?;
    Ok(HttpResponse::Ok().json(comparison))
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Country Info API",
        description = "Country information service backed by restcountries.com: lookups, filtered listings, regional statistics, and pairwise comparisons."
    ),
    paths(
        country_info,
        country_flag,
        country_map,
        country_continents,
        country_borders,
        country_translation,
        country_demographics,
        most_populous,
        most_populous_with_population,
        region_countries,
        region_statistics,
        compare_countries
    ),
    components(schemas(
        ApiError,
        Country,
        Demographics,
        aggregate::FrequencyEntry,
        aggregate::RegionStatistics,
        compare::Comparison
    ))
)]
struct ApiDoc;

#[get("/api-docs/openapi.json")]
async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Mount every route on the given service config. Literal-prefixed routes
/// (`region/...`, `compare/...`) register before the generic `{name}` routes
/// so they match first.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(region_countries)
        .service(region_statistics)
        .service(compare_countries)
        .service(most_populous)
        .service(most_populous_with_population)
        .service(country_flag)
        .service(country_map)
        .service(country_continents)
        .service(country_borders)
        .service(country_translation)
        .service(country_demographics)
        .service(country_info)
        .service(openapi_json);
}

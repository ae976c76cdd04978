//! IP geolocation lookup
//!
//! Best-effort country detection for phone normalization. Any failure
//! (network, non-JSON body, empty code) falls back to a fixed country.

use serde::Deserialize;

pub const GEO_LOOKUP_URL: &str = "https://ipapi.co/json/";

/// Used whenever the lookup fails.
pub const FALLBACK_COUNTRY: &str = "NG";

#[derive(Debug, Deserialize)]
struct GeoIpResponse {
    country_code: String,
}

async fn lookup(client: &reqwest::Client, url: &str) -> Result<String, reqwest::Error> {
    let response: GeoIpResponse = client.get(url).send().await?.json().await?;
    Ok(response.country_code)
}

/// Detect the caller's country, falling back to [`FALLBACK_COUNTRY`].
pub async fn detect_country(client: &reqwest::Client) -> String {
    detect_country_at(client, GEO_LOOKUP_URL).await
}

/// Same lookup against an explicit endpoint.
pub async fn detect_country_at(client: &reqwest::Client, url: &str) -> String {
    match lookup(client, url).await {
        Ok(code) if !code.trim().is_empty() => code.trim().to_ascii_uppercase(),
        Ok(_) => {
            tracing::debug!("Geolocation returned an empty country code");
            FALLBACK_COUNTRY.to_string()
        }
        Err(e) => {
            tracing::debug!("Geolocation lookup failed: {}", e);
            FALLBACK_COUNTRY.to_string()
        }
    }
}

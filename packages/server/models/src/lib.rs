#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the fire map server.
//!
//! These types are serialized to JSON for the REST API. They are
//! separate from the database row types to allow independent evolution
//! of the API contract — in particular, the map incident record carries
//! a pre-formatted timestamp string rather than a structured datetime.

use std::collections::BTreeMap;

use fire_map_database_models::{CityStatsRow, IncidentDetailRow, LocationRow};
use fire_map_fire_models::FireStation;
use serde::{Deserialize, Serialize};

/// Timestamp format used by the incident map listing.
const MAP_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

/// A location record as returned by the home listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiLocation {
    /// Unique location ID.
    pub id: i64,
    /// Location name.
    pub name: String,
    /// City.
    pub city: String,
    /// Country.
    pub country: String,
    /// Street address.
    pub address: String,
    /// Latitude.
    pub latitude: f64,
    /// Longitude.
    pub longitude: f64,
}

impl From<LocationRow> for ApiLocation {
    fn from(row: LocationRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            city: row.city,
            country: row.country,
            address: row.address,
            latitude: row.latitude,
            longitude: row.longitude,
        }
    }
}

/// A fire station as returned by the station roster endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiStation {
    /// Station name.
    pub name: String,
    /// Latitude.
    pub latitude: f64,
    /// Longitude.
    pub longitude: f64,
    /// Street address or landmark description.
    pub address: String,
    /// Contact phone number.
    pub phone: String,
    /// Coverage area label.
    pub coverage: String,
}

impl From<&FireStation> for ApiStation {
    fn from(station: &FireStation) -> Self {
        Self {
            name: station.name.to_string(),
            latitude: station.latitude,
            longitude: station.longitude,
            address: station.address.to_string(),
            phone: station.phone.to_string(),
            coverage: station.coverage.to_string(),
        }
    }
}

/// Query parameters for the incident map endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapQueryParams {
    /// City to filter the incident listing by. Absent or empty means no
    /// filter.
    pub city: Option<String>,
}

/// An incident record as displayed on the incident map.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiMapIncident {
    /// Latitude.
    pub latitude: f64,
    /// Longitude.
    pub longitude: f64,
    /// Severity label.
    pub severity_level: String,
    /// Timestamp formatted as `YYYY-MM-DD HH:MM:SS`.
    pub date_time: String,
    /// City.
    pub city: String,
    /// Address.
    pub address: String,
    /// Free-text description.
    pub description: Option<String>,
}

impl From<IncidentDetailRow> for ApiMapIncident {
    fn from(row: IncidentDetailRow) -> Self {
        Self {
            latitude: row.latitude,
            longitude: row.longitude,
            severity_level: row.severity_level,
            date_time: row.date_time.format(MAP_TIMESTAMP_FORMAT).to_string(),
            city: row.city,
            address: row.address,
            description: row.description,
        }
    }
}

/// Per-city summary statistics shown alongside the incident map.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCityStats {
    /// Total incidents in this city.
    pub total: u64,
    /// Incidents classified "Minor Fire".
    pub minor: u64,
    /// Incidents classified "Moderate Fire".
    pub moderate: u64,
    /// Incidents classified "Major Fire".
    pub major: u64,
}

impl From<CityStatsRow> for ApiCityStats {
    fn from(row: CityStatsRow) -> Self {
        Self {
            total: row.total,
            minor: row.minor,
            moderate: row.moderate,
            major: row.major,
        }
    }
}

/// Response from the incident map endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapIncidentsResponse {
    /// Incident records, filtered to the selected city when one was
    /// given, most recent first.
    pub incidents: Vec<ApiMapIncident>,
    /// All cities with at least one incident, sorted, regardless of the
    /// filter.
    pub cities: Vec<String>,
    /// The city filter that was applied, if any.
    pub selected_city: Option<String>,
    /// Per-city statistics for every city in `cities`.
    pub city_stats: BTreeMap<String, ApiCityStats>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn map_incident_formats_timestamp() {
        let row = IncidentDetailRow {
            latitude: 9.74,
            longitude: 118.73,
            severity_level: "Minor Fire".to_string(),
            date_time: NaiveDate::from_ymd_opt(2026, 3, 5)
                .unwrap()
                .and_hms_opt(14, 30, 9)
                .unwrap(),
            city: "Puerto Princesa".to_string(),
            address: "Rizal Avenue".to_string(),
            description: Some("Kitchen fire".to_string()),
        };

        let incident = ApiMapIncident::from(row);
        assert_eq!(incident.date_time, "2026-03-05 14:30:09");
        assert_eq!(incident.severity_level, "Minor Fire");
        assert_eq!(incident.city, "Puerto Princesa");
    }

    #[test]
    fn station_conversion_preserves_roster_fields() {
        let station = &fire_map_fire_models::STATIONS[0];
        let api = ApiStation::from(station);
        assert_eq!(api.name, station.name);
        assert_eq!(api.phone, station.phone);
        assert!((api.latitude - station.latitude).abs() < f64::EPSILON);
    }
}

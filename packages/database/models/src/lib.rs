#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Database row types for fire incident queries.
//!
//! These types represent the shapes of data as retrieved from the
//! relational store. They are distinct from the API response types in
//! `fire_map_server_models`, which are shaped for the chart and map
//! frontend.
//!
//! Severity labels are carried as strings here: the aggregation queries
//! pass whatever `severity_level` value is persisted straight through to
//! the grouping key, rather than forcing it into the closed vocabulary.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A location row from the `fire_locations` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRow {
    /// Primary key.
    pub id: i64,
    /// Location name.
    pub name: String,
    /// City.
    pub city: String,
    /// Country.
    pub country: String,
    /// Street address.
    pub address: String,
    /// Latitude (WGS84).
    pub latitude: f64,
    /// Longitude (WGS84).
    pub longitude: f64,
}

/// An incident joined with its location, as listed on the incident map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentDetailRow {
    /// Latitude of the incident's location (WGS84).
    pub latitude: f64,
    /// Longitude of the incident's location (WGS84).
    pub longitude: f64,
    /// Severity label as persisted.
    pub severity_level: String,
    /// When the incident occurred.
    pub date_time: NaiveDateTime,
    /// City of the incident's location.
    pub city: String,
    /// Address of the incident's location.
    pub address: String,
    /// Free-text description.
    pub description: Option<String>,
}

/// Incident count for a single severity label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCountRow {
    /// Severity label as persisted.
    pub severity_level: String,
    /// Number of incidents.
    pub count: u64,
}

/// Incident count for a single calendar month (1-12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthCountRow {
    /// 1-based month number.
    pub month: u32,
    /// Number of incidents.
    pub count: u64,
}

/// Incident count for a country and calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryMonthCountRow {
    /// Country name.
    pub country: String,
    /// 1-based month number.
    pub month: u32,
    /// Number of incidents.
    pub count: u64,
}

/// Incident count for a severity label and calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityMonthCountRow {
    /// Severity label as persisted.
    pub severity_level: String,
    /// 1-based month number.
    pub month: u32,
    /// Number of incidents.
    pub count: u64,
}

/// Per-city incident totals broken down by the three severity
/// categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityStatsRow {
    /// City name.
    pub city: String,
    /// Total incidents in this city.
    pub total: u64,
    /// Incidents classified "Minor Fire".
    pub minor: u64,
    /// Incidents classified "Moderate Fire".
    pub moderate: u64,
    /// Incidents classified "Major Fire".
    pub major: u64,
}

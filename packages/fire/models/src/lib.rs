#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Fire incident severity vocabulary and the fire station roster.
//!
//! This crate defines the closed severity classification used as a
//! grouping key across the fire-map system, the calendar helpers shared
//! by the chart queries, and the compiled-in fire station roster shown
//! on the station map.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Severity classification for a fire incident.
///
/// The database stores these as their display strings (e.g.
/// `"Minor Fire"`), so [`Display`] and [`std::str::FromStr`] round-trip
/// through the exact persisted form.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum SeverityLevel {
    /// Small fire contained quickly with minimal damage
    #[serde(rename = "Minor Fire")]
    #[strum(serialize = "Minor Fire")]
    MinorFire,
    /// Fire requiring a multi-unit response
    #[serde(rename = "Moderate Fire")]
    #[strum(serialize = "Moderate Fire")]
    ModerateFire,
    /// Large fire with significant damage or casualties
    #[serde(rename = "Major Fire")]
    #[strum(serialize = "Major Fire")]
    MajorFire,
}

impl SeverityLevel {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::MinorFire, Self::ModerateFire, Self::MajorFire]
    }
}

/// Three-letter abbreviations for months 1-12, in calendar order.
pub const MONTH_ABBREVS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Returns the three-letter abbreviation for a 1-based month number, or
/// `None` if the month is out of range.
#[must_use]
pub fn month_abbrev(month: u32) -> Option<&'static str> {
    let idx = usize::try_from(month.checked_sub(1)?).ok()?;
    MONTH_ABBREVS.get(idx).copied()
}

/// A fire station record.
///
/// Stations are compiled-in configuration, not database rows — the
/// roster is fixed and never derived from incident data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FireStation {
    /// Station name.
    pub name: &'static str,
    /// Latitude (WGS84).
    pub latitude: f64,
    /// Longitude (WGS84).
    pub longitude: f64,
    /// Street address or landmark description.
    pub address: &'static str,
    /// Contact phone number.
    pub phone: &'static str,
    /// Coverage area label.
    pub coverage: &'static str,
}

/// The fixed station roster displayed on the station map.
pub const STATIONS: [FireStation; 3] = [
    FireStation {
        name: "Sta. Lourdes Fire Station",
        latitude: 9.83369118406607,
        longitude: 118.72275445554,
        address: "Near Sta. Lourdes National High School",
        phone: "(048) 434-7701",
        coverage: "Sta. Lourdes Area",
    },
    FireStation {
        name: "Tagburos Fire Station",
        latitude: 9.82084079557777,
        longitude: 118.74401369655,
        address: "Near Tagburos Elementary School",
        phone: "(048) 434-7702",
        coverage: "Tagburos Area",
    },
    FireStation {
        name: "Sicsican Fire Station",
        latitude: 9.79555573875096,
        longitude: 118.710565836493,
        address: "Near Sicsican Elementary",
        phone: "(048) 434-7703",
        coverage: "Sicsican Area",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_display_roundtrip() {
        for level in SeverityLevel::all() {
            let s = level.to_string();
            assert_eq!(s.parse::<SeverityLevel>().unwrap(), *level);
        }
    }

    #[test]
    fn severity_display_matches_stored_form() {
        assert_eq!(SeverityLevel::MinorFire.to_string(), "Minor Fire");
        assert_eq!(SeverityLevel::ModerateFire.to_string(), "Moderate Fire");
        assert_eq!(SeverityLevel::MajorFire.to_string(), "Major Fire");
    }

    #[test]
    fn month_abbrev_covers_calendar() {
        assert_eq!(month_abbrev(1), Some("Jan"));
        assert_eq!(month_abbrev(12), Some("Dec"));
        assert_eq!(month_abbrev(0), None);
        assert_eq!(month_abbrev(13), None);
    }

    #[test]
    fn roster_has_exactly_three_stations() {
        assert_eq!(STATIONS.len(), 3);
        for station in &STATIONS {
            assert!(!station.name.is_empty());
            assert!(!station.phone.is_empty());
        }
    }
}

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Chart data reshaping for fire incident aggregates.
//!
//! Turns grouped query rows into the mapping structures the chart
//! frontend consumes. The zero-fill policies live here: a complete
//! ordered key set is built for the domain (months 1-12), then observed
//! counts are merged in, defaulting absent keys to zero. The severity
//! pie is the one exception — it only reports severities present in the
//! data.
//!
//! Everything in this crate is pure; query execution stays in
//! `fire_map_database`.

use std::collections::BTreeMap;

use fire_map_database_models::{
    CityStatsRow, CountryMonthCountRow, MonthCountRow, SeverityCountRow, SeverityMonthCountRow,
};
use fire_map_fire_models::MONTH_ABBREVS;
use serde_json::{Map, Value};

/// Number of top countries the multiline chart always displays.
pub const TOP_COUNTRY_COUNT: usize = 3;

/// Formats a 1-based month number as the zero-padded key used by the
/// breakdown charts (`"01"`..`"12"`).
#[must_use]
pub fn month_key(month: u32) -> String {
    format!("{month:02}")
}

/// Builds the complete month key set `"01"`..`"12"`, all zero.
fn zero_month_map() -> BTreeMap<String, u64> {
    (1..=12).map(|m| (month_key(m), 0)).collect()
}

/// Reshapes severity counts into the pie chart mapping.
///
/// Contains only severities actually present in the data — an empty
/// store yields an empty mapping, not a zero-filled one.
#[must_use]
pub fn severity_distribution(rows: &[SeverityCountRow]) -> BTreeMap<String, u64> {
    rows.iter()
        .map(|row| (row.severity_level.clone(), row.count))
        .collect()
}

/// Reshapes per-month counts into the line chart mapping, keyed by
/// three-letter month abbreviation in calendar order.
///
/// Every month 1-12 appears, zero-filled when absent from the input.
/// Returns a `serde_json::Map` so the Jan→Dec insertion order survives
/// serialization.
#[must_use]
pub fn monthly_trend(rows: &[MonthCountRow]) -> Map<String, Value> {
    let observed: BTreeMap<u32, u64> = rows.iter().map(|row| (row.month, row.count)).collect();

    MONTH_ABBREVS
        .iter()
        .enumerate()
        .map(|(i, abbrev)| {
            let month = u32::try_from(i).unwrap_or(0) + 1;
            let count = observed.get(&month).copied().unwrap_or(0);
            ((*abbrev).to_string(), Value::from(count))
        })
        .collect()
}

/// Reshapes country/month counts into the multiline chart mapping:
/// country → zero-padded month key → count, zero-filled for all twelve
/// months.
///
/// The result is padded with placeholder `"Country N"` entries (all-zero
/// month maps) until exactly [`TOP_COUNTRY_COUNT`] countries are
/// present. The frontend renders a fixed number of series, so the
/// cardinality guarantee is part of the contract.
#[must_use]
pub fn country_month_breakdown(
    rows: &[CountryMonthCountRow],
) -> BTreeMap<String, BTreeMap<String, u64>> {
    let mut result: BTreeMap<String, BTreeMap<String, u64>> = BTreeMap::new();

    for row in rows {
        let months = result
            .entry(row.country.clone())
            .or_insert_with(zero_month_map);
        if let Some(slot) = months.get_mut(&month_key(row.month)) {
            *slot = row.count;
        }
    }

    while result.len() < TOP_COUNTRY_COUNT {
        result.insert(format!("Country {}", result.len() + 1), zero_month_map());
    }

    result
}

/// Reshapes severity/month counts into the multi-bar chart mapping:
/// severity label → zero-padded month key → count, zero-filled for all
/// twelve months within each severity.
#[must_use]
pub fn severity_month_breakdown(
    rows: &[SeverityMonthCountRow],
) -> BTreeMap<String, BTreeMap<String, u64>> {
    let mut result: BTreeMap<String, BTreeMap<String, u64>> = BTreeMap::new();

    for row in rows {
        let months = result
            .entry(row.severity_level.clone())
            .or_insert_with(zero_month_map);
        if let Some(slot) = months.get_mut(&month_key(row.month)) {
            *slot = row.count;
        }
    }

    result
}

/// Keys per-city stats by city name, guaranteeing an entry for every
/// city in `cities` even when the grouped query returned no row for it.
///
/// Stats always cover the full city list regardless of any map filter —
/// the sidebar shows all cities while the map shows one. The city list
/// is authoritative: rows for cities outside it (e.g. an empty-string
/// city the list excludes) are dropped.
#[must_use]
pub fn city_stats_by_city(
    cities: &[String],
    rows: Vec<CityStatsRow>,
) -> BTreeMap<String, CityStatsRow> {
    let mut result: BTreeMap<String, CityStatsRow> = cities
        .iter()
        .map(|city| {
            (
                city.clone(),
                CityStatsRow {
                    city: city.clone(),
                    total: 0,
                    minor: 0,
                    moderate: 0,
                    major: 0,
                },
            )
        })
        .collect();

    for row in rows {
        if let Some(entry) = result.get_mut(&row.city) {
            *entry = row;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month_keys() -> Vec<String> {
        (1..=12).map(month_key).collect()
    }

    #[test]
    fn severity_distribution_reports_only_observed() {
        let rows = vec![
            SeverityCountRow {
                severity_level: "Minor Fire".to_string(),
                count: 2,
            },
            SeverityCountRow {
                severity_level: "Major Fire".to_string(),
                count: 1,
            },
        ];

        let dist = severity_distribution(&rows);
        assert_eq!(dist.len(), 2);
        assert_eq!(dist["Minor Fire"], 2);
        assert_eq!(dist["Major Fire"], 1);
        assert!(!dist.contains_key("Moderate Fire"));
    }

    #[test]
    fn severity_distribution_empty_input_is_empty() {
        assert!(severity_distribution(&[]).is_empty());
    }

    #[test]
    fn monthly_trend_zero_fills_all_months_in_order() {
        let trend = monthly_trend(&[]);
        let keys: Vec<&str> = trend.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ]
        );
        assert!(trend.values().all(|v| v == &Value::from(0u64)));
    }

    #[test]
    fn monthly_trend_merges_observed_counts() {
        let rows = vec![
            MonthCountRow { month: 3, count: 2 },
            MonthCountRow { month: 11, count: 5 },
        ];

        let trend = monthly_trend(&rows);
        assert_eq!(trend["Mar"], Value::from(2u64));
        assert_eq!(trend["Nov"], Value::from(5u64));
        assert_eq!(trend["Jan"], Value::from(0u64));
        assert_eq!(trend.len(), 12);
    }

    #[test]
    fn country_breakdown_pads_to_three_countries() {
        let rows = vec![CountryMonthCountRow {
            country: "Philippines".to_string(),
            month: 4,
            count: 7,
        }];

        let breakdown = country_month_breakdown(&rows);
        assert_eq!(breakdown.len(), 3);
        assert!(breakdown.contains_key("Philippines"));
        assert!(breakdown.contains_key("Country 2"));
        assert!(breakdown.contains_key("Country 3"));

        assert_eq!(breakdown["Philippines"]["04"], 7);
        assert!(breakdown["Country 2"].values().all(|&c| c == 0));
        assert!(breakdown["Country 3"].values().all(|&c| c == 0));
    }

    #[test]
    fn country_breakdown_empty_input_is_all_placeholders() {
        let breakdown = country_month_breakdown(&[]);
        let keys: Vec<&str> = breakdown.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Country 1", "Country 2", "Country 3"]);
    }

    #[test]
    fn country_breakdown_month_keys_are_zero_padded_and_sorted() {
        let rows = vec![CountryMonthCountRow {
            country: "Philippines".to_string(),
            month: 12,
            count: 1,
        }];

        let breakdown = country_month_breakdown(&rows);
        let keys: Vec<String> = breakdown["Philippines"].keys().cloned().collect();
        assert_eq!(keys, month_keys());
    }

    #[test]
    fn severity_breakdown_zero_fills_per_severity() {
        let rows = vec![
            SeverityMonthCountRow {
                severity_level: "Minor Fire".to_string(),
                month: 3,
                count: 2,
            },
            SeverityMonthCountRow {
                severity_level: "Major Fire".to_string(),
                month: 3,
                count: 1,
            },
        ];

        let breakdown = severity_month_breakdown(&rows);
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown["Minor Fire"]["03"], 2);
        assert_eq!(breakdown["Major Fire"]["03"], 1);

        for months in breakdown.values() {
            let keys: Vec<String> = months.keys().cloned().collect();
            assert_eq!(keys, month_keys());
            assert_eq!(months.values().sum::<u64>(), months["03"]);
        }
    }

    #[test]
    fn severity_breakdown_ignores_out_of_range_months() {
        let rows = vec![SeverityMonthCountRow {
            severity_level: "Minor Fire".to_string(),
            month: 0,
            count: 9,
        }];

        let breakdown = severity_month_breakdown(&rows);
        assert!(breakdown["Minor Fire"].values().all(|&c| c == 0));
    }

    #[test]
    fn city_stats_cover_every_city() {
        let cities = vec!["A".to_string(), "B".to_string()];
        let rows = vec![CityStatsRow {
            city: "A".to_string(),
            total: 3,
            minor: 2,
            moderate: 0,
            major: 1,
        }];

        let stats = city_stats_by_city(&cities, rows);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats["A"].total, 3);
        assert_eq!(stats["A"].minor, 2);
        assert_eq!(stats["A"].major, 1);
        assert_eq!(stats["B"].total, 0);
    }

    #[test]
    fn city_stats_drop_rows_outside_city_list() {
        let cities = vec!["A".to_string()];
        let rows = vec![
            CityStatsRow {
                city: "A".to_string(),
                total: 1,
                minor: 1,
                moderate: 0,
                major: 0,
            },
            CityStatsRow {
                city: String::new(),
                total: 2,
                minor: 0,
                moderate: 2,
                major: 0,
            },
        ];

        let stats = city_stats_by_city(&cities, rows);
        assert_eq!(stats.len(), 1);
        assert!(!stats.contains_key(""));
        assert_eq!(stats["A"].total, 1);
    }
}

//! Read-only aggregation queries over fire incident data.
//!
//! All queries use `query_raw_params()` with positional parameters and
//! decode rows through `moosicbox_json_utils`. Month numbers are
//! extracted in SQL (`EXTRACT(MONTH ...)`) so the reshaping layer only
//! ever sees grouped counts, never raw timestamps.

use fire_map_database_models::{
    CityStatsRow, CountryMonthCountRow, IncidentDetailRow, LocationRow, MonthCountRow,
    SeverityCountRow, SeverityMonthCountRow,
};
use fire_map_fire_models::SeverityLevel;
use moosicbox_json_utils::database::ToValue as _;
use switchy_database::{Database, DatabaseValue, Row};

use crate::DbError;

/// Decodes the `month` and `count` columns shared by the month-bucketed
/// aggregation queries. A count that fails to decode is an error, not a
/// zero — a silently defaulted aggregate would render a wrong chart.
fn decode_month_count(row: &Row) -> Result<(u32, u64), DbError> {
    let month: i32 = row.to_value("month").map_err(|e| DbError::Conversion {
        message: format!("Failed to parse month: {e}"),
    })?;
    let count: i64 = row.to_value("count").map_err(|e| DbError::Conversion {
        message: format!("Failed to parse incident count: {e}"),
    })?;

    #[allow(clippy::cast_sign_loss)]
    Ok((u32::try_from(month).unwrap_or(0), count as u64))
}

/// Returns all location records for the home listing.
///
/// # Errors
///
/// Returns [`DbError`] if the database operation fails.
pub async fn list_locations(db: &dyn Database) -> Result<Vec<LocationRow>, DbError> {
    let rows = db
        .query_raw_params(
            "SELECT id, name, city, country, address, latitude, longitude
             FROM fire_locations
             ORDER BY id",
            &[],
        )
        .await?;

    Ok(rows
        .iter()
        .map(|row| LocationRow {
            id: row.to_value("id").unwrap_or(0),
            name: row.to_value("name").unwrap_or_default(),
            city: row.to_value("city").unwrap_or_default(),
            country: row.to_value("country").unwrap_or_default(),
            address: row.to_value("address").unwrap_or_default(),
            latitude: row.to_value("latitude").unwrap_or(0.0),
            longitude: row.to_value("longitude").unwrap_or(0.0),
        })
        .collect())
}

/// Counts incidents grouped by severity label, over all time.
///
/// Only severities actually present in the data are returned — the
/// severity pie deliberately has no zero-fill.
///
/// # Errors
///
/// Returns [`DbError`] if the database operation fails or a count
/// column cannot be decoded.
pub async fn count_by_severity(db: &dyn Database) -> Result<Vec<SeverityCountRow>, DbError> {
    let rows = db
        .query_raw_params(
            "SELECT severity_level, COUNT(*) as count
             FROM fire_incidents
             GROUP BY severity_level",
            &[],
        )
        .await?;

    let mut counts = Vec::with_capacity(rows.len());
    for row in &rows {
        let count: i64 = row.to_value("count").map_err(|e| DbError::Conversion {
            message: format!("Failed to parse severity count: {e}"),
        })?;
        counts.push(SeverityCountRow {
            severity_level: row.to_value("severity_level").unwrap_or_default(),
            #[allow(clippy::cast_sign_loss)]
            count: count as u64,
        });
    }

    Ok(counts)
}

/// Counts incidents of the given calendar year grouped by month.
///
/// Months without incidents are absent from the result; zero-filling is
/// the reshaping layer's job.
///
/// # Errors
///
/// Returns [`DbError`] if the database operation fails or a month or
/// count column cannot be decoded.
pub async fn count_by_month(db: &dyn Database, year: i32) -> Result<Vec<MonthCountRow>, DbError> {
    let rows = db
        .query_raw_params(
            "SELECT EXTRACT(MONTH FROM date_time)::int as month, COUNT(*) as count
             FROM fire_incidents
             WHERE EXTRACT(YEAR FROM date_time) = $1
             GROUP BY month
             ORDER BY month",
            &[DatabaseValue::Int32(year)],
        )
        .await?;

    let mut counts = Vec::with_capacity(rows.len());
    for row in &rows {
        let (month, count) = decode_month_count(row)?;
        counts.push(MonthCountRow { month, count });
    }

    Ok(counts)
}

/// Counts incidents of the given calendar year grouped by country and
/// month, limited to the 3 countries with the most incidents that year.
///
/// The subquery ranks countries by incident count descending before the
/// outer query buckets the survivors by month.
///
/// # Errors
///
/// Returns [`DbError`] if the database operation fails or a month or
/// count column cannot be decoded.
pub async fn count_by_country_month(
    db: &dyn Database,
    year: i32,
) -> Result<Vec<CountryMonthCountRow>, DbError> {
    let rows = db
        .query_raw_params(
            "SELECT l.country,
                    EXTRACT(MONTH FROM i.date_time)::int as month,
                    COUNT(i.id) as count
             FROM fire_incidents i
             JOIN fire_locations l ON i.location_id = l.id
             WHERE l.country IN (
                 SELECT lt.country
                 FROM fire_incidents it
                 JOIN fire_locations lt ON it.location_id = lt.id
                 WHERE EXTRACT(YEAR FROM it.date_time) = $1
                 GROUP BY lt.country
                 ORDER BY COUNT(it.id) DESC
                 LIMIT 3
             )
             AND EXTRACT(YEAR FROM i.date_time) = $1
             GROUP BY l.country, month
             ORDER BY l.country, month",
            &[DatabaseValue::Int32(year)],
        )
        .await?;

    let mut counts = Vec::with_capacity(rows.len());
    for row in &rows {
        let (month, count) = decode_month_count(row)?;
        counts.push(CountryMonthCountRow {
            country: row.to_value("country").unwrap_or_default(),
            month,
            count,
        });
    }

    Ok(counts)
}

/// Counts incidents grouped by severity label and month, over all time.
///
/// # Errors
///
/// Returns [`DbError`] if the database operation fails or a month or
/// count column cannot be decoded.
pub async fn count_by_severity_month(
    db: &dyn Database,
) -> Result<Vec<SeverityMonthCountRow>, DbError> {
    let rows = db
        .query_raw_params(
            "SELECT severity_level,
                    EXTRACT(MONTH FROM date_time)::int as month,
                    COUNT(*) as count
             FROM fire_incidents
             GROUP BY severity_level, month
             ORDER BY severity_level, month",
            &[],
        )
        .await?;

    let mut counts = Vec::with_capacity(rows.len());
    for row in &rows {
        let (month, count) = decode_month_count(row)?;
        counts.push(SeverityMonthCountRow {
            severity_level: row.to_value("severity_level").unwrap_or_default(),
            month,
            count,
        });
    }

    Ok(counts)
}

/// Returns all distinct cities that have at least one incident, sorted
/// ascending.
///
/// # Errors
///
/// Returns [`DbError`] if the database operation fails.
pub async fn list_incident_cities(db: &dyn Database) -> Result<Vec<String>, DbError> {
    let rows = db
        .query_raw_params(
            "SELECT DISTINCT l.city
             FROM fire_incidents i
             JOIN fire_locations l ON i.location_id = l.id
             WHERE l.city IS NOT NULL AND l.city != ''
             ORDER BY l.city",
            &[],
        )
        .await?;

    Ok(rows
        .iter()
        .map(|row| row.to_value("city").unwrap_or_default())
        .collect())
}

/// Computes per-city incident totals with a breakdown by the three
/// severity categories, for every city with incidents.
///
/// Uses conditional aggregation (`COUNT FILTER`) so all cities are
/// covered in a single table scan instead of one query per city.
///
/// # Errors
///
/// Returns [`DbError`] if the database operation fails or a count
/// column cannot be decoded.
pub async fn city_stats(db: &dyn Database) -> Result<Vec<CityStatsRow>, DbError> {
    let rows = db
        .query_raw_params(
            "SELECT l.city,
                    COUNT(*) as total,
                    COUNT(*) FILTER (WHERE i.severity_level = $1) as minor,
                    COUNT(*) FILTER (WHERE i.severity_level = $2) as moderate,
                    COUNT(*) FILTER (WHERE i.severity_level = $3) as major
             FROM fire_incidents i
             JOIN fire_locations l ON i.location_id = l.id
             GROUP BY l.city
             ORDER BY l.city",
            &[
                DatabaseValue::String(SeverityLevel::MinorFire.to_string()),
                DatabaseValue::String(SeverityLevel::ModerateFire.to_string()),
                DatabaseValue::String(SeverityLevel::MajorFire.to_string()),
            ],
        )
        .await?;

    let mut stats = Vec::with_capacity(rows.len());
    for row in &rows {
        let total = decode_count(row, "total")?;
        let minor = decode_count(row, "minor")?;
        let moderate = decode_count(row, "moderate")?;
        let major = decode_count(row, "major")?;
        stats.push(CityStatsRow {
            city: row.to_value("city").unwrap_or_default(),
            total,
            minor,
            moderate,
            major,
        });
    }

    Ok(stats)
}

/// Decodes a single aggregate count column.
fn decode_count(row: &Row, column: &str) -> Result<u64, DbError> {
    let count: i64 = row.to_value(column).map_err(|e| DbError::Conversion {
        message: format!("Failed to parse {column} count: {e}"),
    })?;

    #[allow(clippy::cast_sign_loss)]
    Ok(count as u64)
}

/// Lists incidents joined with their locations, most recent first,
/// optionally filtered to a single city.
///
/// # Errors
///
/// Returns [`DbError`] if the database operation fails.
pub async fn query_incident_details(
    db: &dyn Database,
    city: Option<&str>,
) -> Result<Vec<IncidentDetailRow>, DbError> {
    let base = "SELECT l.latitude, l.longitude, i.severity_level, i.date_time,
                       l.city, l.address, i.description
                FROM fire_incidents i
                JOIN fire_locations l ON i.location_id = l.id";

    let rows = if let Some(city) = city {
        db.query_raw_params(
            &format!("{base} WHERE l.city = $1 ORDER BY i.date_time DESC"),
            &[DatabaseValue::String(city.to_string())],
        )
        .await?
    } else {
        db.query_raw_params(&format!("{base} ORDER BY i.date_time DESC"), &[])
            .await?
    };

    Ok(rows
        .iter()
        .map(|row| IncidentDetailRow {
            latitude: row.to_value("latitude").unwrap_or(0.0),
            longitude: row.to_value("longitude").unwrap_or(0.0),
            severity_level: row.to_value("severity_level").unwrap_or_default(),
            date_time: row.to_value("date_time").unwrap_or_default(),
            city: row.to_value("city").unwrap_or_default(),
            address: row.to_value("address").unwrap_or_default(),
            description: row.to_value("description").unwrap_or(None),
        })
        .collect())
}

//! HTTP handler functions for the fire map API.

use actix_web::{HttpResponse, web};
use chrono::Datelike as _;
use fire_map_database::{DbError, queries};
use fire_map_fire_models::STATIONS;
use fire_map_server_models::{
    ApiHealth, ApiLocation, ApiMapIncident, ApiStation, MapIncidentsResponse, MapQueryParams,
};
use switchy_database::Database;

use crate::AppState;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/locations`
///
/// Returns all location records for the home listing.
pub async fn locations(state: web::Data<AppState>) -> HttpResponse {
    match queries::list_locations(state.db.as_ref()).await {
        Ok(rows) => {
            let locations: Vec<ApiLocation> = rows.into_iter().map(ApiLocation::from).collect();
            HttpResponse::Ok().json(locations)
        }
        Err(e) => {
            log::error!("Failed to query locations: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to query locations"
            }))
        }
    }
}

/// `GET /api/charts/severity`
///
/// Incident counts grouped by severity label, for the pie chart. Only
/// severities present in the data appear.
pub async fn chart_severity(state: web::Data<AppState>) -> HttpResponse {
    match queries::count_by_severity(state.db.as_ref()).await {
        Ok(rows) => HttpResponse::Ok().json(fire_map_reports::severity_distribution(&rows)),
        Err(e) => {
            log::error!("Failed to query severity distribution: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to query severity distribution"
            }))
        }
    }
}

/// `GET /api/charts/monthly`
///
/// Current-year incident counts per month for the line chart, keyed by
/// month abbreviation and zero-filled so all twelve months appear.
pub async fn chart_monthly(state: web::Data<AppState>) -> HttpResponse {
    let year = chrono::Utc::now().year();

    match queries::count_by_month(state.db.as_ref(), year).await {
        Ok(rows) => HttpResponse::Ok().json(fire_map_reports::monthly_trend(&rows)),
        Err(e) => {
            log::error!("Failed to query monthly trend: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to query monthly trend"
            }))
        }
    }
}

/// `GET /api/charts/top-countries`
///
/// Per-month current-year incident counts for the 3 countries with the
/// most incidents, padded with placeholder entries so the multiline
/// chart always gets exactly 3 series.
pub async fn chart_top_countries(state: web::Data<AppState>) -> HttpResponse {
    let year = chrono::Utc::now().year();

    match queries::count_by_country_month(state.db.as_ref(), year).await {
        Ok(rows) => HttpResponse::Ok().json(fire_map_reports::country_month_breakdown(&rows)),
        Err(e) => {
            log::error!("Failed to query top-country breakdown: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to query top-country breakdown"
            }))
        }
    }
}

/// `GET /api/charts/severity-monthly`
///
/// All-time incident counts grouped by severity and month for the
/// multi-bar chart, zero-filled per severity.
pub async fn chart_severity_monthly(state: web::Data<AppState>) -> HttpResponse {
    match queries::count_by_severity_month(state.db.as_ref()).await {
        Ok(rows) => HttpResponse::Ok().json(fire_map_reports::severity_month_breakdown(&rows)),
        Err(e) => {
            log::error!("Failed to query severity-by-month breakdown: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to query severity-by-month breakdown"
            }))
        }
    }
}

/// `GET /api/stations`
///
/// Returns the fixed station roster. Never touches the store.
pub async fn stations() -> HttpResponse {
    let roster: Vec<ApiStation> = STATIONS.iter().map(ApiStation::from).collect();
    HttpResponse::Ok().json(roster)
}

/// `GET /api/map/incidents`
///
/// City-filtered incident listing with the full city list and per-city
/// stats. The stats always cover every city, not just the selected one.
pub async fn map_incidents(
    state: web::Data<AppState>,
    params: web::Query<MapQueryParams>,
) -> HttpResponse {
    let selected_city = params
        .city
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(ToString::to_string);

    match load_map_incidents(state.db.as_ref(), selected_city).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            log::error!("Failed to query incident map data: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to query incident map data"
            }))
        }
    }
}

/// Gathers the three datasets the incident map needs: the unfiltered
/// city list, the (possibly filtered) incident listing, and stats for
/// every city.
async fn load_map_incidents(
    db: &dyn Database,
    selected_city: Option<String>,
) -> Result<MapIncidentsResponse, DbError> {
    let cities = queries::list_incident_cities(db).await?;

    let detail_rows = queries::query_incident_details(db, selected_city.as_deref()).await?;
    let incidents: Vec<ApiMapIncident> =
        detail_rows.into_iter().map(ApiMapIncident::from).collect();

    let stats_rows = queries::city_stats(db).await?;
    let city_stats = fire_map_reports::city_stats_by_city(&cities, stats_rows)
        .into_iter()
        .map(|(city, stats)| (city, stats.into()))
        .collect();

    Ok(MapIncidentsResponse {
        incidents,
        cities,
        selected_city,
        city_stats,
    })
}

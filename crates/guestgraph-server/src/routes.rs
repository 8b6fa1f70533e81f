//! HTTP routes for the dashboard.

use crate::context::AppContext;
use crate::page::render_page;
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use guestgraph_common::{GuestEpisodeCount, SeasonFilter, SeasonNumber};
use guestgraph_graphs::ChartSpec;
use serde::Deserialize;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::error;

/// Query parameters shared by the chart endpoints.
#[derive(Debug, Deserialize)]
pub struct SeasonsQuery {
    /// Comma-separated season numbers; absent or empty means unfiltered.
    pub seasons: Option<String>,
}

/// Builds the application router.
pub fn router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/seasons", get(list_seasons))
        .route("/api/top-guests", get(top_guests))
        .route("/api/chart", get(chart_spec))
        .route("/chart.png", get(chart_png))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(ctx)
}

/// Parses the `seasons` query parameter into a filter.
fn parse_filter(query: &SeasonsQuery) -> Result<SeasonFilter, (StatusCode, String)> {
    let Some(raw) = query.seasons.as_deref() else {
        return Ok(SeasonFilter::all());
    };

    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<u32>().map(SeasonNumber).map_err(|_| {
                (
                    StatusCode::BAD_REQUEST,
                    format!("invalid season value: {part}"),
                )
            })
        })
        .collect()
}

async fn index(State(ctx): State<Arc<AppContext>>) -> Html<String> {
    Html(render_page(ctx.seasons()))
}

async fn list_seasons(State(ctx): State<Arc<AppContext>>) -> Json<Vec<SeasonNumber>> {
    Json(ctx.seasons().to_vec())
}

async fn top_guests(
    State(ctx): State<Arc<AppContext>>,
    Query(query): Query<SeasonsQuery>,
) -> Result<Json<Vec<GuestEpisodeCount>>, (StatusCode, String)> {
    let filter = parse_filter(&query)?;
    Ok(Json(ctx.top_guests(&filter)))
}

async fn chart_spec(
    State(ctx): State<Arc<AppContext>>,
    Query(query): Query<SeasonsQuery>,
) -> Result<Json<ChartSpec>, (StatusCode, String)> {
    let filter = parse_filter(&query)?;
    Ok(Json(ctx.chart_spec(&filter)))
}

async fn chart_png(
    State(ctx): State<Arc<AppContext>>,
    Query(query): Query<SeasonsQuery>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let filter = parse_filter(&query)?;
    let png = ctx.chart_png(&filter).map_err(|e| {
        error!(error = %e, "chart rendering failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "chart rendering failed".to_string(),
        )
    })?;

    Ok(([(header::CONTENT_TYPE, "image/png")], png))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(seasons: Option<&str>) -> SeasonsQuery {
        SeasonsQuery {
            seasons: seasons.map(str::to_string),
        }
    }

    #[test]
    fn test_absent_parameter_is_unfiltered() {
        let filter = parse_filter(&query(None)).unwrap();
        assert!(filter.is_unfiltered());
    }

    #[test]
    fn test_empty_parameter_is_unfiltered() {
        let filter = parse_filter(&query(Some(""))).unwrap();
        assert!(filter.is_unfiltered());
    }

    #[test]
    fn test_comma_separated_seasons_parse() {
        let filter = parse_filter(&query(Some("1, 3,5"))).unwrap();
        let seasons: Vec<_> = filter.seasons().iter().copied().collect();
        assert_eq!(
            seasons,
            vec![SeasonNumber(1), SeasonNumber(3), SeasonNumber(5)]
        );
    }

    #[test]
    fn test_invalid_season_is_bad_request() {
        let (status, message) = parse_filter(&query(Some("1,two"))).unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(message.contains("two"));
    }
}

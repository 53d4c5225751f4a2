//! HTTP handlers for the costar REST API.
//!
//! All graph operations delegate to [`Catalog`] methods from `costar-core`;
//! each CPU-bound query runs inside `tokio::task::spawn_blocking` so the
//! async workers stay responsive while a search walks the graph.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use costar_core::catalog::{CenterStats, LinkStep, NodeKind};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::AppState;

/// Error body returned by every failing endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable failure description.
    pub error: String,
}

/// Health probe body.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"ok"` when the server is up.
    pub status: String,
}

/// One node on a link path.
#[derive(Debug, Serialize, ToSchema)]
pub struct LinkStepResponse {
    /// Cast member or film name.
    pub name: String,
    /// `"cast"` or `"movie"`.
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<LinkStep> for LinkStepResponse {
    fn from(step: LinkStep) -> Self {
        let kind = match step.kind {
            NodeKind::Cast => "cast",
            NodeKind::Movie => "movie",
        };
        Self {
            name: step.name,
            kind: kind.to_string(),
        }
    }
}

/// Degrees-of-separation distribution around one cast member.
#[derive(Debug, Serialize, ToSchema)]
pub struct CenterResponse {
    /// Reachable cast members per degree of separation.
    pub count_by_distance: BTreeMap<u32, usize>,
    /// Every cast member in the catalog, reachable or not.
    pub total_linkable: usize,
    /// Mean degree of separation over `total_linkable`.
    pub average_distance: f64,
}

impl From<CenterStats> for CenterResponse {
    fn from(stats: CenterStats) -> Self {
        Self {
            count_by_distance: stats.count_by_distance,
            total_linkable: stats.total_linkable,
            average_distance: stats.average_distance,
        }
    }
}

/// Query parameters for `/link`.
#[derive(Debug, Deserialize, IntoParams)]
pub struct LinkParams {
    /// Source cast member name.
    pub a: Option<String>,
    /// Destination cast member name.
    pub b: Option<String>,
}

/// Query parameters for `/center`.
#[derive(Debug, Deserialize, IntoParams)]
pub struct CenterParams {
    /// Cast member to center the distribution on.
    pub p: Option<String>,
}

fn bad_request(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

fn task_panicked(err: &tokio::task::JoinError) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: format!("Task panicked: {err}"),
        }),
    )
}

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Server is up", body = HealthResponse)),
    tag = "costar"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Finds a shortest cast-film chain between two cast members.
///
/// An empty array means the two people are not connected.
///
/// # Errors
///
/// Returns 400 when a parameter is missing or a name is unknown.
#[utoipa::path(
    get,
    path = "/link",
    params(LinkParams),
    responses(
        (status = 200, description = "Chain found (possibly empty)", body = [LinkStepResponse]),
        (status = 400, description = "Missing parameter or unknown cast member", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "costar"
)]
pub async fn link(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LinkParams>,
) -> Result<Json<Vec<LinkStepResponse>>, (StatusCode, Json<ErrorResponse>)> {
    let Some(src) = params.a else {
        return Err(bad_request("a is a required query parameter"));
    };
    let Some(dest) = params.b else {
        return Err(bad_request("b is a required query parameter"));
    };

    let links = tokio::task::spawn_blocking(move || state.catalog.links(&src, &dest))
        .await
        .map_err(|err| task_panicked(&err))?
        .map_err(|err| bad_request(&err.to_string()))?;

    Ok(Json(links.into_iter().map(LinkStepResponse::from).collect()))
}

/// Computes the degrees-of-separation distribution around a cast member.
///
/// # Errors
///
/// Returns 400 when the parameter is missing and 404 when the person is not
/// in the catalog.
#[utoipa::path(
    get,
    path = "/center",
    params(CenterParams),
    responses(
        (status = 200, description = "Distribution computed", body = CenterResponse),
        (status = 400, description = "Missing required parameter", body = ErrorResponse),
        (status = 404, description = "Person not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "costar"
)]
pub async fn center(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CenterParams>,
) -> Result<Json<CenterResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Some(person) = params.p else {
        return Err(bad_request("p is a required query parameter"));
    };

    let stats = tokio::task::spawn_blocking(move || state.catalog.center(&person))
        .await
        .map_err(|err| task_panicked(&err))?
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "person not found".to_string(),
                }),
            )
        })?;

    Ok(Json(stats.into()))
}

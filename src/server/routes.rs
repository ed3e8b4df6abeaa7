//! HTTP API routes
//!
//! Defines all REST API endpoints for the server.

use crate::error::Error;
use crate::hazard::{
    Hazard, LocationSummary, NewHazard, NewLocation, NewPresentation, Presentation,
};
use crate::geo::LatLng;
use crate::server::state::AppState;

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    let static_path = state.static_dir.clone();

    Router::new()
        .route("/hazards", get(query_handler).post(create_hazard_handler))
        .route("/hazards/", get(query_handler).post(create_hazard_handler))
        .route("/hazards/search", get(search_hazards_handler))
        .route("/hazards/:id/presentations", post(add_presentation_handler))
        .route(
            "/locations",
            get(search_locations_handler).post(create_location_handler),
        )
        .route(
            "/locations/",
            get(search_locations_handler).post(create_location_handler),
        )
        .route("/location/:place_id", get(app_shell_handler))
        .nest_service(
            "/",
            ServeDir::new(&static_path)
                .append_index_html_on_directories(true)
                .not_found_service(get(|| async { Redirect::to("/") })),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let code = match &err {
            Error::InvalidCoordinates(_) => "INVALID_COORDINATES",
            Error::InvalidBoundary(_) => "INVALID_BOUNDARY",
            Error::Validation(_) => "VALIDATION_ERROR",
            Error::Store(_) => "STORE_ERROR",
            Error::Config(_) => "CONFIG_ERROR",
            _ => "INTERNAL_ERROR",
        };
        ApiError {
            error: err.to_string(),
            code: code.to_string(),
        }
    }
}

fn not_found(what: &str) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiError {
            error: what.to_string(),
            code: "NOT_FOUND".to_string(),
        }),
    )
}

fn store_error(err: Error) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiError {
            error: err.to_string(),
            code: "STORE_ERROR".to_string(),
        }),
    )
}

/// Check the bearer token on a write request
fn require_admin(state: &AppState, headers: &HeaderMap) -> Result<(), (StatusCode, Json<ApiError>)> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    if state.is_admin(bearer) {
        Ok(())
    } else {
        Err((
            StatusCode::FORBIDDEN,
            Json(ApiError {
                error: "Admin token required".to_string(),
                code: "FORBIDDEN".to_string(),
            }),
        ))
    }
}

/// Pull a coordinate out of the raw query string
///
/// Missing and malformed values both reject before the store is
/// touched, with a message naming the parameter.
fn parse_coordinate(
    params: &HashMap<String, String>,
    name: &str,
) -> Result<f64, (StatusCode, Json<ApiError>)> {
    let raw = params.get(name).ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiError {
                error: format!("Missing required parameter: {}", name),
                code: "INVALID_COORDINATES".to_string(),
            }),
        )
    })?;

    raw.parse::<f64>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiError {
                error: format!("Parameter {} must be a number, got {:?}", name, raw),
                code: "INVALID_COORDINATES".to_string(),
            }),
        )
    })
}

/// Query hazards covering a point
///
/// GET /hazards/?latitude=..&longitude=..
async fn query_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Hazard>>, (StatusCode, Json<ApiError>)> {
    let latitude = parse_coordinate(&params, "latitude")?;
    let longitude = parse_coordinate(&params, "longitude")?;
    let point = LatLng::new(latitude, longitude);

    let store = state.store.read().await;
    let hazards = store
        .query_by_point(point)
        .map_err(|e| (StatusCode::BAD_REQUEST, Json(ApiError::from(e))))?;

    Ok(Json(hazards))
}

/// Create a hazard
///
/// POST /hazards
async fn create_hazard_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<NewHazard>,
) -> Result<(StatusCode, Json<Hazard>), (StatusCode, Json<ApiError>)> {
    require_admin(&state, &headers)?;

    let mut store = state.store.write().await;
    let hazard = store
        .insert(req)
        .map_err(|e| (StatusCode::BAD_REQUEST, Json(ApiError::from(e))))?
        .clone();

    // A failed save must not leave the record behind, or retrying the
    // same create would hit the duplicate-name check.
    if let Err(e) = store.save() {
        store.remove(hazard.id);
        return Err(store_error(e));
    }

    Ok((StatusCode::CREATED, Json(hazard)))
}

/// Attach a circular presentation to a hazard
///
/// POST /hazards/:id/presentations
async fn add_presentation_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    Json(req): Json<NewPresentation>,
) -> Result<(StatusCode, Json<Presentation>), (StatusCode, Json<ApiError>)> {
    require_admin(&state, &headers)?;

    let mut store = state.store.write().await;
    if store.get(id).is_none() {
        return Err(not_found(&format!("Hazard not found: {}", id)));
    }

    let presentation = store
        .add_presentation(id, req)
        .map_err(|e| (StatusCode::BAD_REQUEST, Json(ApiError::from(e))))?;

    if let Err(e) = store.save() {
        store.remove_presentation(id, presentation.id);
        return Err(store_error(e));
    }

    Ok((StatusCode::CREATED, Json(presentation)))
}

/// Register a named location
///
/// POST /locations
async fn create_location_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<NewLocation>,
) -> Result<(StatusCode, Json<LocationSummary>), (StatusCode, Json<ApiError>)> {
    require_admin(&state, &headers)?;

    let mut store = state.store.write().await;
    let location = store
        .create_location(req)
        .map_err(|e| (StatusCode::BAD_REQUEST, Json(ApiError::from(e))))?
        .clone();

    if let Err(e) = store.save() {
        store.remove_location(location.id);
        return Err(store_error(e));
    }

    Ok((StatusCode::CREATED, Json(location)))
}

/// Name search query parameters
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    pub limit: Option<usize>,
}

impl SearchQuery {
    fn require_query(&self) -> Result<&str, (StatusCode, Json<ApiError>)> {
        let q = self.q.trim();
        if q.is_empty() {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ApiError {
                    error: "Missing required parameter: q".to_string(),
                    code: "VALIDATION_ERROR".to_string(),
                }),
            ));
        }
        Ok(q)
    }
}

/// Fuzzy search hazards by name
///
/// GET /hazards/search?q=..&limit=..
async fn search_hazards_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Hazard>>, (StatusCode, Json<ApiError>)> {
    let q = query.require_query()?;

    let store = state.store.read().await;
    let hazards = store
        .search_hazards(q, query.limit)
        .map_err(|e| (StatusCode::BAD_REQUEST, Json(ApiError::from(e))))?
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(hazards))
}

/// Fuzzy search locations by name
///
/// GET /locations/?q=..&limit=..
async fn search_locations_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<LocationSummary>>, (StatusCode, Json<ApiError>)> {
    let q = query.require_query()?;

    let store = state.store.read().await;
    let locations = store
        .search_locations(q, query.limit)
        .map_err(|e| (StatusCode::BAD_REQUEST, Json(ApiError::from(e))))?
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(locations))
}

/// Serve the app shell for a shared place link
///
/// GET /location/:place_id
///
/// The frontend reads the place id out of the path on load. When the
/// shell is missing (API-only deployments) the root redirect keeps the
/// link from dead-ending.
async fn app_shell_handler(
    State(state): State<Arc<AppState>>,
    Path(_place_id): Path<String>,
) -> axum::response::Response {
    let index = std::path::Path::new(&state.static_dir).join("index.html");
    match tokio::fs::read_to_string(&index).await {
        Ok(html) => Html(html).into_response(),
        Err(_) => Redirect::to("/").into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::hazard::store::HazardStore;
    use crate::hazard::{HazardKind, LocationKind, NewTip, Severity};
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tempfile::TempDir;
    use tower::ServiceExt;

    const ADMIN_TOKEN: &str = "test-admin-token";

    fn seeded_store() -> HazardStore {
        let mut store = HazardStore::in_memory();

        let park = LocationSummary {
            id: Uuid::new_v4(),
            name: "Rocky Mountain National Park".to_string(),
            kind: LocationKind::NationalPark,
            coordinates: LatLng::new(40.3428, -105.6836),
            description: None,
            image: None,
        };
        let park_id = park.id;
        store.add_location(park).unwrap();

        let bear = store
            .insert(NewHazard {
                name: "Bear".to_string(),
                severity: Severity::High,
                kind: HazardKind::Animal,
                description: Some("Black bears active near campsites".to_string()),
                tips: vec![NewTip {
                    name: "Store food properly".to_string(),
                    description: "Use bear canisters".to_string(),
                }],
            })
            .unwrap()
            .id;
        store
            .add_presentation(
                bear,
                NewPresentation {
                    latitude: 40.3428,
                    longitude: -105.6836,
                    radius_meters: 5000.0,
                    notes: None,
                    location_id: Some(park_id),
                },
            )
            .unwrap();

        let avalanche = store
            .insert(NewHazard {
                name: "Avalanche".to_string(),
                severity: Severity::High,
                kind: HazardKind::Weather,
                description: None,
                tips: vec![],
            })
            .unwrap()
            .id;
        store
            .add_presentation(
                avalanche,
                NewPresentation {
                    latitude: 40.3428,
                    longitude: -105.6836,
                    radius_meters: 3000.0,
                    notes: None,
                    location_id: None,
                },
            )
            .unwrap();

        store
    }

    fn create_test_state() -> Arc<AppState> {
        let mut config = Config::default();
        config.api.admin_token = ADMIN_TOKEN.to_string();
        Arc::new(AppState::new(config, seeded_store()))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        app: Router,
        uri: &str,
    ) -> (StatusCode, Option<T>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).ok())
    }

    #[tokio::test]
    async fn test_query_inside_circle() {
        let app = create_router(create_test_state());

        let (status, hazards): (_, Option<Vec<Hazard>>) =
            get_json(app, "/hazards/?latitude=40.3430&longitude=-105.6840").await;

        assert_eq!(status, StatusCode::OK);
        let hazards = hazards.unwrap();
        assert_eq!(hazards.len(), 2);
        // Results come back ordered by name.
        assert_eq!(hazards[0].name, "Avalanche");
        assert_eq!(hazards[1].name, "Bear");
    }

    #[tokio::test]
    async fn test_query_outside_all_circles() {
        let app = create_router(create_test_state());

        let (status, hazards): (_, Option<Vec<Hazard>>) =
            get_json(app, "/hazards/?latitude=38.0&longitude=-104.0").await;

        assert_eq!(status, StatusCode::OK);
        assert!(hazards.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_query_missing_parameter() {
        let app = create_router(create_test_state());

        let (status, err): (_, Option<ApiError>) =
            get_json(app, "/hazards/?latitude=40.0").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(err.unwrap().code, "INVALID_COORDINATES");
    }

    #[tokio::test]
    async fn test_query_non_numeric_parameter() {
        let app = create_router(create_test_state());

        let (status, err): (_, Option<ApiError>) =
            get_json(app, "/hazards/?latitude=north&longitude=-105.0").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(err.unwrap().code, "INVALID_COORDINATES");
    }

    #[tokio::test]
    async fn test_query_out_of_range_coordinates() {
        let app = create_router(create_test_state());

        let (status, err): (_, Option<ApiError>) =
            get_json(app, "/hazards/?latitude=91.0&longitude=-105.0").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(err.unwrap().code, "INVALID_COORDINATES");
    }

    #[tokio::test]
    async fn test_query_without_trailing_slash() {
        let app = create_router(create_test_state());

        let (status, hazards): (_, Option<Vec<Hazard>>) =
            get_json(app, "/hazards?latitude=40.3430&longitude=-105.6840").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(hazards.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_create_hazard_requires_token() {
        let app = create_router(create_test_state());

        let body = serde_json::json!({
            "name": "Moose",
            "severity": "medium",
            "type": "animal",
            "tips": []
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/hazards")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_create_hazard_with_token() {
        let state = create_test_state();
        let app = create_router(state.clone());

        let body = serde_json::json!({
            "name": "Moose",
            "severity": "medium",
            "type": "animal",
            "tips": [{"name": "Give space", "description": "Stay 25 meters back"}]
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/hazards")
                    .header("Content-Type", "application/json")
                    .header("Authorization", format!("Bearer {}", ADMIN_TOKEN))
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let hazard: Hazard = serde_json::from_slice(&body).unwrap();
        assert_eq!(hazard.name, "Moose");
        assert_eq!(hazard.tips.len(), 1);

        let store = state.store.read().await;
        assert!(store.get(hazard.id).is_some());
    }

    #[tokio::test]
    async fn test_create_duplicate_hazard_rejected() {
        let app = create_router(create_test_state());

        let body = serde_json::json!({
            "name": "Bear",
            "severity": "high",
            "type": "animal",
            "tips": []
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/hazards")
                    .header("Content-Type", "application/json")
                    .header("Authorization", format!("Bearer {}", ADMIN_TOKEN))
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_add_presentation_unknown_hazard() {
        let app = create_router(create_test_state());

        let body = serde_json::json!({
            "latitude": 39.0,
            "longitude": -105.0,
            "radius_meters": 1000.0
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/hazards/{}/presentations", Uuid::new_v4()))
                    .header("Content-Type", "application/json")
                    .header("Authorization", format!("Bearer {}", ADMIN_TOKEN))
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_add_presentation_invalid_radius() {
        let state = create_test_state();
        let hazard_id = {
            let store = state.store.read().await;
            store.search_hazards("Bear", None).unwrap()[0].id
        };
        let app = create_router(state);

        let body = serde_json::json!({
            "latitude": 39.0,
            "longitude": -105.0,
            "radius_meters": 0.0
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/hazards/{}/presentations", hazard_id))
                    .header("Content-Type", "application/json")
                    .header("Authorization", format!("Bearer {}", ADMIN_TOKEN))
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_search_hazards_fuzzy() {
        let app = create_router(create_test_state());

        let (status, hazards): (_, Option<Vec<Hazard>>) =
            get_json(app, "/hazards/search?q=bear").await;

        assert_eq!(status, StatusCode::OK);
        let hazards = hazards.unwrap();
        assert!(!hazards.is_empty());
        assert_eq!(hazards[0].name, "Bear");
    }

    #[tokio::test]
    async fn test_search_locations() {
        let app = create_router(create_test_state());

        let (status, locations): (_, Option<Vec<LocationSummary>>) =
            get_json(app, "/locations/?q=rocky").await;

        assert_eq!(status, StatusCode::OK);
        let locations = locations.unwrap();
        assert_eq!(locations.len(), 1);
        assert_eq!(locations[0].name, "Rocky Mountain National Park");
    }

    /// Store whose mutations succeed but whose save always fails: the
    /// store path sits below a plain file, so the directory can never be
    /// created.
    fn save_blocked_store() -> (HazardStore, TempDir) {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        std::fs::write(&blocker, b"").unwrap();
        let store = HazardStore::load_from(blocker.join("store.json")).unwrap();
        (store, temp)
    }

    fn state_with_store(store: HazardStore) -> Arc<AppState> {
        let mut config = Config::default();
        config.api.admin_token = ADMIN_TOKEN.to_string();
        Arc::new(AppState::new(config, store))
    }

    async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> StatusCode {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .header("Authorization", format!("Bearer {}", ADMIN_TOKEN))
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        response.status()
    }

    #[tokio::test]
    async fn test_configured_static_dir_serves_root_and_shell() {
        let static_dir = TempDir::new().unwrap();
        std::fs::write(
            static_dir.path().join("index.html"),
            "<html>trail-watch shell</html>",
        )
        .unwrap();

        let mut config = Config::default();
        config.api.admin_token = ADMIN_TOKEN.to_string();
        config.server.static_dir = static_dir.path().to_string_lossy().to_string();
        let state = Arc::new(AppState::new(config, seeded_store()));

        // Same shell at / and at a share link path
        for uri in ["/", "/location/mock-garden-of-the-gods"] {
            let response = create_router(state.clone())
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK, "{}", uri);
            let body = response.into_body().collect().await.unwrap().to_bytes();
            assert!(
                std::str::from_utf8(&body).unwrap().contains("trail-watch shell"),
                "{}",
                uri
            );
        }
    }

    #[tokio::test]
    async fn test_failed_save_rolls_back_created_hazard() {
        let (store, _temp) = save_blocked_store();
        let state = state_with_store(store);

        let body = serde_json::json!({
            "name": "Moose",
            "severity": "medium",
            "type": "animal",
            "tips": []
        });

        let status = post_json(create_router(state.clone()), "/hazards", body.clone()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        // The failed create must not leave the record behind, so the
        // retry fails the same way instead of tripping the duplicate
        // check.
        let status = post_json(create_router(state.clone()), "/hazards", body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        assert!(state.store.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_failed_save_rolls_back_presentation() {
        let (mut store, _temp) = save_blocked_store();
        let hazard_id = store
            .insert(NewHazard {
                name: "Bear".to_string(),
                severity: Severity::High,
                kind: HazardKind::Animal,
                description: None,
                tips: vec![],
            })
            .unwrap()
            .id;
        let state = state_with_store(store);

        let body = serde_json::json!({
            "latitude": 40.0,
            "longitude": -105.0,
            "radius_meters": 1000.0
        });

        let status = post_json(
            create_router(state.clone()),
            &format!("/hazards/{}/presentations", hazard_id),
            body,
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        let store = state.store.read().await;
        assert!(store.get(hazard_id).unwrap().presentations.is_empty());
    }

    #[tokio::test]
    async fn test_create_location_requires_token() {
        let app = create_router(create_test_state());

        let body = serde_json::json!({
            "name": "Maroon Bells",
            "type": "Region",
            "latitude": 39.0708,
            "longitude": -106.9390
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/locations")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_create_location_then_search() {
        let state = create_test_state();

        let body = serde_json::json!({
            "name": "Maroon Bells",
            "type": "Region",
            "latitude": 39.0708,
            "longitude": -106.9390,
            "description": "Twin peaks near Aspen"
        });

        let status = post_json(create_router(state.clone()), "/locations", body).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, locations): (_, Option<Vec<LocationSummary>>) =
            get_json(create_router(state), "/locations/?q=maroon").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(locations.unwrap()[0].name, "Maroon Bells");
    }

    #[tokio::test]
    async fn test_create_location_duplicate_rejected() {
        let state = create_test_state();

        let body = serde_json::json!({
            "name": "Rocky Mountain National Park",
            "type": "National Park",
            "latitude": 40.3428,
            "longitude": -105.6836
        });

        let status = post_json(create_router(state), "/locations", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_search_requires_query() {
        let app = create_router(create_test_state());

        let (status, err): (_, Option<ApiError>) = get_json(app, "/hazards/search").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(err.unwrap().code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_search_zero_limit_rejected() {
        let app = create_router(create_test_state());

        let (status, _): (_, Option<Vec<Hazard>>) =
            get_json(app, "/hazards/search?q=bear&limit=0").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}

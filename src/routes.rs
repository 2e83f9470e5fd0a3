use std::sync::Arc;

use axum::{
    extract::{Path, RawQuery, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tracing::{error, info};

use crate::error::AppError;
use crate::models::Hotel;
use crate::search::{
    self, pagination::PAGE, sort::SORT_OPTION, Page, QueryParams, SearchFilter, SearchResult,
    SortPolicy,
};
use crate::store::HotelStore;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn HotelStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn HotelStore>) -> Self {
        Self { store }
    }
}

pub fn router(state: AppState) -> Router {
    let hotels = Router::new()
        .route("/", get(list_handler))
        .route("/search", get(search_handler))
        .route("/:id", get(hotel_handler));

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api/hotels", hotels)
        .with_state(state)
}

pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn search_handler(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<SearchResult<Hotel>>, AppError> {
    let params = QueryParams::parse(query.as_deref().unwrap_or_default());

    let filter = SearchFilter::build(&params);
    let sort = SortPolicy::from_option(params.get(SORT_OPTION).first());
    let page = Page::from_param(params.get(PAGE).first());

    let result = search::search(state.store.as_ref(), &filter, sort, page)
        .await
        .map_err(AppError::SearchFailed)?;

    Ok(Json(result))
}

pub async fn list_handler(State(state): State<AppState>) -> Result<Json<Vec<Hotel>>, AppError> {
    let hotels = state.store.list_recent().await.map_err(|e| {
        error!("Listing hotels failed: {e}");
        AppError::FetchFailed {
            message: "Error fetching hotels",
            source: e,
        }
    })?;

    info!("Listing {} hotels", hotels.len());

    Ok(Json(hotels))
}

pub async fn hotel_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Hotel>, AppError> {
    let hotel = state.store.find_by_id(&id).await.map_err(|e| {
        error!("Fetching hotel {id} failed: {e}");
        AppError::FetchFailed {
            message: "Error fetching hotel",
            source: e,
        }
    })?;

    hotel.map(Json).ok_or(AppError::NotFound)
}

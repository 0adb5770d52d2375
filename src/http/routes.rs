//! App Registry HTTP Routes
//!
//! Endpoints for listing, searching, fetching, updating, and deleting app
//! entries. Handlers translate between the wire envelope and the registry;
//! the registry owns the semantics.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::http::errors::ApiError;
use crate::http::response::{ListResponse, MutationResponse, SearchResponse, SingleResponse};
use crate::registry::errors::RegistryError;
use crate::registry::model::{AppPatch, SearchCriteria};
use crate::registry::AppRegistry;
use crate::store::AppStore;

/// State shared across app handlers
pub struct AppState<S: AppStore> {
    pub registry: AppRegistry<S>,
}

impl<S: AppStore> AppState<S> {
    pub fn new(store: S) -> Self {
        Self {
            registry: AppRegistry::new(store),
        }
    }
}

/// Raw search query parameters, before normalization.
///
/// `isValid` arrives as query text and is normalized here, not in the
/// registry: the literal `"true"` means true, any other present value means
/// false. Empty-string `appName`/`appOwner` carry no constraint.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub app_name: Option<String>,
    pub app_owner: Option<String>,
    pub is_valid: Option<String>,
}

impl SearchQuery {
    pub fn into_criteria(self) -> SearchCriteria {
        SearchCriteria {
            app_name: self.app_name.filter(|name| !name.is_empty()),
            app_owner: self.app_owner.filter(|owner| !owner.is_empty()),
            is_valid: self.is_valid.map(|text| text == "true"),
        }
    }
}

/// Create app registry routes
pub fn app_routes<S: AppStore + 'static>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route("/", get(list_handler::<S>))
        .route("/search", get(search_handler::<S>))
        .route(
            "/:app_name",
            get(find_handler::<S>)
                .put(update_handler::<S>)
                .delete(delete_handler::<S>),
        )
        .with_state(state)
}

async fn list_handler<S: AppStore>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<ListResponse>, ApiError> {
    let entries = state.registry.list_all()?;
    Ok(Json(ListResponse::new(entries)))
}

async fn search_handler<S: AppStore>(
    State(state): State<Arc<AppState<S>>>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Query(query) = query.map_err(|rejection| ApiError::InvalidQuery(rejection.body_text()))?;
    let criteria = query.into_criteria();
    let matches = state.registry.search(&criteria)?;
    Ok(Json(SearchResponse::new(matches, criteria)))
}

async fn find_handler<S: AppStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(app_name): Path<String>,
) -> Result<Json<SingleResponse>, ApiError> {
    let entry = state
        .registry
        .find_by_name(&app_name)?
        .ok_or(RegistryError::NotFound)?;
    Ok(Json(SingleResponse::new(entry)))
}

async fn update_handler<S: AppStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(app_name): Path<String>,
    body: Result<Json<AppPatch>, JsonRejection>,
) -> Result<Json<MutationResponse>, ApiError> {
    let Json(patch) = body.map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))?;
    let entry = state.registry.update(&app_name, &patch)?;
    Ok(Json(MutationResponse::updated(entry)))
}

async fn delete_handler<S: AppStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(app_name): Path<String>,
) -> Result<Json<MutationResponse>, ApiError> {
    let entry = state.registry.delete(&app_name)?;
    Ok(Json(MutationResponse::deleted(entry)))
}

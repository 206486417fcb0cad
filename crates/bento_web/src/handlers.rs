use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use bento_core::{BentoResult, Error, RawInput};
use bento_scrappers::SourceMetadata;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use crate::error::ApiError;
use crate::AppState;

type ApiResult<T> = std::result::Result<Json<T>, ApiError>;

pub async fn process(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<RawInput>, JsonRejection>,
) -> ApiResult<BentoResult> {
    let Json(input) = payload.map_err(|e| Error::InvalidInput(e.body_text()))?;
    let result = state.pipeline.process(input).await?;
    Ok(Json(result))
}

#[derive(Debug, Default, Deserialize)]
pub struct SaveDataRequest {
    #[serde(default)]
    pub data: Option<Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveDataResponse {
    pub success: bool,
    pub data_id: String,
    pub url: String,
}

pub async fn save_data(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<SaveDataRequest>, JsonRejection>,
) -> ApiResult<SaveDataResponse> {
    let Json(request) = payload.map_err(|e| Error::InvalidInput(e.body_text()))?;
    let data = request
        .data
        .filter(|data| !data.is_null())
        .ok_or_else(|| Error::InvalidInput("data is required".to_string()))?;

    let data_id = Uuid::new_v4().to_string();
    state.store.set(&data_id, data).await?;
    info!("💾 Saved result {}", data_id);

    Ok(Json(SaveDataResponse {
        success: true,
        url: format!("/api/get-data?id={data_id}"),
        data_id,
    }))
}

#[derive(Debug, Deserialize)]
pub struct GetDataQuery {
    pub id: Option<String>,
}

pub async fn get_data(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GetDataQuery>,
) -> ApiResult<Value> {
    let id = query
        .id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| Error::InvalidInput("id is required".to_string()))?;

    match state.store.get(&id).await? {
        Some(data) => Ok(Json(data)),
        None => Err(Error::NotFound(format!("no data stored under {id}")).into()),
    }
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "model": state.pipeline.model_name(),
    }))
}

pub async fn list_sources(State(state): State<Arc<AppState>>) -> Json<Vec<SourceMetadata>> {
    Json(state.pipeline.scrapers().list_scrapers())
}

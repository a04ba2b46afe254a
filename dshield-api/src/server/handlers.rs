// HTTP request handlers
use axum::{
    extract::{Path, Query, State},
    Json,
};
use dshield_shared::{
    CreateInstanceRequest, Entity, FeedParams, GraphData, InstanceCreated, Job, Post,
    RunRequest, SearchRequest, SolutionItem, TagUpdateRequest,
};
use tracing::info;

use crate::errors::ApiError;
use crate::models::MessageResponse;
use crate::server::state::AppState;

/// Liveness message at the root path
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("D‑Shield mock backend is running"))
}

pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse::new("Hello from the backend API!"))
}

pub async fn solutions(State(state): State<AppState>) -> Json<Vec<SolutionItem>> {
    Json(state.service.solutions().to_vec())
}

// EmBrain

pub async fn embrain_search(
    State(state): State<AppState>,
    Json(payload): Json<SearchRequest>,
) -> Json<Vec<Entity>> {
    let results = state
        .service
        .entities()
        .search(&payload.q, payload.tag.as_deref())
        .await;
    Json(results)
}

pub async fn embrain_update_tags(
    State(state): State<AppState>,
    Json(payload): Json<TagUpdateRequest>,
) -> Result<Json<Entity>, ApiError> {
    let entity = state
        .service
        .entities()
        .update_tags(&payload.id, &payload.add, &payload.remove)
        .await?;
    Ok(Json(entity))
}

pub async fn embrain_create_instance(
    State(state): State<AppState>,
    Json(payload): Json<CreateInstanceRequest>,
) -> Json<InstanceCreated> {
    Json(state.service.entities().create_instance(&payload.name))
}

// Social Dome

pub async fn social_dome_feed(
    State(state): State<AppState>,
    Query(params): Query<FeedParams>,
) -> Json<Vec<Post>> {
    Json(state.service.feed().get_feed(params.limit))
}

// Napoleon

pub async fn napoleon_run(
    State(state): State<AppState>,
    Json(payload): Json<RunRequest>,
) -> Json<Job> {
    Json(state.service.jobs().run(&payload.poi).await)
}

/// Poll a research job. Every poll advances the job one step.
pub async fn napoleon_status(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<Job>, ApiError> {
    let job = state.service.jobs().get_status(&job_id).await?;
    info!(
        job_id = %job.job_id,
        status = ?job.status,
        progress = job.progress,
        "Served job status"
    );
    Ok(Json(job))
}

// Relationship Analysis

pub async fn relationships_graph(State(state): State<AppState>) -> Json<GraphData> {
    Json(state.service.graph().get_graph())
}

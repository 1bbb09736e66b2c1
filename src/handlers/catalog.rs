use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{Consultant, DayCareProgram, Event, EventKind, TherapyProgram};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ConsultantsQuery {
    #[serde(default)]
    pub search: String,
    pub specialization: Option<String>,
}

// GET /api/catalog/consultants
pub async fn consultants(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ConsultantsQuery>,
) -> Json<Vec<Consultant>> {
    let found = state
        .catalog
        .filter_consultants(&query.search, query.specialization.as_deref());
    Json(found.into_iter().cloned().collect())
}

#[derive(Deserialize)]
pub struct ProgramsQuery {
    #[serde(default)]
    pub search: String,
    #[serde(rename = "type")]
    pub program_type: Option<String>,
}

// GET /api/catalog/group-therapy
pub async fn group_programs(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ProgramsQuery>,
) -> Json<Vec<TherapyProgram>> {
    let found = state
        .catalog
        .filter_programs(&query.search, query.program_type.as_deref());
    Json(found.into_iter().cloned().collect())
}

// GET /api/catalog/day-care
pub async fn day_care_programs(State(state): State<Arc<AppState>>) -> Json<Vec<DayCareProgram>> {
    Json(state.catalog.day_care_programs().to_vec())
}

#[derive(Deserialize)]
pub struct EventsQuery {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

// GET /api/catalog/events
pub async fn events(
    State(state): State<Arc<AppState>>,
    Query(query): Query<EventsQuery>,
) -> Result<Json<Vec<Event>>, AppError> {
    let kind = EventKind::parse_filter(query.kind.as_deref().unwrap_or(""))
        .map_err(AppError::Validation)?;
    Ok(Json(state.catalog.filter_events(kind).into_iter().cloned().collect()))
}

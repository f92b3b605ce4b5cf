//! Endpoint handlers and their request/response bodies.
//!
//! Every handler is infallible: malformed bodies are rejected by the `Json`
//! extractor before handler logic runs, and no documented code path fails.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::http::server::AppState;
use crate::planner::itinerary::{self, ItineraryDay};
use crate::planner::{chat, GroupMember, PreferenceRecord};

#[derive(Serialize)]
pub struct PingResponse {
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct SavedResponse {
    pub success: bool,
    pub message: &'static str,
}

#[derive(Deserialize)]
pub struct ItineraryRequest {
    pub preferences: HashMap<String, bool>,
    pub budget: String,
}

#[derive(Serialize)]
pub struct ItineraryResponse {
    pub success: bool,
    pub data: ItineraryData,
}

#[derive(Serialize)]
pub struct ItineraryData {
    pub itinerary: Vec<ItineraryDay>,
}

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub success: bool,
    pub data: ChatData,
}

#[derive(Serialize)]
pub struct ChatData {
    pub text: &'static str,
}

#[derive(Serialize)]
pub struct AddMemberResponse {
    pub success: bool,
    pub message: &'static str,
    pub members: Vec<GroupMember>,
}

/// `GET /api/ping` — liveness probe for the frontend.
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        message: "Backend is working!",
    })
}

/// `POST /api/preferences/{user_id}` — overwrite a user's record wholesale.
pub async fn save_preferences(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(record): Json<PreferenceRecord>,
) -> Json<SavedResponse> {
    tracing::debug!(user_id = %user_id, budget = %record.budget, "Saving preferences");
    state.planner.preferences.save(&user_id, record);

    Json(SavedResponse {
        success: true,
        message: "Preferences saved",
    })
}

/// `GET /api/preferences/{user_id}` — stored record, or the default when
/// the user was never saved.
pub async fn get_preferences(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Json<PreferenceRecord> {
    Json(state.planner.preferences.get(&user_id))
}

/// `POST /api/itinerary/generate` — the fixed 3-day plan.
pub async fn generate_itinerary(
    Json(request): Json<ItineraryRequest>,
) -> Json<ItineraryResponse> {
    let itinerary = itinerary::generate(&request.preferences, &request.budget);

    Json(ItineraryResponse {
        success: true,
        data: ItineraryData { itinerary },
    })
}

/// `POST /api/chat` — keyword-classified canned response.
pub async fn chat(Json(request): Json<ChatRequest>) -> Json<ChatResponse> {
    let text = chat::respond(&request.message);
    tracing::debug!(response = %text, "Chat message classified");

    Json(ChatResponse {
        success: true,
        data: ChatData { text },
    })
}

/// `POST /api/group/add` — append a member, return the full roster.
pub async fn add_member(
    State(state): State<AppState>,
    Json(member): Json<GroupMember>,
) -> Json<AddMemberResponse> {
    tracing::debug!(name = %member.name, "Adding group member");
    let members = state.planner.roster.add(member).await;

    Json(AddMemberResponse {
        success: true,
        message: "Member added",
        members,
    })
}

/// `GET /api/group` — bare roster in insertion order.
pub async fn list_group(State(state): State<AppState>) -> Json<Vec<GroupMember>> {
    Json(state.planner.roster.list().await)
}

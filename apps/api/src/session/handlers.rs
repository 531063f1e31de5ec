use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::extract::AppJson;
use crate::models::{User, UserRole};
use crate::session::{dashboard_for, navigation_for, DashboardKind, NavItem};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub role: UserRole,
    pub user: Option<User>,
    pub dashboard: DashboardKind,
    pub navigation: Vec<NavItem>,
}

#[derive(Debug, Deserialize)]
pub struct SwitchRoleRequest {
    pub role: UserRole,
}

async fn describe(state: &AppState) -> SessionResponse {
    let session = state.session.read().await.clone();
    let user = state.store.read().await.find_user(&session.user_id).cloned();
    SessionResponse {
        role: session.role,
        user,
        dashboard: dashboard_for(session.role),
        navigation: navigation_for(session.role),
    }
}

/// GET /api/v1/session
pub async fn handle_get_session(State(state): State<AppState>) -> Json<SessionResponse> {
    Json(describe(&state).await)
}

/// PUT /api/v1/session/role
pub async fn handle_switch_role(
    State(state): State<AppState>,
    AppJson(request): AppJson<SwitchRoleRequest>,
) -> Json<SessionResponse> {
    {
        let mut session = state.session.write().await;
        if session.role != request.role {
            info!("Switching role {:?} -> {:?}", session.role, request.role);
        }
        session.role = request.role;
    }
    Json(describe(&state).await)
}

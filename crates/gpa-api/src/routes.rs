//! Router assembly

use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    audit_logs, dashboard, exercices, health, navigation, notifications, plan_actions,
    service_lines, users, variable_actions,
};
use crate::state::AppState;

pub fn api_router(state: AppState) -> Router {
    let api = Router::new()
        // Variable actions: literal segments before the id capture.
        .route("/variable-actions", get(variable_actions::list))
        .route("/variable-actions", post(variable_actions::create))
        .route("/variable-actions/hierarchy", get(variable_actions::hierarchy))
        .route("/variable-actions/dropdown/{plan_id}", get(variable_actions::dropdown))
        .route("/variable-actions/{id}", get(variable_actions::detail))
        .route("/variable-actions/{id}", put(variable_actions::update))
        .route("/variable-actions/{id}", delete(variable_actions::delete))
        .route("/variable-actions/{parent_id}/children", post(variable_actions::create_child))
        .route("/variable-actions/{id}/move", put(variable_actions::move_variable))
        .route(
            "/variable-actions/{parent_id}/recalculate-weights",
            put(variable_actions::recalculate_weights),
        )
        .route("/variable-actions/{id}/fige", put(variable_actions::set_fige))
        // Plans
        .route("/plan-actions", get(plan_actions::list))
        .route("/plan-actions", post(plan_actions::create))
        .route("/plan-actions/{id}", get(plan_actions::get))
        .route("/plan-actions/{id}", put(plan_actions::update))
        .route("/plan-actions/{id}", delete(plan_actions::delete))
        .route("/plan-actions/{id}/status", put(plan_actions::change_status))
        // Exercices
        .route("/exercices", get(exercices::list))
        .route("/exercices", post(exercices::create))
        .route("/exercices/{id}", get(exercices::get))
        .route("/exercices/{id}", put(exercices::update))
        .route("/exercices/{id}", delete(exercices::delete))
        // Service lines
        .route("/service-lines", get(service_lines::list))
        .route("/service-lines", post(service_lines::create))
        .route("/service-lines/{id}", put(service_lines::update))
        .route("/service-lines/{id}", delete(service_lines::delete))
        // Users and profils
        .route("/users", get(users::list))
        .route("/users", post(users::create))
        .route("/users/{id}", get(users::get))
        .route("/users/{id}", put(users::update))
        .route("/users/{id}", delete(users::delete))
        .route("/profils", get(users::list_profils))
        .route("/profils", post(users::create_profil))
        .route("/profils/{id}", delete(users::delete_profil))
        // Navigation, notifications, dashboard
        .route("/navigation", get(navigation::navigation))
        .route("/notifications", get(notifications::list))
        .route("/notifications/{id}/read", put(notifications::mark_read))
        .route("/dashboard/stats", get(dashboard::stats))
        .route("/audit-logs", get(audit_logs::recent));

    Router::new()
        .route("/health", get(health::health))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

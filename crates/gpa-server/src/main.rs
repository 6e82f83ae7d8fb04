// ============================================================================
// GPA Server - Binary entry point
// File: crates/gpa-server/src/main.rs
// ============================================================================

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{error, info};

use gpa_api::state::AppState;
use gpa_core::navigation::default_navigation;
use gpa_core::services::{
    AuditService, DashboardService, ExerciceService, NotificationService, PlanActionService,
    ServiceLineService, UserService, VariableActionService,
};
use gpa_infrastructure::database::connection;
use gpa_infrastructure::{
    PgAuditRepository, PgExerciceRepository, PgNotificationRepository, PgPlanActionRepository,
    PgProfilRepository, PgServiceLineRepository, PgUserRepository, PgVariableActionRepository,
};
use gpa_security::JwtService;
use gpa_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    gpa_shared::telemetry::init_telemetry();

    info!("GPA Server starting...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Connect to Database
    info!("Connecting to database...");
    let pool = connection::create_pool(&config.database).await?;
    info!("Database connection established.");

    // Run migrations
    sqlx::migrate!("../../migrations").run(&pool).await?;
    info!("Migrations applied.");

    // Repositories (PostgreSQL adapters)
    let va_repo = Arc::new(PgVariableActionRepository::new(pool.clone()));
    let plan_repo = Arc::new(PgPlanActionRepository::new(pool.clone()));
    let exercice_repo = Arc::new(PgExerciceRepository::new(pool.clone()));
    let service_line_repo = Arc::new(PgServiceLineRepository::new(pool.clone()));
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let profil_repo = Arc::new(PgProfilRepository::new(pool.clone()));
    let notification_repo = Arc::new(PgNotificationRepository::new(pool.clone()));
    let audit_repo = Arc::new(PgAuditRepository::new(pool.clone()));

    // Services
    let audit = Arc::new(AuditService::new(audit_repo));
    let notifications = Arc::new(NotificationService::new(notification_repo.clone()));
    let variable_actions = Arc::new(VariableActionService::new(
        va_repo.clone(),
        plan_repo.clone(),
        user_repo.clone(),
        audit.clone(),
        notifications.clone(),
    ));
    let plan_actions = Arc::new(PlanActionService::new(
        plan_repo.clone(),
        exercice_repo.clone(),
        audit.clone(),
    ));
    let exercices = Arc::new(ExerciceService::new(exercice_repo));
    let service_lines = Arc::new(ServiceLineService::new(service_line_repo));
    let users = Arc::new(UserService::new(user_repo, profil_repo));
    let dashboard = Arc::new(DashboardService::new(plan_repo, va_repo, notification_repo));

    let jwt = Arc::new(JwtService::new(
        config.jwt.secret.clone(),
        config.jwt.access_token_expiry,
    ));

    let state = AppState {
        db: pool,
        config: config.clone(),
        jwt,
        menu: Arc::new(default_navigation()),
        variable_actions,
        plan_actions,
        exercices,
        service_lines,
        users,
        notifications,
        dashboard,
        audit,
    };

    let app = gpa_api::api_router(state);

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

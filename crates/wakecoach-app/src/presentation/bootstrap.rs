use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{anyhow, Context};
use tracing::info;

use wakecoach_domain::motivation::MotivationProvider;
use wakecoach_domain::reminder::ReminderRepository;
use wakecoach_domain::session::SessionRepository;
use wakecoach_domain::user::UserRepository;
use wakecoach_domain::wake_log::WakeLogRepository;
use wakecoach_infrastructure::http::ChatCompletionMotivationClient;
use wakecoach_infrastructure::notification::create_sender;
use wakecoach_infrastructure::persistence::{
    repositories::{
        SqliteReminderRepository, SqliteSessionRepository, SqliteUserRepository,
        SqliteWakeLogRepository,
    },
    Database,
};

use crate::application::config::AppConfig;
use crate::application::queries::StatusQueries;
use crate::application::services::{AuthService, ReminderScheduler, WakeUpService};
use crate::presentation::session_store::SessionStore;

pub struct AppContext {
    pub config: AppConfig,
    pub auth_service: AuthService,
    pub wake_up_service: WakeUpService,
    pub status_queries: StatusQueries,
    pub reminder_scheduler: ReminderScheduler,
    pub reminder_repo: Arc<dyn ReminderRepository>,
    pub session_store: SessionStore,
}

/// Platform data directory for database, config, session token and logs.
pub fn data_dir() -> anyhow::Result<PathBuf> {
    let base = dirs::data_dir().ok_or_else(|| anyhow!("No data directory on this platform"))?;
    Ok(base.join("wakecoach"))
}

pub async fn build_app_context(data_dir: &Path) -> anyhow::Result<AppContext> {
    let startup_started_at = Instant::now();

    std::fs::create_dir_all(data_dir).context("Failed to create data directory")?;

    let config = AppConfig::load(&data_dir.join("config.json"))?;
    let cutoff = config.cutoff()?;

    let db_filename = if cfg!(debug_assertions) {
        "wakecoach-dev.db"
    } else {
        "wakecoach.db"
    };
    let db_path = data_dir.join(db_filename);
    let db_path_str = db_path.to_str().ok_or_else(|| anyhow!("Invalid database path"))?;

    info!("Database path: {}", db_path_str);

    let database = Database::new(db_path_str).await?;
    database.run_migrations().await?;

    let pool = Arc::new(database.pool().clone());

    let user_repo = Arc::new(SqliteUserRepository::new(pool.clone())) as Arc<dyn UserRepository>;
    let session_repo =
        Arc::new(SqliteSessionRepository::new(pool.clone())) as Arc<dyn SessionRepository>;
    let wake_log_repo =
        Arc::new(SqliteWakeLogRepository::new(pool.clone())) as Arc<dyn WakeLogRepository>;
    let reminder_repo =
        Arc::new(SqliteReminderRepository::new(pool.clone())) as Arc<dyn ReminderRepository>;

    let motivation = Arc::new(ChatCompletionMotivationClient::new(
        &config.motivation_endpoint,
        config.motivation_api_key.clone().unwrap_or_default(),
        config.motivation_model.clone(),
    )?) as Arc<dyn MotivationProvider>;

    let sender = create_sender(config.webhook_url.as_deref())?;

    let auth_service = AuthService::new(user_repo.clone(), session_repo.clone());
    let wake_up_service = WakeUpService::new(
        wake_log_repo.clone(),
        reminder_repo.clone(),
        motivation,
        cutoff,
    );
    let status_queries = StatusQueries::new(wake_log_repo, cutoff);
    let reminder_scheduler = ReminderScheduler::new(reminder_repo.clone(), sender);
    let session_store = SessionStore::new(data_dir);

    info!(
        "✓ Application context ready ({}ms)",
        startup_started_at.elapsed().as_millis()
    );

    Ok(AppContext {
        config,
        auth_service,
        wake_up_service,
        status_queries,
        reminder_scheduler,
        reminder_repo,
        session_store,
    })
}

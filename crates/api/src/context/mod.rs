//! Application context - dependency injection container

use std::sync::Arc;

use formguest_core::{
    CalendarDirectory, CalendarPlatform, Clock, ConfigurationManager, DialogDataAssembler,
    EventResolver, FormPlatform, PropertiesStore, SubmissionHandler, SystemClock,
    TriggerDispatcher, TriggerRegistry,
};
use formguest_domain::{Config, FormGuestError, Result};
use formguest_infra::{
    AccessTokenProvider, DbManager, GoogleApiClient, GoogleCalendarPlatform, GoogleFormsPlatform,
    HttpClient, SqlitePropertiesStore, SqliteTriggerRegistry, StaticTokenProvider,
};
use tracing::info;

use crate::utils::health::{ComponentHealth, HealthStatus};

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub db: Arc<DbManager>,
    pub directory: CalendarDirectory,
    pub resolver: EventResolver,
    pub manager: ConfigurationManager,
    pub assembler: DialogDataAssembler,
    pub dispatcher: TriggerDispatcher,
}

impl AppContext {
    /// Wire the Google adapters and the SQLite stores from `config`.
    pub fn new(config: Config) -> Result<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: Config, clock: Arc<dyn Clock>) -> Result<Self> {
        if config.google.form_id.trim().is_empty() {
            return Err(FormGuestError::Config("google.form_id must not be empty".into()));
        }
        let time_zone = config.display.tz()?;

        let db = Arc::new(DbManager::open(&config.database)?);

        let tokens: Arc<dyn AccessTokenProvider> =
            Arc::new(StaticTokenProvider::from_config(&config.google));
        let api = GoogleApiClient::new(HttpClient::from_config(&config.http)?, tokens);

        let calendar: Arc<dyn CalendarPlatform> =
            Arc::new(GoogleCalendarPlatform::new(api.clone(), &config.google.calendar_api_base));
        let form: Arc<dyn FormPlatform> = Arc::new(GoogleFormsPlatform::new(
            api,
            &config.google.forms_api_base,
            &config.google.form_id,
        ));
        let properties: Arc<dyn PropertiesStore> =
            Arc::new(SqlitePropertiesStore::new(Arc::clone(&db)));
        let triggers: Arc<dyn TriggerRegistry> =
            Arc::new(SqliteTriggerRegistry::new(Arc::clone(&db), config.google.form_id.clone()));

        let directory = CalendarDirectory::new(Arc::clone(&calendar));
        let resolver = EventResolver::new(Arc::clone(&calendar), clock, time_zone);
        let manager = ConfigurationManager::new(
            Arc::clone(&properties),
            Arc::clone(&triggers),
            form,
            directory.clone(),
            resolver.clone(),
        );
        let assembler = DialogDataAssembler::new(manager.clone());
        let dispatcher =
            TriggerDispatcher::new(triggers, SubmissionHandler::new(properties, calendar));

        info!(
            form_id = %config.google.form_id,
            db_path = %db.path().display(),
            time_zone = %time_zone,
            "application context initialised"
        );

        Ok(Self { config, db, directory, resolver, manager, assembler, dispatcher })
    }

    /// Aggregate health of the components this process owns.
    pub async fn health_check(&self) -> HealthStatus {
        let credentials = if self.config.google.access_token.is_some() {
            ComponentHealth::healthy("google_credentials")
        } else {
            ComponentHealth::unhealthy("google_credentials", "no access token configured")
        };

        HealthStatus::from_components(vec![self.check_database_health().await, credentials])
    }

    /// Uses spawn_blocking to keep the pooled query off the async runtime.
    async fn check_database_health(&self) -> ComponentHealth {
        let db = Arc::clone(&self.db);
        match tokio::task::spawn_blocking(move || db.health_check()).await {
            Ok(Ok(())) => ComponentHealth::healthy("database"),
            Ok(Err(err)) => ComponentHealth::unhealthy("database", err.to_string()),
            Err(err) => ComponentHealth::unhealthy("database", format!("health task failed: {err}")),
        }
    }
}

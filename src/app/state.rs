use super::logo::FsLogoStore;
use crate::{
    config::StartArgs,
    core::service::{company::CompanyService, employee::EmployeeService},
    error::RosterError,
};
use cookie::Key;
use sqlx::PgPool;
use tracing_subscriber::EnvFilter;

#[derive(Clone)]
pub struct AppState {
    /// Roster services.
    pub services: ServiceState,

    /// Key for the private cookie jar holding flash messages.
    pub key: Key,
}

impl AppState {
    /// Load the application state using the provided configuration.
    pub async fn new(args: &StartArgs) -> Result<Self, RosterError> {
        let postgres = crate::app::repo::pg::init(&args.db_url()).await?;
        let logos = FsLogoStore::new(&args.public_path())?;

        Ok(Self {
            services: ServiceState::new(postgres, logos),
            key: args.app_key(),
        })
    }

    #[cfg(test)]
    pub fn new_test(services: ServiceState) -> Self {
        Self {
            services,
            key: Key::generate(),
        }
    }
}

#[cfg(feature = "http")]
impl axum::extract::FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.key.clone()
    }
}

#[derive(Clone)]
pub struct ServiceState {
    pub company: CompanyService<PgPool, FsLogoStore>,
    pub employee: EmployeeService<PgPool>,
}

impl ServiceState {
    pub fn new(postgres: PgPool, logos: FsLogoStore) -> Self {
        Self {
            company: CompanyService::new(postgres.clone(), logos),
            employee: EmployeeService::new(postgres),
        }
    }
}

/// Install the global `fmt` subscriber filtered by `filter`.
pub fn init_tracing(filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from(filter))
        .init();
}

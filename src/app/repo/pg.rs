use crate::{core::repo::Atomic, error::RosterError, map_err};
use sqlx::{PgPool, Transaction};
use tracing::info;

pub mod account;
pub mod company;
pub mod employee;

/// Postgres error code for foreign key violations.
pub(crate) const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Connect to the database and run the pending migrations.
pub async fn init(url: &str) -> Result<PgPool, RosterError> {
    let pool = map_err!(sqlx::postgres::PgPool::connect(url).await);

    map_err!(sqlx::migrate!().run(&pool).await);

    info!("Connected to postgres");

    Ok(pool)
}

/// Whether the error was caused by a foreign key constraint.
pub(crate) fn is_fk_violation(error: &sqlx::Error) -> bool {
    match error {
        sqlx::Error::Database(e) => e.code().is_some_and(|code| code == FOREIGN_KEY_VIOLATION),
        _ => false,
    }
}

impl Atomic for PgPool {
    type Tx = Transaction<'static, sqlx::Postgres>;

    async fn start_tx(&self) -> Result<Self::Tx, RosterError> {
        let tx = map_err!(self.begin().await);
        Ok(tx)
    }

    async fn commit_tx(&self, tx: Self::Tx) -> Result<(), RosterError> {
        map_err!(tx.commit().await);
        Ok(())
    }

    async fn abort_tx(&self, tx: Self::Tx) -> Result<(), RosterError> {
        map_err!(tx.rollback().await);
        Ok(())
    }
}

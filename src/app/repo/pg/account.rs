use crate::{
    core::{
        model::account::{Account, AccountUpsert},
        repo::{account::AccountRepo, Atomic},
    },
    error::RosterError,
    map_err,
};
use sqlx::PgPool;

impl AccountRepo for PgPool {
    async fn get_by_email(&self, email: &str) -> Result<Option<Account>, RosterError> {
        Ok(map_err!(
            sqlx::query_as::<_, Account>(
                "SELECT id, name, email, password, role, created_at, updated_at
                 FROM users
                 WHERE email = $1",
            )
            .bind(email)
            .fetch_optional(self)
            .await
        ))
    }

    async fn count(&self) -> Result<usize, RosterError> {
        let count = map_err!(
            sqlx::query_scalar::<_, i64>("SELECT COUNT(id) FROM users")
                .fetch_one(self)
                .await
        );
        Ok(count as usize)
    }

    async fn upsert(
        &self,
        account: AccountUpsert<'_>,
        tx: &mut <Self as Atomic>::Tx,
    ) -> Result<Account, RosterError> {
        let AccountUpsert {
            name,
            email,
            password,
            role,
        } = account;

        Ok(map_err!(
            sqlx::query_as::<_, Account>(
                "INSERT INTO users(name, email, password, role)
                 VALUES ($1, $2, $3, $4)
                 ON CONFLICT(email) DO UPDATE
                 SET name = EXCLUDED.name,
                     password = EXCLUDED.password,
                     role = EXCLUDED.role,
                     updated_at = NOW()
                 RETURNING id, name, email, password, role, created_at, updated_at",
            )
            .bind(name)
            .bind(email)
            .bind(password)
            .bind(role)
            .fetch_one(&mut **tx)
            .await
        ))
    }
}

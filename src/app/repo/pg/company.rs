use super::is_fk_violation;
use crate::{
    core::{
        model::{
            company::{Company, CompanyInsert, CompanyUpdate},
            List, Pagination,
        },
        repo::company::CompanyRepo,
    },
    err,
    error::RosterError,
    map_err,
};
use sqlx::PgPool;

impl CompanyRepo for PgPool {
    async fn get_by_id(&self, id: i64) -> Result<Option<Company>, RosterError> {
        Ok(map_err!(
            sqlx::query_as::<_, Company>(
                "SELECT id, name, email, website, logo, created_at, updated_at
                 FROM companies
                 WHERE id = $1",
            )
            .bind(id)
            .fetch_optional(self)
            .await
        ))
    }

    async fn list(&self, p: Pagination) -> Result<List<Company>, RosterError> {
        let total = map_err!(
            sqlx::query_scalar::<_, i64>("SELECT COUNT(id) FROM companies")
                .fetch_one(self)
                .await
        );

        let (limit, offset) = p.to_limit_offset();

        let companies = map_err!(
            sqlx::query_as::<_, Company>(
                "SELECT id, name, email, website, logo, created_at, updated_at
                 FROM companies
                 ORDER BY id
                 LIMIT $1 OFFSET $2",
            )
            .bind(limit)
            .bind(offset)
            .fetch_all(self)
            .await
        );

        Ok(List::new(p, total as usize, companies))
    }

    async fn list_all(&self) -> Result<Vec<Company>, RosterError> {
        Ok(map_err!(
            sqlx::query_as::<_, Company>(
                "SELECT id, name, email, website, logo, created_at, updated_at
                 FROM companies
                 ORDER BY name, id",
            )
            .fetch_all(self)
            .await
        ))
    }

    async fn insert(&self, company: CompanyInsert<'_>) -> Result<Company, RosterError> {
        let CompanyInsert {
            name,
            email,
            website,
            logo,
        } = company;

        Ok(map_err!(
            sqlx::query_as::<_, Company>(
                "INSERT INTO companies(name, email, website, logo)
                 VALUES ($1, $2, $3, $4)
                 RETURNING id, name, email, website, logo, created_at, updated_at",
            )
            .bind(name)
            .bind(email)
            .bind(website)
            .bind(logo)
            .fetch_one(self)
            .await
        ))
    }

    async fn update(
        &self,
        id: i64,
        company: CompanyUpdate<'_>,
    ) -> Result<Option<Company>, RosterError> {
        let CompanyUpdate {
            name,
            email,
            website,
            logo,
        } = company;

        Ok(map_err!(
            sqlx::query_as::<_, Company>(
                "UPDATE companies
                 SET name = $1, email = $2, website = $3, logo = $4, updated_at = NOW()
                 WHERE id = $5
                 RETURNING id, name, email, website, logo, created_at, updated_at",
            )
            .bind(name)
            .bind(email)
            .bind(website)
            .bind(logo)
            .bind(id)
            .fetch_optional(self)
            .await
        ))
    }

    async fn remove_by_id(&self, id: i64) -> Result<u64, RosterError> {
        let result = sqlx::query("DELETE FROM companies WHERE id = $1")
            .bind(id)
            .execute(self)
            .await;

        match result {
            Ok(result) => Ok(result.rows_affected()),
            Err(e) if is_fk_violation(&e) => {
                err!(InUse, "Company with ID '{id}' is referenced by employees")
            }
            Err(e) => Err(RosterError::new(file!(), line!(), column!(), e.into())),
        }
    }
}

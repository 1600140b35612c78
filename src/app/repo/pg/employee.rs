use super::is_fk_violation;
use crate::{
    core::{
        model::{
            employee::{Employee, EmployeeInsert, EmployeeUpdate},
            List, Pagination,
        },
        repo::employee::EmployeeRepo,
    },
    err,
    error::RosterError,
    map_err,
};
use sqlx::PgPool;

impl EmployeeRepo for PgPool {
    async fn get_by_id(&self, id: i64) -> Result<Option<Employee>, RosterError> {
        Ok(map_err!(
            sqlx::query_as::<_, Employee>(
                "SELECT id, company_id, first_name, last_name, email, phone, created_at, updated_at
                 FROM employees
                 WHERE id = $1",
            )
            .bind(id)
            .fetch_optional(self)
            .await
        ))
    }

    async fn list(&self, p: Pagination) -> Result<List<Employee>, RosterError> {
        let total = map_err!(
            sqlx::query_scalar::<_, i64>("SELECT COUNT(id) FROM employees")
                .fetch_one(self)
                .await
        );

        let (limit, offset) = p.to_limit_offset();

        let employees = map_err!(
            sqlx::query_as::<_, Employee>(
                "SELECT id, company_id, first_name, last_name, email, phone, created_at, updated_at
                 FROM employees
                 ORDER BY id
                 LIMIT $1 OFFSET $2",
            )
            .bind(limit)
            .bind(offset)
            .fetch_all(self)
            .await
        );

        Ok(List::new(p, total as usize, employees))
    }

    async fn insert(&self, employee: EmployeeInsert<'_>) -> Result<Employee, RosterError> {
        let EmployeeInsert {
            company_id,
            first_name,
            last_name,
            email,
            phone,
        } = employee;

        let result = sqlx::query_as::<_, Employee>(
            "INSERT INTO employees(company_id, first_name, last_name, email, phone)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, company_id, first_name, last_name, email, phone, created_at, updated_at",
        )
        .bind(company_id)
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .bind(phone)
        .fetch_one(self)
        .await;

        match result {
            Ok(employee) => Ok(employee),
            Err(e) if is_fk_violation(&e) => {
                err!(InvalidReference, "Company with ID '{company_id}' does not exist")
            }
            Err(e) => Err(RosterError::new(file!(), line!(), column!(), e.into())),
        }
    }

    async fn update(
        &self,
        id: i64,
        employee: EmployeeUpdate<'_>,
    ) -> Result<Option<Employee>, RosterError> {
        let EmployeeUpdate {
            company_id,
            first_name,
            last_name,
            email,
            phone,
        } = employee;

        let result = sqlx::query_as::<_, Employee>(
            "UPDATE employees
             SET company_id = $1, first_name = $2, last_name = $3, email = $4, phone = $5,
                 updated_at = NOW()
             WHERE id = $6
             RETURNING id, company_id, first_name, last_name, email, phone, created_at, updated_at",
        )
        .bind(company_id)
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .bind(phone)
        .bind(id)
        .fetch_optional(self)
        .await;

        match result {
            Ok(employee) => Ok(employee),
            Err(e) if is_fk_violation(&e) => {
                err!(InvalidReference, "Company with ID '{company_id}' does not exist")
            }
            Err(e) => Err(RosterError::new(file!(), line!(), column!(), e.into())),
        }
    }

    async fn remove_by_id(&self, id: i64) -> Result<u64, RosterError> {
        Ok(map_err!(
            sqlx::query("DELETE FROM employees WHERE id = $1")
                .bind(id)
                .execute(self)
                .await
        )
        .rows_affected())
    }

    async fn count_by_company(&self, company_id: i64) -> Result<usize, RosterError> {
        let count = map_err!(
            sqlx::query_scalar::<_, i64>("SELECT COUNT(id) FROM employees WHERE company_id = $1")
                .bind(company_id)
                .fetch_one(self)
                .await
        );
        Ok(count as usize)
    }
}

#[cfg(all(test, feature = "pg-test"))]
#[suitest::suite(pg_employee_repo_int)]
mod tests {
    use crate::{
        app::test::{init_postgres, PostgresContainer},
        core::{
            model::{
                company::CompanyInsert,
                employee::{EmployeeInsert, EmployeeUpdate},
            },
            repo::{company::CompanyRepo, employee::EmployeeRepo},
        },
        error::RosterErr,
    };
    use sqlx::PgPool;
    use suitest::before_all;

    #[before_all]
    async fn setup() -> (PgPool, PostgresContainer) {
        let (postgres, pg_img) = init_postgres().await;
        (postgres, pg_img)
    }

    async fn company(repo: &PgPool, name: &str) -> i64 {
        let insert = CompanyInsert {
            name,
            email: None,
            website: None,
            logo: None,
        };
        CompanyRepo::insert(repo, insert).await.unwrap().id
    }

    #[test]
    async fn inserting_employee_works(repo: PgPool) {
        let company_id = company(&repo, "Employer").await;

        let insert = EmployeeInsert {
            company_id,
            first_name: "Jane",
            last_name: "Doe",
            email: Some("jane@employer.test"),
            phone: None,
        };
        let employee = EmployeeRepo::insert(&repo, insert).await.unwrap();
        let employee = EmployeeRepo::get_by_id(&repo, employee.id)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(company_id, employee.company_id);
        assert_eq!("Jane", employee.first_name);
        assert_eq!("Doe", employee.last_name);
        assert_eq!(1, repo.count_by_company(company_id).await.unwrap());

        assert_eq!(1, EmployeeRepo::remove_by_id(&repo, employee.id).await.unwrap());
        assert_eq!(0, repo.count_by_company(company_id).await.unwrap());

        CompanyRepo::remove_by_id(&repo, company_id).await.unwrap();
    }

    #[test]
    async fn inserting_employee_for_missing_company_fails(repo: PgPool) {
        let insert = EmployeeInsert {
            company_id: i64::MAX,
            first_name: "Nobody",
            last_name: "Works",
            email: None,
            phone: None,
        };
        let error = EmployeeRepo::insert(&repo, insert).await.unwrap_err();
        assert!(matches!(error.error, RosterErr::InvalidReference(_)));
    }

    #[test]
    async fn updating_employee_works(repo: PgPool) {
        let first = company(&repo, "First employer").await;
        let second = company(&repo, "Second employer").await;

        let insert = EmployeeInsert {
            company_id: first,
            first_name: "John",
            last_name: "Doe",
            email: None,
            phone: Some("+1 555 0100"),
        };
        let employee = EmployeeRepo::insert(&repo, insert).await.unwrap();

        let update = EmployeeUpdate {
            company_id: second,
            first_name: "Johnny",
            last_name: "Doe",
            email: Some("johnny@second.test"),
            phone: employee.phone.as_deref(),
        };
        let updated = EmployeeRepo::update(&repo, employee.id, update)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(second, updated.company_id);
        assert_eq!("Johnny", updated.first_name);
        assert_eq!(Some("johnny@second.test"), updated.email.as_deref());
        assert_eq!(Some("+1 555 0100"), updated.phone.as_deref());

        EmployeeRepo::remove_by_id(&repo, employee.id).await.unwrap();
        CompanyRepo::remove_by_id(&repo, first).await.unwrap();
        CompanyRepo::remove_by_id(&repo, second).await.unwrap();
    }

    #[test]
    async fn deleting_referenced_company_is_restricted(repo: PgPool) {
        let company_id = company(&repo, "Restricted").await;
        let insert = EmployeeInsert {
            company_id,
            first_name: "Still",
            last_name: "Employed",
            email: None,
            phone: None,
        };
        let employee = EmployeeRepo::insert(&repo, insert).await.unwrap();

        let error = CompanyRepo::remove_by_id(&repo, company_id)
            .await
            .unwrap_err();
        assert!(matches!(error.error, RosterErr::InUse(_)));

        EmployeeRepo::remove_by_id(&repo, employee.id).await.unwrap();
        assert_eq!(1, CompanyRepo::remove_by_id(&repo, company_id).await.unwrap());
    }
}

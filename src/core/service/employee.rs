use super::{trim_optional, trim_present};
use crate::{
    core::{
        model::{
            company::Company,
            employee::{Employee, EmployeeInsert, EmployeeUpdate},
            List, Pagination,
        },
        repo::{company::CompanyRepo, employee::EmployeeRepo},
    },
    err,
    error::RosterError,
    map_err,
};
use dto::{EmployeeCreatePayload, EmployeeListing, EmployeeUpdatePayload};
use tracing::info;
use validify::{Validate, Validify};

/// High level operations for employee management.
#[derive(Debug, Clone)]
pub struct EmployeeService<R> {
    pub repo: R,
}

impl<R> EmployeeService<R>
where
    R: EmployeeRepo + CompanyRepo + Send + Sync,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Get a page of employees along with every company they can be assigned to.
    ///
    /// * `p`: Pagination params.
    pub async fn index(&self, p: Pagination) -> Result<EmployeeListing, RosterError> {
        map_err!(p.validate());
        let employees = EmployeeRepo::list(&self.repo, p).await?;
        let companies = self.repo.list_all().await?;
        Ok(EmployeeListing {
            employees,
            companies,
        })
    }

    /// Get a page of employees.
    ///
    /// * `p`: Pagination params.
    pub async fn list(&self, p: Pagination) -> Result<List<Employee>, RosterError> {
        map_err!(p.validate());
        EmployeeRepo::list(&self.repo, p).await
    }

    /// All companies ordered by name, for selection.
    pub async fn companies(&self) -> Result<Vec<Company>, RosterError> {
        self.repo.list_all().await
    }

    /// Get an employee.
    ///
    /// * `id`: Employee ID.
    pub async fn get(&self, id: i64) -> Result<Employee, RosterError> {
        match EmployeeRepo::get_by_id(&self.repo, id).await? {
            Some(employee) => Ok(employee),
            None => err!(DoesNotExist, "Employee with ID '{id}'"),
        }
    }

    /// Validate the payload and insert the employee.
    ///
    /// * `payload`: Employee data.
    pub async fn create(&self, mut payload: EmployeeCreatePayload) -> Result<Employee, RosterError> {
        trim_optional(&mut payload.email);
        trim_optional(&mut payload.phone);
        map_err!(payload.validify());

        self.ensure_company(payload.company_id).await?;

        let insert = EmployeeInsert {
            company_id: payload.company_id,
            first_name: &payload.first_name,
            last_name: &payload.last_name,
            email: payload.email.as_deref(),
            phone: payload.phone.as_deref(),
        };

        let employee = EmployeeRepo::insert(&self.repo, insert).await?;

        info!(
            "Created employee '{} {}' ({})",
            employee.first_name, employee.last_name, employee.id
        );

        Ok(employee)
    }

    /// Validate the present fields and update the employee. Absent fields keep
    /// their stored values.
    ///
    /// * `id`: Employee ID.
    /// * `payload`: Employee data.
    pub async fn update(
        &self,
        id: i64,
        mut payload: EmployeeUpdatePayload,
    ) -> Result<Employee, RosterError> {
        trim_present(&mut payload.first_name);
        trim_present(&mut payload.last_name);
        trim_optional(&mut payload.email);
        trim_optional(&mut payload.phone);
        map_err!(payload.validify());

        let Some(existing) = EmployeeRepo::get_by_id(&self.repo, id).await? else {
            return err!(DoesNotExist, "Employee with ID '{id}'");
        };

        if let Some(company_id) = payload.company_id {
            if company_id != existing.company_id {
                self.ensure_company(company_id).await?;
            }
        }

        let update = EmployeeUpdate {
            company_id: payload.company_id.unwrap_or(existing.company_id),
            first_name: payload
                .first_name
                .as_deref()
                .unwrap_or(&existing.first_name),
            last_name: payload.last_name.as_deref().unwrap_or(&existing.last_name),
            email: payload.email.as_deref().or(existing.email.as_deref()),
            phone: payload.phone.as_deref().or(existing.phone.as_deref()),
        };

        let Some(employee) = EmployeeRepo::update(&self.repo, id, update).await? else {
            return err!(DoesNotExist, "Employee with ID '{id}'");
        };

        info!(
            "Updated employee '{} {}' ({id})",
            employee.first_name, employee.last_name
        );

        Ok(employee)
    }

    /// Delete an employee.
    ///
    /// * `id`: Employee ID.
    pub async fn delete(&self, id: i64) -> Result<(), RosterError> {
        if EmployeeRepo::remove_by_id(&self.repo, id).await? == 0 {
            return err!(DoesNotExist, "Employee with ID '{id}'");
        }
        info!("Deleted employee ({id})");
        Ok(())
    }

    async fn ensure_company(&self, company_id: i64) -> Result<(), RosterError> {
        if CompanyRepo::get_by_id(&self.repo, company_id).await?.is_none() {
            return err!(InvalidReference, "Company with ID '{company_id}' does not exist");
        }
        Ok(())
    }
}

/// DTOs for employee operations.
pub mod dto {
    use crate::core::model::{company::Company, employee::Employee, List};
    use serde::Deserialize;
    use validify::Validify;

    /// Employee fields for creating. Missing fields fall back to their empty
    /// defaults so validation reports every one of them.
    #[cfg_attr(feature = "http", derive(utoipa::ToSchema))]
    #[derive(Debug, Clone, Default, Deserialize, Validify)]
    #[serde(default)]
    pub struct EmployeeCreatePayload {
        #[modify(trim)]
        #[validate(length(min = 1, max = 255))]
        pub first_name: String,

        #[modify(trim)]
        #[validate(length(min = 1, max = 255))]
        pub last_name: String,

        #[validate(range(min = 1.))]
        pub company_id: i64,

        #[validate(email, length(max = 255))]
        pub email: Option<String>,

        #[validate(length(min = 1, max = 32))]
        pub phone: Option<String>,
    }

    /// Employee fields for updating. Only the present fields are validated and written.
    #[cfg_attr(feature = "http", derive(utoipa::ToSchema))]
    #[derive(Debug, Clone, Default, Deserialize, Validify)]
    pub struct EmployeeUpdatePayload {
        #[validate(length(min = 1, max = 255))]
        pub first_name: Option<String>,

        #[validate(length(min = 1, max = 255))]
        pub last_name: Option<String>,

        #[validate(range(min = 1.))]
        pub company_id: Option<i64>,

        #[validate(email, length(max = 255))]
        pub email: Option<String>,

        #[validate(length(min = 1, max = 32))]
        pub phone: Option<String>,
    }

    /// A page of employees with the full set of companies.
    #[derive(Debug)]
    pub struct EmployeeListing {
        pub employees: List<Employee>,
        pub companies: Vec<Company>,
    }
}

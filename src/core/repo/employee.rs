use crate::{
    core::model::{
        employee::{Employee, EmployeeInsert, EmployeeUpdate},
        List, Pagination,
    },
    error::RosterError,
};
use std::future::Future;

/// Keeps track of employees.
pub trait EmployeeRepo {
    /// Get an employee by ID.
    ///
    /// * `id`: Employee ID.
    fn get_by_id(
        &self,
        id: i64,
    ) -> impl Future<Output = Result<Option<Employee>, RosterError>> + Send;

    /// List employees ordered by ID.
    ///
    /// * `p`: Pagination params.
    fn list(&self, p: Pagination)
        -> impl Future<Output = Result<List<Employee>, RosterError>> + Send;

    /// Insert an employee. The referenced company must exist.
    ///
    /// * `employee`: Insert payload.
    fn insert(
        &self,
        employee: EmployeeInsert<'_>,
    ) -> impl Future<Output = Result<Employee, RosterError>> + Send;

    /// Update an employee. Returns `None` if it does not exist.
    ///
    /// * `id`: Employee ID.
    /// * `employee`: The complete updated row.
    fn update(
        &self,
        id: i64,
        employee: EmployeeUpdate<'_>,
    ) -> impl Future<Output = Result<Option<Employee>, RosterError>> + Send;

    /// Remove an employee by ID. Returns the amount of removed rows.
    ///
    /// * `id`: Employee ID.
    fn remove_by_id(&self, id: i64) -> impl Future<Output = Result<u64, RosterError>> + Send;

    /// Count the employees working for a company.
    ///
    /// * `company_id`: Company ID.
    fn count_by_company(
        &self,
        company_id: i64,
    ) -> impl Future<Output = Result<usize, RosterError>> + Send;
}

use crate::{
    core::model::{
        company::{Company, CompanyInsert, CompanyUpdate},
        List, Pagination,
    },
    error::RosterError,
};
use std::future::Future;

/// Keeps track of companies. Logo files are not handled here, only their paths.
pub trait CompanyRepo {
    /// Get a company by ID.
    ///
    /// * `id`: Company ID.
    fn get_by_id(
        &self,
        id: i64,
    ) -> impl Future<Output = Result<Option<Company>, RosterError>> + Send;

    /// List companies ordered by ID.
    ///
    /// * `p`: Pagination params.
    fn list(&self, p: Pagination)
        -> impl Future<Output = Result<List<Company>, RosterError>> + Send;

    /// List every company ordered by name. Used for selection lists.
    fn list_all(&self) -> impl Future<Output = Result<Vec<Company>, RosterError>> + Send;

    /// Insert a company.
    ///
    /// * `company`: Insert payload.
    fn insert(
        &self,
        company: CompanyInsert<'_>,
    ) -> impl Future<Output = Result<Company, RosterError>> + Send;

    /// Update a company. Returns `None` if it does not exist.
    ///
    /// * `id`: Company ID.
    /// * `company`: Update payload.
    fn update(
        &self,
        id: i64,
        company: CompanyUpdate<'_>,
    ) -> impl Future<Output = Result<Option<Company>, RosterError>> + Send;

    /// Remove a company by ID. Returns the amount of removed rows.
    ///
    /// * `id`: Company ID.
    fn remove_by_id(&self, id: i64) -> impl Future<Output = Result<u64, RosterError>> + Send;
}

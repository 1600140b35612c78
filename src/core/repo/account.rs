use super::Atomic;
use crate::{
    core::model::account::{Account, AccountUpsert},
    error::RosterError,
};
use std::future::Future;

/// Keeps track of login accounts.
pub trait AccountRepo {
    /// Get an account by its email.
    ///
    /// * `email`: Account email.
    fn get_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<Account>, RosterError>> + Send;

    /// Total amount of accounts.
    fn count(&self) -> impl Future<Output = Result<usize, RosterError>> + Send;

    /// Insert the account, or overwrite name, password and role of the
    /// account with the same email.
    ///
    /// * `account`: Upsert payload.
    /// * `tx`: The transaction to execute in.
    fn upsert(
        &self,
        account: AccountUpsert<'_>,
        tx: &mut <Self as Atomic>::Tx,
    ) -> impl Future<Output = Result<Account, RosterError>> + Send
    where
        Self: Atomic;
}

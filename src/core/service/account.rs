use crate::{
    core::{
        model::account::{Account, AccountUpsert, Role},
        password,
        repo::{account::AccountRepo, Atomic},
    },
    error::RosterError,
};
use tracing::info;

/// Plaintext password every seeded account receives.
pub const DEFAULT_PASSWORD: &str = "password";

/// The baseline accounts as `(name, email, role)`.
pub const DEFAULT_ACCOUNTS: [(&str, &str, Role); 2] = [
    ("Admin", "admin@grtech.com", Role::Admin),
    ("User", "user@grtech.com", Role::User),
];

/// Ensures the baseline accounts exist with known credentials.
/// Safe to run any number of times.
#[derive(Debug, Clone)]
pub struct AccountSeeder<R> {
    pub repo: R,
}

impl<R> AccountSeeder<R>
where
    R: AccountRepo + Atomic + Send + Sync,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Upsert every default account in a single transaction.
    /// Either all accounts are written or none are.
    pub async fn seed(&self) -> Result<Vec<Account>, RosterError> {
        let mut hashes = Vec::with_capacity(DEFAULT_ACCOUNTS.len());
        for _ in DEFAULT_ACCOUNTS {
            hashes.push(password::hash(DEFAULT_PASSWORD)?);
        }

        let mut tx = self.repo.start_tx().await?;
        let mut accounts = Vec::with_capacity(DEFAULT_ACCOUNTS.len());

        for ((name, email, role), hash) in DEFAULT_ACCOUNTS.into_iter().zip(hashes.iter()) {
            let upsert = AccountUpsert {
                name,
                email,
                password: hash,
                role,
            };
            match self.repo.upsert(upsert, &mut tx).await {
                Ok(account) => {
                    info!("Seeded account '{}' ({})", account.email, account.role);
                    accounts.push(account);
                }
                Err(e) => {
                    self.repo.abort_tx(tx).await?;
                    return Err(e);
                }
            }
        }

        self.repo.commit_tx(tx).await?;

        Ok(accounts)
    }
}

use crate::{
    core::{
        logo::LogoStore,
        model::{
            company::{Company, CompanyInsert, CompanyUpdate},
            List, Pagination,
        },
        repo::{company::CompanyRepo, employee::EmployeeRepo},
    },
    err,
    error::RosterError,
    map_err,
};
use dto::CompanyPayload;
use tracing::{info, warn};
use validify::Validate;

/// High level operations for company management.
#[derive(Debug, Clone)]
pub struct CompanyService<R, S> {
    pub repo: R,
    pub logos: S,
}

impl<R, S> CompanyService<R, S>
where
    R: CompanyRepo + EmployeeRepo + Send + Sync,
    S: LogoStore + Send + Sync,
{
    pub fn new(repo: R, logos: S) -> Self {
        Self { repo, logos }
    }

    /// Get a page of companies ordered by ID.
    ///
    /// * `p`: Pagination params.
    pub async fn list(&self, p: Pagination) -> Result<List<Company>, RosterError> {
        map_err!(p.validate());
        CompanyRepo::list(&self.repo, p).await
    }

    /// Get a company.
    ///
    /// * `id`: Company ID.
    pub async fn get(&self, id: i64) -> Result<Company, RosterError> {
        match CompanyRepo::get_by_id(&self.repo, id).await? {
            Some(company) => Ok(company),
            None => err!(DoesNotExist, "Company with ID '{id}'"),
        }
    }

    /// Validate the payload, store the logo if one is given and insert the company.
    /// The stored logo is removed if the insert fails.
    ///
    /// * `payload`: Company data.
    pub async fn create(&self, mut payload: CompanyPayload) -> Result<Company, RosterError> {
        payload.prepare()?;

        let logo = match payload.logo {
            Some(ref logo) => Some(self.logos.write(logo).await?),
            None => None,
        };

        let insert = CompanyInsert {
            name: &payload.name,
            email: payload.email.as_deref(),
            website: payload.website.as_deref(),
            logo: logo.as_deref(),
        };

        let company = match CompanyRepo::insert(&self.repo, insert).await {
            Ok(company) => company,
            Err(e) => {
                if let Some(ref path) = logo {
                    self.discard_logo(path).await;
                }
                return Err(e);
            }
        };

        info!("Created company '{}' ({})", company.name, company.id);

        Ok(company)
    }

    /// Validate the payload and overwrite the company's fields. The logo is replaced
    /// only if a new one is given, in which case the previous file is removed.
    ///
    /// * `id`: Company ID.
    /// * `payload`: Company data.
    pub async fn update(
        &self,
        id: i64,
        mut payload: CompanyPayload,
    ) -> Result<Company, RosterError> {
        payload.prepare()?;

        let Some(existing) = CompanyRepo::get_by_id(&self.repo, id).await? else {
            return err!(DoesNotExist, "Company with ID '{id}'");
        };

        let new_logo = match payload.logo {
            Some(ref logo) => Some(self.logos.write(logo).await?),
            None => None,
        };

        let update = CompanyUpdate {
            name: &payload.name,
            email: payload.email.as_deref(),
            website: payload.website.as_deref(),
            logo: new_logo.as_deref().or(existing.logo.as_deref()),
        };

        let result = match CompanyRepo::update(&self.repo, id, update).await {
            Ok(Some(company)) => Ok(company),
            Ok(None) => err!(DoesNotExist, "Company with ID '{id}'"),
            Err(e) => Err(e),
        };

        let company = match result {
            Ok(company) => company,
            Err(e) => {
                if let Some(ref path) = new_logo {
                    self.discard_logo(path).await;
                }
                return Err(e);
            }
        };

        if let (Some(new), Some(old)) = (new_logo.as_deref(), existing.logo.as_deref()) {
            if new != old {
                self.discard_logo(old).await;
            }
        }

        info!("Updated company '{}' ({})", company.name, company.id);

        Ok(company)
    }

    /// Delete a company and its logo. Companies with employees cannot be deleted.
    ///
    /// * `id`: Company ID.
    pub async fn delete(&self, id: i64) -> Result<(), RosterError> {
        let Some(company) = CompanyRepo::get_by_id(&self.repo, id).await? else {
            return err!(DoesNotExist, "Company with ID '{id}'");
        };

        let employees = self.repo.count_by_company(id).await?;
        if employees > 0 {
            return err!(
                InUse,
                "Company '{}' still has {employees} employee(s)",
                company.name
            );
        }

        if CompanyRepo::remove_by_id(&self.repo, id).await? == 0 {
            return err!(DoesNotExist, "Company with ID '{id}'");
        }

        if let Some(ref logo) = company.logo {
            self.discard_logo(logo).await;
        }

        info!("Deleted company '{}' ({id})", company.name);

        Ok(())
    }

    /// Read the logo file of a company.
    ///
    /// * `id`: Company ID.
    pub async fn logo(&self, id: i64) -> Result<Vec<u8>, RosterError> {
        let company = self.get(id).await?;
        match company.logo {
            Some(ref path) => self.logos.read(path).await,
            None => err!(DoesNotExist, "Logo for company with ID '{id}'"),
        }
    }

    async fn discard_logo(&self, path: &str) {
        if let Err(e) = self.logos.delete(path).await {
            warn!("Unable to remove logo '{path}': {e}");
        }
    }
}

/// DTOs for company operations.
pub mod dto {
    use crate::{
        core::{logo::LogoUpload, service::trim_optional},
        error::RosterError,
        map_err,
    };
    use validify::{Validate, Validify};

    /// Company fields from a form. Used for both creating and updating.
    #[derive(Debug, Clone, Default, Validify)]
    pub struct CompanyPayload {
        #[modify(trim)]
        #[validate(length(min = 1, max = 255, message = "Company name must be between 1 and 255 characters."))]
        pub name: String,

        #[validate(email, length(max = 255))]
        pub email: Option<String>,

        #[validate(url, length(max = 255))]
        pub website: Option<String>,

        /// Checked separately, see [LogoUpload].
        pub logo: Option<LogoUpload>,
    }

    impl CompanyPayload {
        pub fn new(name: impl Into<String>) -> Self {
            Self {
                name: name.into(),
                ..Default::default()
            }
        }

        pub fn with_email(mut self, email: impl Into<String>) -> Self {
            self.email = Some(email.into());
            self
        }

        pub fn with_website(mut self, website: impl Into<String>) -> Self {
            self.website = Some(website.into());
            self
        }

        pub fn with_logo(mut self, logo: LogoUpload) -> Self {
            self.logo = Some(logo);
            self
        }

        /// Normalize and validate the payload along with its logo.
        pub(crate) fn prepare(&mut self) -> Result<(), RosterError> {
            trim_optional(&mut self.email);
            trim_optional(&mut self.website);
            map_err!(self.validify());
            if let Some(ref logo) = self.logo {
                map_err!(logo.validate());
            }
            Ok(())
        }
    }
}

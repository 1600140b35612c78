use chrono::{DateTime, Utc};
use serde::Serialize;

/// URL prefix under which the public storage directory is served.
pub const PUBLIC_URL_PREFIX: &str = "/storage";

/// Main company model for the `companies` table.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Company {
    /// Primary key.
    pub id: i64,

    pub name: String,

    pub email: Option<String>,

    pub website: Option<String>,

    /// Logo path relative to the public storage root.
    pub logo: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for inserting.
#[derive(Debug, Clone, Copy)]
pub struct CompanyInsert<'a> {
    pub name: &'a str,
    pub email: Option<&'a str>,
    pub website: Option<&'a str>,
    pub logo: Option<&'a str>,
}

/// DTO for updating. Every field is written, `logo` included, so callers
/// pass the existing logo when no new one was uploaded.
#[derive(Debug, Clone, Copy)]
pub struct CompanyUpdate<'a> {
    pub name: &'a str,
    pub email: Option<&'a str>,
    pub website: Option<&'a str>,
    pub logo: Option<&'a str>,
}

/// Public projection of a [Company].
#[cfg_attr(feature = "http", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CompanyResource {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub website: Option<String>,

    /// Logo path relative to the public storage root.
    pub logo: Option<String>,

    /// URL the logo is served at.
    pub logo_url: Option<String>,
}

impl From<Company> for CompanyResource {
    fn from(
        Company {
            id,
            name,
            email,
            website,
            logo,
            ..
        }: Company,
    ) -> Self {
        let logo_url = logo
            .as_ref()
            .map(|path| format!("{PUBLIC_URL_PREFIX}/{path}"));
        Self {
            id,
            name,
            email,
            website,
            logo,
            logo_url,
        }
    }
}

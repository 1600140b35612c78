use chrono::{DateTime, Utc};
use serde::Serialize;

/// Main employee model for the `employees` table.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Employee {
    /// Primary key.
    pub id: i64,

    /// The company the employee works for.
    pub company_id: i64,

    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for inserting.
#[derive(Debug, Clone, Copy)]
pub struct EmployeeInsert<'a> {
    pub company_id: i64,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
}

/// DTO for updating. Represents the complete row after merging the
/// update payload with the stored values.
#[derive(Debug, Clone, Copy)]
pub struct EmployeeUpdate<'a> {
    pub company_id: i64,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
}

/// Public projection of an [Employee].
#[cfg_attr(feature = "http", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EmployeeResource {
    pub id: i64,
    pub company_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl From<Employee> for EmployeeResource {
    fn from(
        Employee {
            id,
            company_id,
            first_name,
            last_name,
            email,
            phone,
            ..
        }: Employee,
    ) -> Self {
        let full_name = format!("{first_name} {last_name}");
        Self {
            id,
            company_id,
            first_name,
            last_name,
            full_name,
            email,
            phone,
        }
    }
}

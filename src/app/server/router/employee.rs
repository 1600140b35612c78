use crate::{
    app::{
        server::{
            flash::{self, Flash},
            view::Page,
        },
        state::AppState,
    },
    core::{
        model::{company::CompanyResource, employee::EmployeeResource, List, PageQuery},
        service::employee::dto::{EmployeeCreatePayload, EmployeeUpdatePayload},
    },
    error::RosterError,
};
use axum::{
    extract::{Path, Query, State},
    http::Uri,
    response::Redirect,
    Json,
};
use axum_extra::extract::PrivateCookieJar;
use serde::Serialize;

const INDEX: &str = "/employees";

#[derive(Debug, Serialize)]
pub(crate) struct EmployeeIndexProps {
    employees: List<EmployeeResource>,
    companies: Vec<CompanyResource>,
}

#[derive(Debug, Serialize)]
pub(crate) struct EmployeeProps {
    employee: EmployeeResource,
}

#[derive(Debug, Serialize)]
pub(crate) struct EmployeeFormProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    employee: Option<EmployeeResource>,
    companies: Vec<CompanyResource>,
}

#[utoipa::path(
    get,
    path = "/employees",
    responses(
        (status = 200, description = "Page `Employees/Index` with a page of employees and all companies"),
        (status = 400, description = "Invalid page parameter"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("page" = Option<usize>, Query, description = "Page to show, starting from 1"),
    ),
)]
pub(crate) async fn list_employees(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    uri: Uri,
    query: Option<Query<PageQuery>>,
) -> Result<(PrivateCookieJar, Page<EmployeeIndexProps>), RosterError> {
    let Query(query) = query.unwrap_or_default();

    let listing = state.services.employee.index(query.into()).await?;

    let props = EmployeeIndexProps {
        employees: listing.employees.map(EmployeeResource::from),
        companies: listing
            .companies
            .into_iter()
            .map(CompanyResource::from)
            .collect(),
    };

    let (jar, flash) = flash::take(jar);
    let page = Page::new("Employees/Index", uri.to_string(), props).with_flash(flash);

    Ok((jar, page))
}

#[utoipa::path(
    get,
    path = "/employees/create",
    responses(
        (status = 200, description = "Page `Employees/Create` with all companies"),
        (status = 500, description = "Internal server error")
    ),
)]
pub(crate) async fn create_employee_form(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Page<EmployeeFormProps>, RosterError> {
    let companies = state.services.employee.companies().await?;
    let props = EmployeeFormProps {
        employee: None,
        companies: companies.into_iter().map(CompanyResource::from).collect(),
    };
    Ok(Page::new("Employees/Create", uri.to_string(), props))
}

#[utoipa::path(
    get,
    path = "/employees/{id}",
    responses(
        (status = 200, description = "Page `Employees/Show`"),
        (status = 404, description = "Employee not found"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = i64, Path, description = "Employee ID")
    )
)]
pub(crate) async fn show_employee(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    uri: Uri,
    Path(id): Path<i64>,
) -> Result<(PrivateCookieJar, Page<EmployeeProps>), RosterError> {
    let employee = state.services.employee.get(id).await?.into();
    let (jar, flash) = flash::take(jar);
    let page = Page::new("Employees/Show", uri.to_string(), EmployeeProps { employee })
        .with_flash(flash);
    Ok((jar, page))
}

#[utoipa::path(
    get,
    path = "/employees/{id}/edit",
    responses(
        (status = 200, description = "Page `Employees/Edit` with the employee and all companies"),
        (status = 404, description = "Employee not found"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = i64, Path, description = "Employee ID")
    )
)]
pub(crate) async fn edit_employee_form(
    State(state): State<AppState>,
    uri: Uri,
    Path(id): Path<i64>,
) -> Result<Page<EmployeeFormProps>, RosterError> {
    let employee = state.services.employee.get(id).await?;
    let companies = state.services.employee.companies().await?;
    let props = EmployeeFormProps {
        employee: Some(employee.into()),
        companies: companies.into_iter().map(CompanyResource::from).collect(),
    };
    Ok(Page::new("Employees/Edit", uri.to_string(), props))
}

#[utoipa::path(
    post,
    path = "/employees",
    request_body = EmployeeCreatePayload,
    responses(
        (status = 303, description = "Employee created, redirects to the employee list"),
        (status = 422, description = "Invalid employee data or unknown company"),
        (status = 500, description = "Internal server error")
    )
)]
pub(crate) async fn create_employee(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    Json(payload): Json<EmployeeCreatePayload>,
) -> Result<(PrivateCookieJar, Redirect), RosterError> {
    state.services.employee.create(payload).await?;

    let jar = flash::put(jar, &Flash::success("Employee created successfully."));

    Ok((jar, Redirect::to(INDEX)))
}

#[utoipa::path(
    put,
    path = "/employees/{id}",
    request_body = EmployeeUpdatePayload,
    responses(
        (status = 303, description = "Employee updated, redirects to the employee list"),
        (status = 404, description = "Employee not found"),
        (status = 422, description = "Invalid employee data or unknown company"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = i64, Path, description = "Employee ID")
    )
)]
pub(crate) async fn update_employee(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    Path(id): Path<i64>,
    Json(payload): Json<EmployeeUpdatePayload>,
) -> Result<(PrivateCookieJar, Redirect), RosterError> {
    state.services.employee.update(id, payload).await?;

    let jar = flash::put(jar, &Flash::success("Employee updated successfully."));

    Ok((jar, Redirect::to(INDEX)))
}

#[utoipa::path(
    delete,
    path = "/employees/{id}",
    responses(
        (status = 303, description = "Employee deleted, redirects to the employee list"),
        (status = 404, description = "Employee not found"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = i64, Path, description = "Employee ID")
    )
)]
pub(crate) async fn delete_employee(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    Path(id): Path<i64>,
) -> Result<(PrivateCookieJar, Redirect), RosterError> {
    state.services.employee.delete(id).await?;

    let jar = flash::put(jar, &Flash::success("Employee deleted successfully."));

    Ok((jar, Redirect::to(INDEX)))
}

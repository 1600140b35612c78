use crate::{
    app::{
        server::{
            dto::CompanyForm,
            flash::{self, Flash},
            view::{NoProps, Page},
        },
        state::AppState,
    },
    core::{
        logo::LogoUpload,
        model::{company::CompanyResource, List, PageQuery},
        service::company::dto::CompanyPayload,
    },
    error::RosterError,
    map_err,
};
use axum::{
    extract::{Multipart, Path, Query, State},
    http::Uri,
    response::Redirect,
};
use axum_extra::extract::PrivateCookieJar;
use serde::Serialize;

const INDEX: &str = "/companies";

#[derive(Debug, Serialize)]
pub(crate) struct CompanyIndexProps {
    companies: List<CompanyResource>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CompanyProps {
    company: CompanyResource,
}

#[utoipa::path(
    get,
    path = "/companies",
    responses(
        (status = 200, description = "Page `Companies/Index` with a page of companies"),
        (status = 400, description = "Invalid page parameter"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("page" = Option<usize>, Query, description = "Page to show, starting from 1"),
    ),
)]
pub(crate) async fn list_companies(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    uri: Uri,
    query: Option<Query<PageQuery>>,
) -> Result<(PrivateCookieJar, Page<CompanyIndexProps>), RosterError> {
    let Query(query) = query.unwrap_or_default();

    let companies = state
        .services
        .company
        .list(query.into())
        .await?
        .map(CompanyResource::from);

    let (jar, flash) = flash::take(jar);
    let page = Page::new("Companies/Index", uri.to_string(), CompanyIndexProps { companies })
        .with_flash(flash);

    Ok((jar, page))
}

#[utoipa::path(
    get,
    path = "/companies/create",
    responses(
        (status = 200, description = "Page `Companies/Create`"),
    ),
)]
pub(crate) async fn create_company_form(uri: Uri) -> Page<NoProps> {
    Page::new("Companies/Create", uri.to_string(), NoProps {})
}

#[utoipa::path(
    get,
    path = "/companies/{id}",
    responses(
        (status = 200, description = "Page `Companies/Show`"),
        (status = 404, description = "Company not found"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = i64, Path, description = "Company ID")
    )
)]
pub(crate) async fn show_company(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    uri: Uri,
    Path(id): Path<i64>,
) -> Result<(PrivateCookieJar, Page<CompanyProps>), RosterError> {
    let company = state.services.company.get(id).await?.into();
    let (jar, flash) = flash::take(jar);
    let page = Page::new("Companies/Show", uri.to_string(), CompanyProps { company })
        .with_flash(flash);
    Ok((jar, page))
}

#[utoipa::path(
    get,
    path = "/companies/{id}/edit",
    responses(
        (status = 200, description = "Page `Companies/Edit`"),
        (status = 404, description = "Company not found"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = i64, Path, description = "Company ID")
    )
)]
pub(crate) async fn edit_company_form(
    State(state): State<AppState>,
    uri: Uri,
    Path(id): Path<i64>,
) -> Result<Page<CompanyProps>, RosterError> {
    let company = state.services.company.get(id).await?.into();
    Ok(Page::new(
        "Companies/Edit",
        uri.to_string(),
        CompanyProps { company },
    ))
}

#[utoipa::path(
    post,
    path = "/companies",
    request_body(content = CompanyForm, content_type = "multipart/form-data"),
    responses(
        (status = 303, description = "Company created, redirects to the company list"),
        (status = 400, description = "Malformed form"),
        (status = 422, description = "Invalid company data"),
        (status = 500, description = "Internal server error")
    )
)]
pub(crate) async fn create_company(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    form: Multipart,
) -> Result<(PrivateCookieJar, Redirect), RosterError> {
    let payload = read_form(form).await?;

    state.services.company.create(payload).await?;

    let jar = flash::put(jar, &Flash::success("Company created successfully."));

    Ok((jar, Redirect::to(INDEX)))
}

#[utoipa::path(
    put,
    path = "/companies/{id}",
    request_body(content = CompanyForm, content_type = "multipart/form-data"),
    responses(
        (status = 303, description = "Company updated, redirects to the company list"),
        (status = 400, description = "Malformed form"),
        (status = 404, description = "Company not found"),
        (status = 422, description = "Invalid company data"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = i64, Path, description = "Company ID")
    )
)]
pub(crate) async fn update_company(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    Path(id): Path<i64>,
    form: Multipart,
) -> Result<(PrivateCookieJar, Redirect), RosterError> {
    let payload = read_form(form).await?;

    state.services.company.update(id, payload).await?;

    let jar = flash::put(jar, &Flash::success("Company updated successfully."));

    Ok((jar, Redirect::to(INDEX)))
}

#[utoipa::path(
    delete,
    path = "/companies/{id}",
    responses(
        (status = 303, description = "Company deleted, redirects to the company list"),
        (status = 404, description = "Company not found"),
        (status = 409, description = "Company still has employees"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = i64, Path, description = "Company ID")
    )
)]
pub(crate) async fn delete_company(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    Path(id): Path<i64>,
) -> Result<(PrivateCookieJar, Redirect), RosterError> {
    state.services.company.delete(id).await?;

    let jar = flash::put(jar, &Flash::success("Company deleted successfully."));

    Ok((jar, Redirect::to(INDEX)))
}

/// Collect the company fields from a multipart form. Blank file inputs are
/// treated as absent, unknown fields are ignored.
async fn read_form(mut form: Multipart) -> Result<CompanyPayload, RosterError> {
    let mut payload = CompanyPayload::default();

    while let Some(field) = map_err!(form.next_field().await) {
        let Some(name) = field.name().map(String::from) else {
            continue;
        };

        match name.as_str() {
            "name" => payload.name = map_err!(field.text().await),
            "email" => payload.email = Some(map_err!(field.text().await)),
            "website" => payload.website = Some(map_err!(field.text().await)),
            "logo" => {
                let file_name = field.file_name().map(String::from).unwrap_or_default();
                let bytes = map_err!(field.bytes().await);

                if file_name.is_empty() && bytes.is_empty() {
                    continue;
                }

                payload.logo = Some(LogoUpload::new(file_name, bytes.to_vec()));
            }
            _ => {
                tracing::debug!("Ignoring form field '{name}'");
            }
        }
    }

    Ok(payload)
}

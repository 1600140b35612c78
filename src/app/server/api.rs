#[rustfmt::skip]
use super::router::{
    __path_health_check,
    // Companies
    company::{
        __path_list_companies,
        __path_create_company_form,
        __path_show_company,
        __path_edit_company_form,
        __path_create_company,
        __path_update_company,
        __path_delete_company,
    },
    // Employees
    employee::{
        __path_list_employees,
        __path_create_employee_form,
        __path_show_employee,
        __path_edit_employee_form,
        __path_create_employee,
        __path_update_employee,
        __path_delete_employee,
    },
};
use super::{dto::CompanyForm, flash::Flash};
use crate::core::{
    model::{company::CompanyResource, employee::EmployeeResource},
    service::employee::dto::{EmployeeCreatePayload, EmployeeUpdatePayload},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health_check,
        // Companies
        list_companies,
        create_company_form,
        show_company,
        edit_company_form,
        create_company,
        update_company,
        delete_company,
        // Employees
        list_employees,
        create_employee_form,
        show_employee,
        edit_employee_form,
        create_employee,
        update_employee,
        delete_employee,
    ),
    components(schemas(
        CompanyForm,
        CompanyResource,
        EmployeeCreatePayload,
        EmployeeUpdatePayload,
        EmployeeResource,
        Flash,
    )),
    tags(
        (name = "roster", description = "Company and employee administration")
    )
)]
pub struct ApiDoc;

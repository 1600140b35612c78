#[cfg(test)]
mod employee_service_tests {
    use crate::{
        app::test::MemoryRepo,
        core::{
            model::{company::CompanyInsert, Pagination},
            repo::company::CompanyRepo,
            service::employee::{
                dto::{EmployeeCreatePayload, EmployeeUpdatePayload},
                EmployeeService,
            },
        },
        error::RosterErr,
    };

    async fn company(service: &EmployeeService<MemoryRepo>, name: &str) -> i64 {
        let insert = CompanyInsert {
            name,
            email: None,
            website: None,
            logo: None,
        };
        CompanyRepo::insert(&service.repo, insert).await.unwrap().id
    }

    fn create(company_id: i64, first_name: &str) -> EmployeeCreatePayload {
        EmployeeCreatePayload {
            first_name: first_name.to_string(),
            last_name: "Doe".to_string(),
            company_id,
            email: None,
            phone: None,
        }
    }

    #[tokio::test]
    async fn index_without_employees_lists_all_companies() {
        let service = EmployeeService::new(MemoryRepo::default());
        for name in ["Echo", "Delta", "Charlie", "Bravo", "Alpha"] {
            company(&service, name).await;
        }

        let listing = service.index(Pagination::page(1)).await.unwrap();

        assert!(listing.employees.items.is_empty());
        assert_eq!(0, listing.employees.total);
        assert_eq!(1, listing.employees.last_page);
        assert_eq!(5, listing.companies.len());

        let names: Vec<_> = listing.companies.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(vec!["Alpha", "Bravo", "Charlie", "Delta", "Echo"], names);
    }

    #[tokio::test]
    async fn index_paginates_employees_but_not_companies() {
        let service = EmployeeService::new(MemoryRepo::default());
        let mut companies = vec![];
        for i in 0..12 {
            companies.push(company(&service, &format!("Company {i:02}")).await);
        }
        for i in 0..13 {
            service
                .create(create(companies[i % 12], &format!("Employee {i}")))
                .await
                .unwrap();
        }

        let listing = service.index(Pagination::page(2)).await.unwrap();
        assert_eq!(3, listing.employees.items.len());
        assert_eq!(13, listing.employees.total);
        assert_eq!(2, listing.employees.last_page);
        assert_eq!(12, listing.companies.len());
    }

    #[tokio::test]
    async fn create_validates_and_trims() {
        let service = EmployeeService::new(MemoryRepo::default());
        let company_id = company(&service, "Employer").await;

        let mut payload = create(company_id, "  Jane ");
        payload.email = Some(" jane@employer.test ".to_string());
        payload.phone = Some("".to_string());

        let employee = service.create(payload).await.unwrap();
        assert_eq!("Jane", employee.first_name);
        assert_eq!(Some("jane@employer.test"), employee.email.as_deref());
        assert_eq!(None, employee.phone);

        let invalid = [
            create(company_id, ""),
            create(0, "Zero"),
            EmployeeCreatePayload {
                email: Some("nope".to_string()),
                ..create(company_id, "Bad Email")
            },
            EmployeeCreatePayload {
                phone: Some("1".repeat(33)),
                ..create(company_id, "Long Phone")
            },
            EmployeeCreatePayload {
                last_name: "x".repeat(256),
                ..create(company_id, "Long Name")
            },
        ];

        for payload in invalid {
            let error = service.create(payload).await.unwrap_err();
            assert!(matches!(error.error, RosterErr::Validation(_)));
        }

        assert_eq!(1, service.list(Pagination::default()).await.unwrap().total);
    }

    #[tokio::test]
    async fn incomplete_create_reports_every_missing_field() {
        let service = EmployeeService::new(MemoryRepo::default());

        let payload: EmployeeCreatePayload =
            serde_json::from_str(r#"{"first_name":"Ann"}"#).unwrap();
        assert_eq!(0, payload.company_id);

        let error = service.create(payload).await.unwrap_err();
        let RosterErr::Validation(errors) = error.error else {
            panic!("expected validation error, got {:?}", error.error);
        };

        let body = serde_json::to_string(&errors).unwrap();
        assert!(body.contains("last_name"));
        assert!(body.contains("company_id"));
        assert!(!body.contains("first_name"));
    }

    #[tokio::test]
    async fn out_of_range_page_is_rejected() {
        let service = EmployeeService::new(MemoryRepo::default());

        let error = service.list(Pagination::page(usize::MAX)).await.unwrap_err();

        assert!(matches!(error.error, RosterErr::Validation(_)));
    }

    #[tokio::test]
    async fn create_requires_existing_company() {
        let service = EmployeeService::new(MemoryRepo::default());

        let error = service.create(create(42, "Orphan")).await.unwrap_err();

        assert!(matches!(error.error, RosterErr::InvalidReference(_)));
        assert_eq!(0, service.list(Pagination::default()).await.unwrap().total);
    }

    #[tokio::test]
    async fn update_keeps_absent_fields() {
        let service = EmployeeService::new(MemoryRepo::default());
        let first = company(&service, "First").await;
        let second = company(&service, "Second").await;

        let mut payload = create(first, "John");
        payload.email = Some("john@first.test".to_string());
        payload.phone = Some("+1 555 0100".to_string());
        let employee = service.create(payload).await.unwrap();

        let update = EmployeeUpdatePayload {
            last_name: Some("  Smith ".to_string()),
            ..Default::default()
        };
        let updated = service.update(employee.id, update).await.unwrap();

        assert_eq!("John", updated.first_name);
        assert_eq!("Smith", updated.last_name);
        assert_eq!(first, updated.company_id);
        assert_eq!(Some("john@first.test"), updated.email.as_deref());
        assert_eq!(Some("+1 555 0100"), updated.phone.as_deref());

        let update = EmployeeUpdatePayload {
            company_id: Some(second),
            ..Default::default()
        };
        let updated = service.update(employee.id, update).await.unwrap();
        assert_eq!(second, updated.company_id);
        assert_eq!("Smith", updated.last_name);
    }

    #[tokio::test]
    async fn update_validates_present_fields() {
        let service = EmployeeService::new(MemoryRepo::default());
        let company_id = company(&service, "Employer").await;
        let employee = service.create(create(company_id, "Jane")).await.unwrap();

        let invalid = [
            EmployeeUpdatePayload {
                first_name: Some("   ".to_string()),
                ..Default::default()
            },
            EmployeeUpdatePayload {
                email: Some("nope".to_string()),
                ..Default::default()
            },
            EmployeeUpdatePayload {
                company_id: Some(0),
                ..Default::default()
            },
        ];

        for payload in invalid {
            let error = service.update(employee.id, payload).await.unwrap_err();
            assert!(matches!(error.error, RosterErr::Validation(_)));
        }

        let update = EmployeeUpdatePayload {
            company_id: Some(company_id + 100),
            ..Default::default()
        };
        let error = service.update(employee.id, update).await.unwrap_err();
        assert!(matches!(error.error, RosterErr::InvalidReference(_)));

        let stored = service.get(employee.id).await.unwrap();
        assert_eq!("Jane", stored.first_name);
        assert_eq!(company_id, stored.company_id);
    }

    #[tokio::test]
    async fn missing_employee_is_not_found() {
        let service = EmployeeService::new(MemoryRepo::default());
        let company_id = company(&service, "Employer").await;
        let employee = service.create(create(company_id, "Jane")).await.unwrap();

        service.delete(employee.id).await.unwrap();

        let error = service.get(employee.id).await.unwrap_err();
        assert!(matches!(error.error, RosterErr::DoesNotExist(_)));

        let error = service
            .update(employee.id, EmployeeUpdatePayload::default())
            .await
            .unwrap_err();
        assert!(matches!(error.error, RosterErr::DoesNotExist(_)));

        let error = service.delete(employee.id).await.unwrap_err();
        assert!(matches!(error.error, RosterErr::DoesNotExist(_)));
    }
}

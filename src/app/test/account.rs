#[cfg(test)]
mod account_seeder_tests {
    use crate::{
        app::test::MemoryRepo,
        core::{
            model::account::Role,
            password,
            repo::account::AccountRepo,
            service::account::{AccountSeeder, DEFAULT_PASSWORD},
        },
        error::RosterErr,
    };

    #[tokio::test]
    async fn seeds_default_accounts() {
        let seeder = AccountSeeder::new(MemoryRepo::default());

        let accounts = seeder.seed().await.unwrap();
        assert_eq!(2, accounts.len());

        let admin = seeder
            .repo
            .get_by_email("admin@grtech.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!("Admin", admin.name);
        assert_eq!(Role::Admin, admin.role);
        assert_ne!(DEFAULT_PASSWORD, admin.password);
        assert!(password::verify(DEFAULT_PASSWORD, &admin.password));

        let user = seeder
            .repo
            .get_by_email("user@grtech.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!("User", user.name);
        assert_eq!(Role::User, user.role);
        assert!(password::verify(DEFAULT_PASSWORD, &user.password));
    }

    #[tokio::test]
    async fn seeding_is_idempotent() {
        let seeder = AccountSeeder::new(MemoryRepo::default());

        let first = seeder.seed().await.unwrap();
        let second = seeder.seed().await.unwrap();

        assert_eq!(2, seeder.repo.count().await.unwrap());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.email, b.email);
            assert_eq!(a.role, b.role);
            assert!(password::verify(DEFAULT_PASSWORD, &b.password));
        }
    }

    #[tokio::test]
    async fn seeding_restores_modified_accounts() {
        let seeder = AccountSeeder::new(MemoryRepo::default());
        seeder.seed().await.unwrap();

        {
            let mut db = seeder.repo.db();
            for account in db.accounts.values_mut() {
                account.name = "Changed".to_string();
                account.role = Role::User;
                account.password = "tampered".to_string();
            }
        }

        seeder.seed().await.unwrap();

        let admin = seeder
            .repo
            .get_by_email("admin@grtech.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!("Admin", admin.name);
        assert_eq!(Role::Admin, admin.role);
        assert!(password::verify(DEFAULT_PASSWORD, &admin.password));
    }

    #[tokio::test]
    async fn failed_seed_writes_nothing() {
        let seeder = AccountSeeder::new(MemoryRepo::default());
        seeder.repo.db().fail_upserts_after = Some(1);

        let error = seeder.seed().await.unwrap_err();

        assert!(matches!(error.error, RosterErr::Sqlx(_)));
        assert_eq!(0, seeder.repo.count().await.unwrap());
    }

    #[tokio::test]
    async fn failed_reseed_rolls_back_earlier_upserts() {
        let seeder = AccountSeeder::new(MemoryRepo::default());
        seeder.seed().await.unwrap();

        {
            let mut db = seeder.repo.db();
            for account in db.accounts.values_mut() {
                account.name = "Changed".to_string();
            }
            // The admin upsert goes through, the user upsert fails.
            db.fail_upserts_after = Some(3);
        }

        let error = seeder.seed().await.unwrap_err();
        assert!(matches!(error.error, RosterErr::Sqlx(_)));

        let admin = seeder
            .repo
            .get_by_email("admin@grtech.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!("Changed", admin.name);
        assert_eq!(2, seeder.repo.count().await.unwrap());
    }
}

#[cfg(all(test, feature = "pg-test"))]
#[suitest::suite(pg_account_seeder_int)]
mod account_seeder_integration_tests {
    use crate::{
        app::test::{init_postgres, PostgresContainer},
        core::{
            model::account::Role,
            password,
            repo::account::AccountRepo,
            service::account::{AccountSeeder, DEFAULT_PASSWORD},
        },
    };
    use sqlx::PgPool;
    use suitest::before_all;

    #[before_all]
    async fn setup() -> (PgPool, PostgresContainer) {
        let (postgres, pg_img) = init_postgres().await;
        (postgres, pg_img)
    }

    #[test]
    async fn seeding_twice_leaves_two_accounts(repo: PgPool) {
        let seeder = AccountSeeder::new(repo.clone());

        seeder.seed().await.unwrap();
        seeder.seed().await.unwrap();

        assert_eq!(2, repo.count().await.unwrap());

        let admin = repo.get_by_email("admin@grtech.com").await.unwrap().unwrap();
        assert_eq!("Admin", admin.name);
        assert_eq!(Role::Admin, admin.role);
        assert!(password::verify(DEFAULT_PASSWORD, &admin.password));

        let user = repo.get_by_email("user@grtech.com").await.unwrap().unwrap();
        assert_eq!("User", user.name);
        assert_eq!(Role::User, user.role);
        assert!(password::verify(DEFAULT_PASSWORD, &user.password));
    }
}

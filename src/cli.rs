use crate::{
    app::logo::FsLogoStore,
    config::StartArgs,
    core::{
        model::{company::CompanyResource, employee::EmployeeResource, Pagination},
        service::{account::AccountSeeder, company::CompanyService, employee::EmployeeService},
    },
    error::RosterError,
    map_err,
};
use clap::{Args, Parser, Subcommand};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "roster-cli", version = "0.1", about = "Roster maintenance commands", long_about = None)]
pub struct CliArgs {
    #[command(flatten)]
    pub start: StartArgs,

    #[command(subcommand)]
    pub command: Execute,
}

#[derive(Debug, Subcommand)]
pub enum Execute {
    /// Create or reset the default admin and user accounts.
    Seed,

    /// Print a page of companies.
    Companies(ListArgs),

    /// Print a page of employees.
    Employees(ListArgs),
}

#[derive(Debug, Args, Default, Clone)]
pub struct ListArgs {
    /// Page to print, starting from 1.
    #[arg(long, default_value = "1")]
    pub page: usize,
}

pub async fn run(args: CliArgs) -> Result<(), RosterError> {
    let postgres = crate::app::repo::pg::init(&args.start.db_url()).await?;

    match args.command {
        Execute::Seed => {
            let accounts = AccountSeeder::new(postgres).seed().await?;
            for account in accounts {
                println!("{} <{}> ({})", account.name, account.email, account.role);
            }
            info!("Seeding complete");
        }
        Execute::Companies(ListArgs { page }) => {
            let logos = FsLogoStore::new(&args.start.public_path())?;
            let companies = CompanyService::new(postgres, logos)
                .list(Pagination::page(page))
                .await?
                .map(CompanyResource::from);
            println!("{}", map_err!(serde_json::to_string_pretty(&companies)));
        }
        Execute::Employees(ListArgs { page }) => {
            let employees = EmployeeService::new(postgres)
                .list(Pagination::page(page))
                .await?
                .map(EmployeeResource::from);
            println!("{}", map_err!(serde_json::to_string_pretty(&employees)));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{CliArgs, Execute, ListArgs};
    use clap::Parser;

    #[test]
    fn parses_subcommands() {
        let args = CliArgs::parse_from(["roster-cli", "--db-url", "postgres://db", "seed"]);
        assert!(matches!(args.command, Execute::Seed));
        assert_eq!("postgres://db", args.start.db_url());

        let args = CliArgs::parse_from(["roster-cli", "companies", "--page", "3"]);
        assert!(matches!(args.command, Execute::Companies(ListArgs { page: 3 })));

        let args = CliArgs::parse_from(["roster-cli", "employees"]);
        assert!(matches!(args.command, Execute::Employees(ListArgs { page: 1 })));
    }
}

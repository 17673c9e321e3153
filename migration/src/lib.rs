pub use sea_orm_migration::prelude::*;

mod m20260825_000001_create_affiliates;
mod m20260825_000002_create_referred_customers;
mod m20260825_000003_create_withdrawal_requests;
mod m20260825_000004_create_commission_settings;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
  fn migrations() -> Vec<Box<dyn MigrationTrait>> {
    vec![
      Box::new(m20260825_000001_create_affiliates::Migration),
      Box::new(m20260825_000002_create_referred_customers::Migration),
      Box::new(m20260825_000003_create_withdrawal_requests::Migration),
      Box::new(m20260825_000004_create_commission_settings::Migration),
    ]
  }
}

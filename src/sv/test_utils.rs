//! Shared test utilities for database setup

#[cfg(test)]
pub mod test_db {
  use chrono::Utc;
  use sea_orm::{
    ActiveModelTrait, ConnectionTrait, Database, DatabaseConnection,
    DbBackend, Schema, Set,
  };

  use crate::entity::*;

  /// Creates an in-memory SQLite database with all required tables
  pub async fn setup() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    let schema = Schema::new(DbBackend::Sqlite);

    // Create affiliate table
    let stmt = schema.create_table_from_entity(affiliate::Entity);
    db.execute(db.get_database_backend().build(&stmt)).await.unwrap();

    // Create referred_customer table
    let stmt = schema.create_table_from_entity(referred_customer::Entity);
    db.execute(db.get_database_backend().build(&stmt)).await.unwrap();

    // Create withdrawal_request table
    let stmt = schema.create_table_from_entity(withdrawal_request::Entity);
    db.execute(db.get_database_backend().build(&stmt)).await.unwrap();

    // Create commission_settings table
    let stmt = schema.create_table_from_entity(commission_settings::Entity);
    db.execute(db.get_database_backend().build(&stmt)).await.unwrap();

    db
  }

  /// Inserts an affiliate with zeroed aggregates on the Basic plan
  pub async fn seed_affiliate(
    db: &DatabaseConnection,
    id: &str,
    name: &str,
    referral_code: &str,
  ) -> affiliate::Model {
    affiliate::ActiveModel {
      id: Set(id.into()),
      name: Set(name.into()),
      email: Set(format!("{}@example.com", id.to_lowercase())),
      referral_code: Set(referral_code.into()),
      plan: Set(AffiliatePlan::Basic),
      total_revenue: Set(0.0),
      total_commission: Set(0.0),
      recurring_customers: Set(0),
      one_time_customers: Set(0),
      created_at: Set(Utc::now().naive_utc()),
    }
    .insert(db)
    .await
    .unwrap()
  }
}

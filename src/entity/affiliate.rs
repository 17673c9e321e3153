use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::{referred_customer, withdrawal_request};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[derive(EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum AffiliatePlan {
  #[sea_orm(string_value = "Basic")]
  #[default]
  Basic,
  #[sea_orm(string_value = "Premium")]
  Premium,
}

/// The aggregate fields (`total_revenue`, `total_commission` and the two
/// customer counters) are only ever advanced by the order service.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "affiliates")]
pub struct Model {
  #[sea_orm(primary_key, auto_increment = false)]
  pub id: String,
  pub name: String,
  pub email: String,
  #[sea_orm(unique)]
  pub referral_code: String,
  pub plan: AffiliatePlan,
  pub total_revenue: f64,
  pub total_commission: f64,
  pub recurring_customers: i32,
  pub one_time_customers: i32,
  pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
  #[sea_orm(has_many = "referred_customer::Entity")]
  ReferredCustomers,
  #[sea_orm(has_many = "withdrawal_request::Entity")]
  WithdrawalRequests,
}

impl Related<referred_customer::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::ReferredCustomers.def()
  }
}

impl Related<withdrawal_request::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::WithdrawalRequests.def()
  }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Global commission configuration. A single row with id = 1, created
/// lazily by the first update.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "commission_settings")]
pub struct Model {
  #[sea_orm(primary_key, auto_increment = false)]
  pub id: i32,
  pub recurring_percentage: f64,
  pub one_time_percentage: f64,
  pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

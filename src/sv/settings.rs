use serde::Serialize;

use crate::{entity::commission_settings, prelude::*};

/// Defaults used until the singleton row is created
pub const DEFAULT_RECURRING_PERCENTAGE: f64 = 10.0;
pub const DEFAULT_ONE_TIME_PERCENTAGE: f64 = 5.0;

const SETTINGS_ROW_ID: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CommissionRates {
  pub recurring_percentage: f64,
  pub one_time_percentage: f64,
}

impl Default for CommissionRates {
  fn default() -> Self {
    Self {
      recurring_percentage: DEFAULT_RECURRING_PERCENTAGE,
      one_time_percentage: DEFAULT_ONE_TIME_PERCENTAGE,
    }
  }
}

pub struct Settings<'a> {
  db: &'a DatabaseConnection,
}

impl<'a> Settings<'a> {
  pub fn new(db: &'a DatabaseConnection) -> Self {
    Self { db }
  }

  pub async fn get(&self) -> Result<CommissionRates> {
    Self::read(self.db).await
  }

  /// Generic over the connection so callers can read the current rates
  /// inside an open transaction.
  pub async fn read<C: ConnectionTrait>(conn: &C) -> Result<CommissionRates> {
    let settings =
      commission_settings::Entity::find_by_id(SETTINGS_ROW_ID).one(conn).await?;

    Ok(match settings {
      Some(settings) => CommissionRates {
        recurring_percentage: settings.recurring_percentage,
        one_time_percentage: settings.one_time_percentage,
      },
      None => CommissionRates::default(),
    })
  }

  /// Upserts the singleton row, creating it on first use
  pub async fn update(
    &self,
    recurring_percentage: f64,
    one_time_percentage: f64,
  ) -> Result<CommissionRates> {
    for rate in [recurring_percentage, one_time_percentage] {
      if !(0.0..=100.0).contains(&rate) {
        return Err(Error::InvalidArgs(
          "Commission percentages must be between 0 and 100".into(),
        ));
      }
    }

    let now = Utc::now().naive_utc();
    let existing =
      commission_settings::Entity::find_by_id(SETTINGS_ROW_ID).one(self.db).await?;

    let saved = match existing {
      Some(settings) => {
        commission_settings::ActiveModel {
          recurring_percentage: Set(recurring_percentage),
          one_time_percentage: Set(one_time_percentage),
          updated_at: Set(now),
          ..settings.into()
        }
        .update(self.db)
        .await?
      }
      None => {
        commission_settings::ActiveModel {
          id: Set(SETTINGS_ROW_ID),
          recurring_percentage: Set(recurring_percentage),
          one_time_percentage: Set(one_time_percentage),
          updated_at: Set(now),
        }
        .insert(self.db)
        .await?
      }
    };

    Ok(CommissionRates {
      recurring_percentage: saved.recurring_percentage,
      one_time_percentage: saved.one_time_percentage,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::sv::test_utils::test_db;

  #[tokio::test]
  async fn test_get_returns_defaults_when_unset() {
    let db = test_db::setup().await;

    let rates = Settings::new(&db).get().await.unwrap();
    assert_eq!(rates.recurring_percentage, 10.0);
    assert_eq!(rates.one_time_percentage, 5.0);
  }

  #[tokio::test]
  async fn test_update_creates_the_singleton_row() {
    let db = test_db::setup().await;

    let rates = Settings::new(&db).update(15.0, 8.0).await.unwrap();
    assert_eq!(rates.recurring_percentage, 15.0);
    assert_eq!(rates.one_time_percentage, 8.0);

    let rates = Settings::new(&db).get().await.unwrap();
    assert_eq!(rates.recurring_percentage, 15.0);
    assert_eq!(rates.one_time_percentage, 8.0);
  }

  #[tokio::test]
  async fn test_update_overwrites_previous_values() {
    let db = test_db::setup().await;

    Settings::new(&db).update(15.0, 8.0).await.unwrap();
    Settings::new(&db).update(20.0, 12.5).await.unwrap();

    let rates = Settings::new(&db).get().await.unwrap();
    assert_eq!(rates.recurring_percentage, 20.0);
    assert_eq!(rates.one_time_percentage, 12.5);

    // Still a single row
    let rows =
      commission_settings::Entity::find().all(&db).await.unwrap();
    assert_eq!(rows.len(), 1);
  }

  #[tokio::test]
  async fn test_update_rejects_out_of_range_percentages() {
    let db = test_db::setup().await;

    let result = Settings::new(&db).update(150.0, 5.0).await;
    assert!(matches!(result, Err(Error::InvalidArgs(_))));

    let result = Settings::new(&db).update(10.0, -1.0).await;
    assert!(matches!(result, Err(Error::InvalidArgs(_))));

    // Bounds themselves are fine
    assert!(Settings::new(&db).update(0.0, 100.0).await.is_ok());
  }
}

use sea_orm::{QuerySelect, sea_query::Expr};
use serde::Serialize;

use crate::{
  entity::{affiliate, referred_customer},
  prelude::*,
  sv,
};

#[derive(Debug, Serialize)]
pub struct DashboardSummary {
  pub affiliate: affiliate::Model,
  pub total_earnings: f64,
  pub total_sales: f64,
  pub total_commissions: f64,
}

pub struct Dashboard<'a> {
  db: &'a DatabaseConnection,
}

impl<'a> Dashboard<'a> {
  pub fn new(db: &'a DatabaseConnection) -> Self {
    Self { db }
  }

  /// Summary numbers for one affiliate.
  ///
  /// `total_earnings` and `total_sales` are summed from the referral
  /// records; `total_commissions` echoes the ledger's independently
  /// tracked `total_commission` field, so the two can diverge.
  pub async fn summary(&self, affiliate_id: &str) -> Result<DashboardSummary> {
    let affiliate = sv::Affiliate::new(self.db).require(affiliate_id).await?;

    type SumRow = (Option<f64>, Option<f64>);
    let sums: Option<SumRow> = referred_customer::Entity::find()
      .select_only()
      .column_as(
        Expr::col(referred_customer::Column::CommissionEarned).sum(),
        "total_earnings",
      )
      .column_as(
        Expr::col(referred_customer::Column::OrderAmount).sum(),
        "total_sales",
      )
      .filter(referred_customer::Column::AffiliateId.eq(affiliate_id))
      .into_tuple()
      .one(self.db)
      .await?;

    let total_earnings = sums.and_then(|row| row.0).unwrap_or(0.0);
    let total_sales = sums.and_then(|row| row.1).unwrap_or(0.0);
    let total_commissions = affiliate.total_commission;

    Ok(DashboardSummary {
      affiliate,
      total_earnings,
      total_sales,
      total_commissions,
    })
  }

  pub async fn all_affiliates(&self) -> Result<Vec<affiliate::Model>> {
    Ok(
      affiliate::Entity::find()
        .order_by_asc(affiliate::Column::CreatedAt)
        .all(self.db)
        .await?,
    )
  }
}

#[cfg(test)]
mod tests {
  use chrono::Utc;

  use super::*;
  use crate::{
    entity::AffiliatePlan,
    sv::{Order, test_utils::test_db},
  };

  #[tokio::test]
  async fn test_summary_unknown_affiliate() {
    let db = test_db::setup().await;

    let result = Dashboard::new(&db).summary("AFF999").await;
    assert!(matches!(result, Err(Error::AffiliateNotFound)));
  }

  #[tokio::test]
  async fn test_summary_zero_without_referrals() {
    let db = test_db::setup().await;

    // The stored total_commission is reported as-is even when there are
    // no referral rows backing it up
    affiliate::ActiveModel {
      id: Set("AFF001".into()),
      name: Set("John Smith".into()),
      email: Set("aff001@example.com".into()),
      referral_code: Set("JOHN123".into()),
      plan: Set(AffiliatePlan::Premium),
      total_revenue: Set(0.0),
      total_commission: Set(42.5),
      recurring_customers: Set(0),
      one_time_customers: Set(0),
      created_at: Set(Utc::now().naive_utc()),
    }
    .insert(&db)
    .await
    .unwrap();

    let summary = Dashboard::new(&db).summary("AFF001").await.unwrap();
    assert_eq!(summary.total_earnings, 0.0);
    assert_eq!(summary.total_sales, 0.0);
    assert_eq!(summary.total_commissions, 42.5);
    assert_eq!(summary.affiliate.id, "AFF001");
  }

  #[tokio::test]
  async fn test_summary_sums_referral_records() {
    let db = test_db::setup().await;
    test_db::seed_affiliate(&db, "AFF001", "John Smith", "JOHN123").await;
    test_db::seed_affiliate(&db, "AFF002", "Jane Doe", "JANE456").await;

    // Default rates: 10% recurring, 5% one-time
    Order::new(&db).confirm("CUST001", "AFF001", 100.0, true).await.unwrap();
    Order::new(&db).confirm("CUST002", "AFF001", 200.0, false).await.unwrap();
    Order::new(&db).confirm("CUST003", "AFF002", 500.0, true).await.unwrap();

    let summary = Dashboard::new(&db).summary("AFF001").await.unwrap();
    assert_eq!(summary.total_sales, 300.0);
    assert_eq!(summary.total_earnings, 20.0);
    assert_eq!(summary.total_commissions, 20.0);
  }

  #[tokio::test]
  async fn test_all_affiliates() {
    let db = test_db::setup().await;
    test_db::seed_affiliate(&db, "AFF001", "John Smith", "JOHN123").await;
    test_db::seed_affiliate(&db, "AFF002", "Jane Doe", "JANE456").await;

    let affiliates = Dashboard::new(&db).all_affiliates().await.unwrap();
    assert_eq!(affiliates.len(), 2);
  }
}

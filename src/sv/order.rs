use serde::Serialize;

use crate::{
  entity::{OrderType, affiliate, referred_customer},
  prelude::*,
  sv,
};

#[derive(Debug, Serialize)]
pub struct OrderOutcome {
  pub success: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub commission: Option<f64>,
}

impl OrderOutcome {
  fn rejected() -> Self {
    Self { success: false, commission: None }
  }
}

pub struct Order<'a> {
  db: &'a DatabaseConnection,
}

impl<'a> Order<'a> {
  pub fn new(db: &'a DatabaseConnection) -> Self {
    Self { db }
  }

  /// Record a confirmed order placed through an affiliate's referral.
  ///
  /// Commission is `order_amount * rate / 100` with the rate taken from
  /// the settings in effect at order time. The referral row and the
  /// affiliate aggregate update share one transaction.
  ///
  /// An unknown affiliate is a soft failure (`success: false`, nothing
  /// written) so the calling checkout flow can continue without
  /// special-casing errors.
  pub async fn confirm(
    &self,
    user_id: &str,
    affiliate_id: &str,
    order_amount: f64,
    recurring: bool,
  ) -> Result<OrderOutcome> {
    if order_amount <= 0.0 {
      return Err(Error::InvalidArgs("Order amount must be positive".into()));
    }

    let txn = self.db.begin().await?;

    let Some(affiliate) =
      affiliate::Entity::find_by_id(affiliate_id).one(&txn).await?
    else {
      debug!("order {user_id} names unknown affiliate {affiliate_id}");
      return Ok(OrderOutcome::rejected());
    };

    let rates = sv::Settings::read(&txn).await?;
    let rate = if recurring {
      rates.recurring_percentage
    } else {
      rates.one_time_percentage
    };
    let commission = order_amount * rate / 100.0;

    let now = Utc::now().naive_utc();
    referred_customer::ActiveModel {
      // The order's user id doubles as the customer id
      id: Set(user_id.to_string()),
      name: Set(format!("Customer {user_id}")),
      affiliate_id: Set(affiliate_id.to_string()),
      order_amount: Set(order_amount),
      order_type: Set(if recurring {
        OrderType::Recurring
      } else {
        OrderType::OneTime
      }),
      commission_earned: Set(commission),
      created_at: Set(now),
    }
    .insert(&txn)
    .await?;

    let (recurring_customers, one_time_customers) = if recurring {
      (affiliate.recurring_customers + 1, affiliate.one_time_customers)
    } else {
      (affiliate.recurring_customers, affiliate.one_time_customers + 1)
    };

    affiliate::ActiveModel {
      total_revenue: Set(affiliate.total_revenue + order_amount),
      total_commission: Set(affiliate.total_commission + commission),
      recurring_customers: Set(recurring_customers),
      one_time_customers: Set(one_time_customers),
      ..affiliate.into()
    }
    .update(&txn)
    .await?;

    txn.commit().await?;
    Ok(OrderOutcome { success: true, commission: Some(commission) })
  }

  /// All referred customers of an affiliate, newest first
  pub async fn referrals(
    &self,
    affiliate_id: &str,
  ) -> Result<Vec<referred_customer::Model>> {
    Ok(
      referred_customer::Entity::find()
        .filter(referred_customer::Column::AffiliateId.eq(affiliate_id))
        .order_by_desc(referred_customer::Column::CreatedAt)
        .all(self.db)
        .await?,
    )
  }
}

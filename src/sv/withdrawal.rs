use uuid::Uuid;

use crate::{
  entity::{WithdrawalStatus, withdrawal_request},
  prelude::*,
  sv,
};

pub struct Withdrawal<'a> {
  db: &'a DatabaseConnection,
}

impl<'a> Withdrawal<'a> {
  pub fn new(db: &'a DatabaseConnection) -> Self {
    Self { db }
  }

  /// Open a Pending request for an affiliate.
  ///
  /// The affiliate's name is snapshotted onto the request and stays as
  /// it was at creation time even if the affiliate is later renamed.
  pub async fn create(
    &self,
    affiliate_id: &str,
    amount: f64,
  ) -> Result<withdrawal_request::Model> {
    if amount <= 0.0 {
      return Err(Error::InvalidArgs(
        "Withdrawal amount must be positive".into(),
      ));
    }

    let affiliate = sv::Affiliate::new(self.db).require(affiliate_id).await?;

    let now = Utc::now().naive_utc();
    Ok(
      withdrawal_request::ActiveModel {
        id: Set(format!("WD-{}", Uuid::new_v4())),
        affiliate_id: Set(affiliate.id),
        affiliate_name: Set(affiliate.name),
        amount: Set(amount),
        status: Set(WithdrawalStatus::Pending),
        payment_proof_url: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
      }
      .insert(self.db)
      .await?,
    )
  }

  /// Mark a request Approved, regardless of its current status.
  ///
  /// The proof URL is only stored when a non-empty value is supplied;
  /// otherwise whatever was there before stays. `created_at` is never
  /// touched, `updated_at` is bumped.
  pub async fn approve(
    &self,
    id: &str,
    payment_proof_url: Option<String>,
  ) -> Result<withdrawal_request::Model> {
    let request = withdrawal_request::Entity::find_by_id(id)
      .one(self.db)
      .await?
      .ok_or(Error::WithdrawalNotFound)?;

    let mut request = withdrawal_request::ActiveModel {
      status: Set(WithdrawalStatus::Approved),
      updated_at: Set(Utc::now().naive_utc()),
      ..request.into()
    };
    if let Some(url) = payment_proof_url.filter(|url| !url.is_empty()) {
      request.payment_proof_url = Set(Some(url));
    }

    Ok(request.update(self.db).await?)
  }

  /// Mark a request Declined, regardless of its current status
  pub async fn decline(
    &self,
    id: &str,
  ) -> Result<withdrawal_request::Model> {
    let request = withdrawal_request::Entity::find_by_id(id)
      .one(self.db)
      .await?
      .ok_or(Error::WithdrawalNotFound)?;

    Ok(
      withdrawal_request::ActiveModel {
        status: Set(WithdrawalStatus::Declined),
        updated_at: Set(Utc::now().naive_utc()),
        ..request.into()
      }
      .update(self.db)
      .await?,
    )
  }

  /// Everything still waiting on an admin decision
  pub async fn pending(&self) -> Result<Vec<withdrawal_request::Model>> {
    Ok(
      withdrawal_request::Entity::find()
        .filter(
          withdrawal_request::Column::Status.eq(WithdrawalStatus::Pending),
        )
        .order_by_asc(withdrawal_request::Column::CreatedAt)
        .all(self.db)
        .await?,
    )
  }

  pub async fn for_affiliate(
    &self,
    affiliate_id: &str,
  ) -> Result<Vec<withdrawal_request::Model>> {
    Ok(
      withdrawal_request::Entity::find()
        .filter(withdrawal_request::Column::AffiliateId.eq(affiliate_id))
        .order_by_desc(withdrawal_request::Column::CreatedAt)
        .all(self.db)
        .await?,
    )
  }
}

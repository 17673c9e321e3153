use serde::Serialize;

use crate::{entity::affiliate, prelude::*};

#[derive(Debug, Serialize)]
pub struct ReferralCheck {
  pub valid: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub affiliate_id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub affiliate_name: Option<String>,
}

impl ReferralCheck {
  fn invalid() -> Self {
    Self { valid: false, affiliate_id: None, affiliate_name: None }
  }
}

pub struct Referral<'a> {
  db: &'a DatabaseConnection,
}

impl<'a> Referral<'a> {
  pub fn new(db: &'a DatabaseConnection) -> Self {
    Self { db }
  }

  /// Exact, case-sensitive lookup of a referral code.
  ///
  /// A miss (unknown, empty or whitespace-only code) is a normal
  /// `valid: false` answer, never an error. No side effects.
  pub async fn validate(&self, referral_code: &str) -> Result<ReferralCheck> {
    let affiliate = affiliate::Entity::find()
      .filter(affiliate::Column::ReferralCode.eq(referral_code))
      .one(self.db)
      .await?;

    Ok(match affiliate {
      Some(affiliate) => ReferralCheck {
        valid: true,
        affiliate_id: Some(affiliate.id),
        affiliate_name: Some(affiliate.name),
      },
      None => ReferralCheck::invalid(),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::sv::test_utils::test_db;

  #[tokio::test]
  async fn test_validate_known_code() {
    let db = test_db::setup().await;
    test_db::seed_affiliate(&db, "AFF001", "John Smith", "JOHN123").await;

    let check = Referral::new(&db).validate("JOHN123").await.unwrap();
    assert!(check.valid);
    assert_eq!(check.affiliate_id.as_deref(), Some("AFF001"));
    assert_eq!(check.affiliate_name.as_deref(), Some("John Smith"));
  }

  #[tokio::test]
  async fn test_validate_is_case_sensitive() {
    let db = test_db::setup().await;
    test_db::seed_affiliate(&db, "AFF001", "John Smith", "JOHN123").await;

    let check = Referral::new(&db).validate("john123").await.unwrap();
    assert!(!check.valid);
    assert!(check.affiliate_id.is_none());
    assert!(check.affiliate_name.is_none());
  }

  #[tokio::test]
  async fn test_validate_unknown_code() {
    let db = test_db::setup().await;
    test_db::seed_affiliate(&db, "AFF001", "John Smith", "JOHN123").await;

    let check = Referral::new(&db).validate("NOPE42").await.unwrap();
    assert!(!check.valid);
  }

  #[tokio::test]
  async fn test_validate_blank_code_is_a_plain_miss() {
    let db = test_db::setup().await;
    test_db::seed_affiliate(&db, "AFF001", "John Smith", "JOHN123").await;

    assert!(!Referral::new(&db).validate("").await.unwrap().valid);
    assert!(!Referral::new(&db).validate("   ").await.unwrap().valid);
  }
}

use crate::{entity::affiliate, prelude::*};

pub struct Affiliate<'a> {
  db: &'a DatabaseConnection,
}

impl<'a> Affiliate<'a> {
  pub fn new(db: &'a DatabaseConnection) -> Self {
    Self { db }
  }

  pub async fn by_id(&self, id: &str) -> Result<Option<affiliate::Model>> {
    let affiliate = affiliate::Entity::find_by_id(id).one(self.db).await?;
    Ok(affiliate)
  }

  /// Like [`by_id`](Self::by_id) but an unknown id is an error
  pub async fn require(&self, id: &str) -> Result<affiliate::Model> {
    self.by_id(id).await?.ok_or(Error::AffiliateNotFound)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::sv::test_utils::test_db;

  #[tokio::test]
  async fn test_by_id() {
    let db = test_db::setup().await;
    test_db::seed_affiliate(&db, "AFF001", "John Smith", "JOHN123").await;

    let affiliate =
      Affiliate::new(&db).by_id("AFF001").await.unwrap().unwrap();
    assert_eq!(affiliate.name, "John Smith");
    assert_eq!(affiliate.referral_code, "JOHN123");

    assert!(Affiliate::new(&db).by_id("AFF999").await.unwrap().is_none());
  }

  #[tokio::test]
  async fn test_require_unknown_affiliate() {
    let db = test_db::setup().await;

    let result = Affiliate::new(&db).require("AFF001").await;
    assert!(matches!(result, Err(Error::AffiliateNotFound)));
  }
}

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(Affiliates::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(Affiliates::Id)
              .string()
              .not_null()
              .primary_key(),
          )
          .col(ColumnDef::new(Affiliates::Name).string().not_null())
          .col(ColumnDef::new(Affiliates::Email).string().not_null())
          .col(ColumnDef::new(Affiliates::ReferralCode).string().not_null())
          .col(ColumnDef::new(Affiliates::Plan).string().not_null())
          .col(
            ColumnDef::new(Affiliates::TotalRevenue)
              .double()
              .not_null()
              .default(0.0),
          )
          .col(
            ColumnDef::new(Affiliates::TotalCommission)
              .double()
              .not_null()
              .default(0.0),
          )
          .col(
            ColumnDef::new(Affiliates::RecurringCustomers)
              .integer()
              .not_null()
              .default(0),
          )
          .col(
            ColumnDef::new(Affiliates::OneTimeCustomers)
              .integer()
              .not_null()
              .default(0),
          )
          .col(ColumnDef::new(Affiliates::CreatedAt).date_time().not_null())
          .to_owned(),
      )
      .await?;

    // Referral codes must be unique across affiliates
    manager
      .create_index(
        Index::create()
          .name("idx_affiliates_referral_code")
          .table(Affiliates::Table)
          .col(Affiliates::ReferralCode)
          .unique()
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .drop_index(
        Index::drop()
          .name("idx_affiliates_referral_code")
          .table(Affiliates::Table)
          .to_owned(),
      )
      .await?;

    manager
      .drop_table(Table::drop().table(Affiliates::Table).to_owned())
      .await
  }
}

#[derive(DeriveIden)]
pub enum Affiliates {
  Table,
  Id,
  Name,
  Email,
  ReferralCode,
  Plan,
  TotalRevenue,
  TotalCommission,
  RecurringCustomers,
  OneTimeCustomers,
  CreatedAt,
}

use sea_orm_migration::prelude::*;

use super::m20260825_000001_create_affiliates::Affiliates;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(WithdrawalRequests::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(WithdrawalRequests::Id)
              .string()
              .not_null()
              .primary_key(),
          )
          .col(
            ColumnDef::new(WithdrawalRequests::AffiliateId)
              .string()
              .not_null(),
          )
          .col(
            ColumnDef::new(WithdrawalRequests::AffiliateName)
              .string()
              .not_null(),
          )
          .col(
            ColumnDef::new(WithdrawalRequests::Amount).double().not_null(),
          )
          .col(
            ColumnDef::new(WithdrawalRequests::Status).string().not_null(),
          )
          .col(
            ColumnDef::new(WithdrawalRequests::PaymentProofUrl)
              .string()
              .null(),
          )
          .col(
            ColumnDef::new(WithdrawalRequests::CreatedAt)
              .date_time()
              .not_null(),
          )
          .col(
            ColumnDef::new(WithdrawalRequests::UpdatedAt)
              .date_time()
              .not_null(),
          )
          .foreign_key(
            ForeignKey::create()
              .name("fk_withdrawal_requests_affiliate")
              .from(WithdrawalRequests::Table, WithdrawalRequests::AffiliateId)
              .to(Affiliates::Table, Affiliates::Id)
              .on_delete(ForeignKeyAction::Cascade),
          )
          .to_owned(),
      )
      .await?;

    manager
      .create_index(
        Index::create()
          .name("idx_withdrawal_requests_affiliate")
          .table(WithdrawalRequests::Table)
          .col(WithdrawalRequests::AffiliateId)
          .to_owned(),
      )
      .await?;

    // The admin view filters on status constantly
    manager
      .create_index(
        Index::create()
          .name("idx_withdrawal_requests_status")
          .table(WithdrawalRequests::Table)
          .col(WithdrawalRequests::Status)
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .drop_table(Table::drop().table(WithdrawalRequests::Table).to_owned())
      .await
  }
}

#[derive(DeriveIden)]
pub enum WithdrawalRequests {
  Table,
  Id,
  AffiliateId,
  AffiliateName,
  Amount,
  Status,
  PaymentProofUrl,
  CreatedAt,
  UpdatedAt,
}

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
          .table(ReferredCustomers::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(ReferredCustomers::Id)
              .string()
              .not_null()
              .primary_key(),
          )
          .col(ColumnDef::new(ReferredCustomers::Name).string().not_null())
          .col(
            ColumnDef::new(ReferredCustomers::AffiliateId)
              .string()
              .not_null(),
          )
          .col(
            ColumnDef::new(ReferredCustomers::OrderAmount)
              .double()
              .not_null(),
          )
          .col(
            ColumnDef::new(ReferredCustomers::OrderType).string().not_null(),
          )
          .col(
            ColumnDef::new(ReferredCustomers::CommissionEarned)
              .double()
              .not_null(),
          )
          .col(
            ColumnDef::new(ReferredCustomers::CreatedAt)
              .date_time()
              .not_null(),
          )
          .foreign_key(
            ForeignKey::create()
              .name("fk_referred_customers_affiliate")
              .from(ReferredCustomers::Table, ReferredCustomers::AffiliateId)
              .to(Affiliates::Table, Affiliates::Id)
              .on_delete(ForeignKeyAction::Cascade),
          )
          .to_owned(),
      )
      .await?;

    manager
      .create_index(
        Index::create()
          .name("idx_referred_customers_affiliate")
          .table(ReferredCustomers::Table)
          .col(ReferredCustomers::AffiliateId)
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .drop_table(Table::drop().table(ReferredCustomers::Table).to_owned())
      .await
  }
}

#[derive(DeriveIden)]
pub enum ReferredCustomers {
  Table,
  Id,
  Name,
  AffiliateId,
  OrderAmount,
  OrderType,
  CommissionEarned,
  CreatedAt,
}

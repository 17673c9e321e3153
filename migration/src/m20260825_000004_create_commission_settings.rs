use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    // Single-row table: the row with id = 1 is created lazily on the
    // first settings update, reads fall back to hard-coded defaults.
    manager
      .create_table(
        Table::create()
          .table(CommissionSettings::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(CommissionSettings::Id)
              .integer()
              .not_null()
              .primary_key(),
          )
          .col(
            ColumnDef::new(CommissionSettings::RecurringPercentage)
              .double()
              .not_null()
              .default(10.0),
          )
          .col(
            ColumnDef::new(CommissionSettings::OneTimePercentage)
              .double()
              .not_null()
              .default(5.0),
          )
          .col(
            ColumnDef::new(CommissionSettings::UpdatedAt)
              .date_time()
              .not_null(),
          )
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .drop_table(Table::drop().table(CommissionSettings::Table).to_owned())
      .await
  }
}

#[derive(DeriveIden)]
pub enum CommissionSettings {
  Table,
  Id,
  RecurringPercentage,
  OneTimePercentage,
  UpdatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Room::Table)
                    .if_not_exists()
                    .col(pk_auto(Room::Id))
                    .col(string_uniq(Room::RoomNumber))
                    .col(string(Room::Kind))
                    .col(decimal(Room::PricePerNight))
                    .col(integer(Room::MaxGuests))
                    .col(text_null(Room::Description))
                    // JSON array of amenity tags, e.g. ["wifi","minibar"]
                    .col(text(Room::Amenities).default("[]"))
                    .col(string(Room::Status))
                    .col(
                        timestamp(Room::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Room::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(Room::DeletedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Room::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Room {
    Table,
    Id,
    RoomNumber,
    Kind,
    PricePerNight,
    MaxGuests,
    Description,
    Amenities,
    Status,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

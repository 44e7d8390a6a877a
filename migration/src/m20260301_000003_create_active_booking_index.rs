use sea_orm_migration::prelude::*;

/// Partial unique index guarding the (level, date, slot) triple of active bookings.
///
/// Written as raw SQL since the schema builder cannot express the `WHERE` clause.
/// Cancelled rows are excluded so a slot can be booked again after cancellation.
pub const ACTIVE_BOOKING_INDEX_SQL: &str = "CREATE UNIQUE INDEX IF NOT EXISTS \
     idx_booking_active_slot ON booking (level, date, slot) WHERE status = 'active'";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(ACTIVE_BOOKING_INDEX_SQL)
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_booking_active_slot")
            .await?;

        Ok(())
    }
}

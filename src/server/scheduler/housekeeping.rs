use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    data::{booking::BookingRepository, refresh_token::RefreshTokenRepository},
    error::AppError,
};

/// Starts the housekeeping scheduler.
///
/// Runs every ten minutes and:
/// - marks confirmed bookings whose checkout has passed as completed
/// - deletes refresh tokens that can never be redeemed again
///
/// A failed run is logged and retried on the next tick; it never takes the
/// server down.
pub async fn start_scheduler(db: DatabaseConnection) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();

    let job = Job::new_async("0 */10 * * * *", move |_uuid, _lock| {
        let db = job_db.clone();

        Box::pin(async move {
            if let Err(e) = run_housekeeping(&db).await {
                tracing::error!("Housekeeping run failed: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Housekeeping scheduler started");

    Ok(())
}

async fn run_housekeeping(db: &DatabaseConnection) -> Result<(), AppError> {
    let now = Utc::now();

    let completed = BookingRepository::new(db).complete_past(now).await?;
    if completed > 0 {
        tracing::info!("Completed {} past-checkout bookings", completed);
    }

    let purged = RefreshTokenRepository::new(db).purge_dead(now).await?;
    if purged > 0 {
        tracing::info!("Purged {} dead refresh tokens", purged);
    }

    Ok(())
}

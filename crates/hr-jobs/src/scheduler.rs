//! Daily scheduler loop
//!
//! Sleeps until the configured local hour, runs the day's tasks, and goes
//! back to sleep. Task failures are logged and never stop the loop.

use chrono::{DateTime, Duration as ChronoDuration, Local, NaiveTime, TimeZone};
use hr_common::AppConfig;
use hr_service::ServiceContext;
use tracing::{error, info};

use crate::tasks::{reminders, reports};

/// Run the daily tick loop forever
pub async fn run_daily(ctx: &ServiceContext, config: &AppConfig) {
    loop {
        let delay = delay_until_next_run(Local::now(), config.jobs.daily_run_hour);
        info!(seconds = delay.as_secs(), "Sleeping until next daily tick");
        tokio::time::sleep(delay).await;

        run_tick(ctx, config).await;
    }
}

/// Run one tick of the daily tasks
pub async fn run_tick(ctx: &ServiceContext, config: &AppConfig) {
    info!("Daily tick starting");

    if let Err(e) = reminders::send_birthday_reminders(ctx, config.jobs.reminder_window_days).await
    {
        error!(error = %e, "Birthday reminders failed");
    }
    if let Err(e) =
        reminders::send_anniversary_reminders(ctx, config.jobs.reminder_window_days).await
    {
        error!(error = %e, "Anniversary reminders failed");
    }
    if let Err(e) = reports::generate_headcount_report(ctx, &config.reports.output_dir).await {
        error!(error = %e, "Headcount report failed");
    }
    if let Err(e) = reports::generate_salary_band_report(ctx, &config.reports.output_dir).await {
        error!(error = %e, "Salary band report failed");
    }

    info!("Daily tick finished");
}

/// Time to sleep from `now` until the next occurrence of `hour:00` local
fn delay_until_next_run(now: DateTime<Local>, hour: u32) -> std::time::Duration {
    let today_run = now
        .date_naive()
        .and_time(NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or_default());
    let mut next = Local
        .from_local_datetime(&today_run)
        .earliest()
        .unwrap_or(now);
    if next <= now {
        next += ChronoDuration::days(1);
    }
    (next - now).to_std().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Local> {
        Local
            .from_local_datetime(
                &NaiveDate::from_ymd_opt(y, m, d)
                    .unwrap()
                    .and_hms_opt(h, min, 0)
                    .unwrap(),
            )
            .earliest()
            .unwrap()
    }

    #[test]
    fn test_next_run_later_today() {
        let delay = delay_until_next_run(local(2025, 6, 10, 4, 0), 6);
        assert_eq!(delay.as_secs(), 2 * 60 * 60);
    }

    #[test]
    fn test_next_run_rolls_to_tomorrow() {
        let delay = delay_until_next_run(local(2025, 6, 10, 7, 30), 6);
        assert_eq!(delay.as_secs(), 22 * 60 * 60 + 30 * 60);
    }
}

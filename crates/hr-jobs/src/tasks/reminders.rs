//! Birthday and work-anniversary reminders
//!
//! Scans for dates falling inside the look-ahead window and logs one line
//! per upcoming event. Delivery to email or chat is a plug-in point; the
//! scan and the schedule are the part that belongs here.

use chrono::{Datelike, Local, NaiveDate};
use hr_service::{ServiceContext, ServiceResult};
use tracing::{info, instrument};

/// Log upcoming birthdays within the window
#[instrument(skip(ctx))]
pub async fn send_birthday_reminders(ctx: &ServiceContext, window_days: i64) -> ServiceResult<()> {
    let today = Local::now().date_naive();
    let until = today + chrono::Duration::days(window_days);

    let employees = ctx.employee_repo().list_all().await?;
    let mut upcoming: Vec<(NaiveDate, String)> = employees
        .iter()
        .filter_map(|e| {
            e.date_of_birth
                .map(|dob| (next_occurrence(dob, today), e.full_name.clone()))
        })
        .filter(|(next, _)| *next <= until)
        .collect();
    upcoming.sort();

    if upcoming.is_empty() {
        info!(window_days, "No birthdays in the window");
        return Ok(());
    }

    for (date, name) in upcoming {
        info!(employee = %name, date = %date, "Upcoming birthday");
    }
    Ok(())
}

/// Log upcoming work anniversaries within the window
#[instrument(skip(ctx))]
pub async fn send_anniversary_reminders(
    ctx: &ServiceContext,
    window_days: i64,
) -> ServiceResult<()> {
    let today = Local::now().date_naive();
    let until = today + chrono::Duration::days(window_days);

    let employees = ctx.employee_repo().list_all().await?;
    let mut upcoming: Vec<(NaiveDate, i32, String)> = employees
        .iter()
        .map(|e| {
            let next = next_occurrence(e.date_hired, today);
            (next, e.years_of_service(next), e.full_name.clone())
        })
        .filter(|(next, _, _)| *next <= until)
        .collect();
    upcoming.sort();

    if upcoming.is_empty() {
        info!(window_days, "No anniversaries in the window");
        return Ok(());
    }

    for (date, years, name) in upcoming {
        info!(employee = %name, years, date = %date, "Upcoming anniversary");
    }
    Ok(())
}

/// Next calendar occurrence of an annual date on or after `from`
///
/// Feb 29 clamps to Feb 28 in non-leap years.
fn next_occurrence(original: NaiveDate, from: NaiveDate) -> NaiveDate {
    let in_year = |year: i32| {
        let day = original.day().min(days_in_month(year, original.month()));
        // day is clamped into range, so this cannot fail
        NaiveDate::from_ymd_opt(year, original.month(), day)
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(from))
    };

    let this_year = in_year(from.year());
    if this_year >= from {
        this_year
    } else {
        in_year(from.year() + 1)
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month_start = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next_month_start
        .and_then(|d| d.pred_opt())
        .map_or(28, |d| d.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_occurrence_later_this_year() {
        assert_eq!(
            next_occurrence(date(1990, 9, 12), date(2025, 6, 1)),
            date(2025, 9, 12)
        );
    }

    #[test]
    fn test_occurrence_rolls_to_next_year() {
        assert_eq!(
            next_occurrence(date(1990, 3, 5), date(2025, 6, 1)),
            date(2026, 3, 5)
        );
    }

    #[test]
    fn test_occurrence_today_counts() {
        assert_eq!(
            next_occurrence(date(1990, 6, 1), date(2025, 6, 1)),
            date(2025, 6, 1)
        );
    }

    #[test]
    fn test_leap_day_clamps_in_common_years() {
        assert_eq!(
            next_occurrence(date(1992, 2, 29), date(2025, 1, 15)),
            date(2025, 2, 28)
        );
        assert_eq!(
            next_occurrence(date(1992, 2, 29), date(2024, 1, 15)),
            date(2024, 2, 29)
        );
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2025, 12), 31);
    }
}

//! Scheduled task implementations

pub mod reminders;
pub mod reports;

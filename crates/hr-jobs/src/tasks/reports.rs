//! Periodic CSV report files
//!
//! Renders the headcount and salary-band reports through the report service
//! and writes them under the configured output directory. The headcount
//! file is named by month, so re-runs within a month overwrite in place.

use std::path::{Path, PathBuf};

use chrono::Local;
use hr_service::{ReportService, ServiceContext, ServiceError, ServiceResult};
use tracing::{info, instrument};

/// Write the per-department headcount report for the current month
#[instrument(skip(ctx))]
pub async fn generate_headcount_report(
    ctx: &ServiceContext,
    output_dir: &str,
) -> ServiceResult<PathBuf> {
    let content = ReportService::new(ctx).headcount_csv().await?;
    let filename = format!("headcount_{}.csv", Local::now().format("%Y%m"));
    let path = write_report(output_dir, &filename, &content).await?;
    info!(path = %path.display(), "Headcount report generated");
    Ok(path)
}

/// Write the salary-band distribution report for today
#[instrument(skip(ctx))]
pub async fn generate_salary_band_report(
    ctx: &ServiceContext,
    output_dir: &str,
) -> ServiceResult<PathBuf> {
    let content = ReportService::new(ctx).salary_band_csv().await?;
    let filename = format!("salary_bands_{}.csv", Local::now().format("%Y%m%d"));
    let path = write_report(output_dir, &filename, &content).await?;
    info!(path = %path.display(), "Salary band report generated");
    Ok(path)
}

async fn write_report(output_dir: &str, filename: &str, content: &str) -> ServiceResult<PathBuf> {
    let dir = Path::new(output_dir);
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| ServiceError::internal(format!("creating {}: {e}", dir.display())))?;

    let path = dir.join(filename);
    tokio::fs::write(&path, content)
        .await
        .map_err(|e| ServiceError::internal(format!("writing {}: {e}", path.display())))?;

    Ok(path)
}

//! Summary of a prepare run

use std::path::Path;

use console::Style;

use crate::domain::{FileStatus, PatchReport};
use crate::operations::PrepareSummary;

/// Print per-file outcomes relative to `root`, followed by the bundle result
pub fn print(summary: &PrepareSummary, root: &Path, dry_run: bool) {
    println!(
        "{} {} (Node.js {})",
        Style::new().bold().apply_to("Platform:"),
        summary.platform,
        summary.runtime.version
    );

    for report in &summary.reports {
        println!("  {}", report_line(report, root, dry_run));
    }

    let changed = summary
        .reports
        .iter()
        .filter(|r| r.status.is_change())
        .count();
    println!(
        "  {}",
        Style::new().dim().apply_to(format!(
            "{changed} of {} file(s) {}",
            summary.reports.len(),
            if dry_run { "would change" } else { "changed" }
        ))
    );

    if summary.bundled {
        println!("  {}", Style::new().green().apply_to("bundle created"));
    }
}

fn report_line(report: &PatchReport, root: &Path, dry_run: bool) -> String {
    let label = match (report.status, dry_run) {
        (FileStatus::Patched, true) => "would patch".to_string(),
        (status, _) => status.to_string(),
    };
    let style = match report.status {
        FileStatus::Patched => Style::new().green(),
        FileStatus::AlreadyPatched => Style::new().cyan(),
        FileStatus::Skipped => Style::new().dim(),
    };
    let path = report.path.strip_prefix(root).unwrap_or(&report.path);

    format!(
        "{:<26} {}",
        style.apply_to(label),
        crate::path_utils::to_forward_slashes(path)
    )
}

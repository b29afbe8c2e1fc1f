use std::path::PathBuf;

use crate::classify::MimeClassifier;
use crate::config::Config;
use crate::error::AppError;
use crate::inspect::inspect_file;
use crate::model::FileReport;
use crate::path::{collect_files, display_path, resolve_roots};
use crate::size::{SizeFormatter, validate_decimal_places};

pub struct InfoOptions {
    pub paths: Vec<PathBuf>,
    pub decimals: Option<i32>,
    pub recursive: bool,
    pub json: bool,
}

pub fn execute_info(options: InfoOptions) -> Result<Vec<FileReport>, AppError> {
    let config = Config::load()?;
    let decimals = config.resolve_decimals(options.decimals);
    validate_decimal_places(decimals)?;
    let formatter = config.formatter()?;
    let exclude = config.compile_excludes()?;

    let roots = resolve_roots(&options.paths);
    let files = collect_files(&roots, options.recursive, exclude.as_ref());

    let mut reports = Vec::with_capacity(files.len());
    let mut failed = 0;
    for file in &files {
        match inspect_file(file, &MimeClassifier, &formatter, decimals) {
            Ok(report) => reports.push(report),
            Err(err) => {
                eprintln!("Skipping {}: {}", display_path(file), err);
                failed += 1;
            }
        }
    }

    if options.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else if failed == 0 || !reports.is_empty() {
        print_reports(&reports, &formatter, decimals)?;
    }

    if failed > 0 {
        return Err(AppError::Incomplete(failed));
    }
    Ok(reports)
}

fn print_reports(
    reports: &[FileReport],
    formatter: &SizeFormatter,
    decimals: i32,
) -> Result<(), AppError> {
    if reports.is_empty() {
        println!("No files found.");
        return Ok(());
    }

    for report in reports {
        println!("{}", display_path(&report.path));
        println!("  Type:         {}", report.type_label());
        if !report.content_type.is_empty() {
            println!("  Content type: {}", report.content_type);
        }
        if report.is_empty() {
            println!("  Size:         {} (empty)", report.size);
        } else {
            println!("  Size:         {} ({} bytes)", report.size, report.length);
        }
    }

    if reports.len() > 1 {
        let total = reports.iter().fold(0u64, |acc, report| acc.saturating_add(report.length));
        println!("Total: {} across {} file(s)", formatter.format(total, decimals)?, reports.len());
    }
    Ok(())
}

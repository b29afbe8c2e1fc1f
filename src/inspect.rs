use std::fs;
use std::io;
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::classify::{FileClassifier, mime_content_type};
use crate::error::AppError;
use crate::model::FileReport;
use crate::size::{SizeFormatter, format_size, validate_decimal_places};

/// Length in bytes of the regular file at `path`.
pub fn file_length(path: &Path) -> Result<u64, AppError> {
    match fs::metadata(path) {
        Ok(metadata) if metadata.is_file() => Ok(metadata.len()),
        Ok(_) => Err(AppError::FileNotFound(path.to_path_buf())),
        Err(err) => Err(not_found_or_io(path, err)),
    }
}

/// Human-readable size of the file at `path`.
pub fn file_size_suffix(path: &Path, decimal_places: i32) -> Result<String, AppError> {
    validate_decimal_places(decimal_places)?;
    format_size(file_length(path)?, decimal_places)
}

/// Uppercase hexadecimal rendering of the file's contents, without separators.
pub fn to_hex_string(path: &Path) -> Result<String, AppError> {
    let bytes = read_file(path)?;
    Ok(hex::encode_upper(bytes))
}

/// Write the hex rendering of `path` to `output`, replacing any existing file.
/// Nothing is written when the source is empty.
pub fn save_as_hex(path: &Path, output: &Path) -> Result<(), AppError> {
    let contents = to_hex_string(path)?;
    if contents.is_empty() {
        log::debug!("{} is empty, not writing {}", path.display(), output.display());
        return Ok(());
    }
    fs::write(output, contents)?;
    log::debug!("Wrote hex dump of {} to {}", path.display(), output.display());
    Ok(())
}

/// Standard padded base64 rendering of the file's contents.
pub fn convert_to_base64(path: &Path) -> Result<String, AppError> {
    let bytes = read_file(path)?;
    Ok(STANDARD.encode(bytes))
}

pub fn inspect_file(
    path: &Path,
    classifier: &dyn FileClassifier,
    formatter: &SizeFormatter,
    decimal_places: i32,
) -> Result<FileReport, AppError> {
    validate_decimal_places(decimal_places)?;
    let length = file_length(path)?;
    let file_type = classifier.type_name(path);
    let content_type = mime_content_type(&file_type);
    let size = formatter.format(length, decimal_places)?;

    Ok(FileReport { path: path.to_path_buf(), file_type, content_type, length, size })
}

fn read_file(path: &Path) -> Result<Vec<u8>, AppError> {
    if !path.is_file() {
        return Err(AppError::FileNotFound(path.to_path_buf()));
    }
    log::debug!("Reading {}", path.display());
    fs::read(path).map_err(|err| not_found_or_io(path, err))
}

fn not_found_or_io(path: &Path, err: io::Error) -> AppError {
    if err.kind() == io::ErrorKind::NotFound {
        AppError::FileNotFound(path.to_path_buf())
    } else {
        AppError::Io(err)
    }
}

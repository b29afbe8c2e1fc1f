use std::fs;
use std::path::PathBuf;

use crate::error::AppError;
use crate::inspect::{convert_to_base64, file_length, save_as_hex, to_hex_string};
use crate::path::display_path;

pub struct EncodeOptions {
    pub path: PathBuf,
    pub output: Option<PathBuf>,
}

pub fn execute_hex(options: EncodeOptions) -> Result<(), AppError> {
    let Some(output) = options.output else {
        println!("{}", to_hex_string(&options.path)?);
        return Ok(());
    };

    if file_length(&options.path)? == 0 {
        println!("{} is empty. Nothing was written.", display_path(&options.path));
        return Ok(());
    }

    save_as_hex(&options.path, &output)?;
    println!(
        "Saved hex dump of {} to {}.",
        display_path(&options.path),
        display_path(&output)
    );
    Ok(())
}

pub fn execute_base64(options: EncodeOptions) -> Result<(), AppError> {
    let encoded = convert_to_base64(&options.path)?;
    match options.output {
        Some(output) => {
            fs::write(&output, encoded)?;
            println!(
                "Saved base64 encoding of {} to {}.",
                display_path(&options.path),
                display_path(&output)
            );
        }
        None => println!("{encoded}"),
    }
    Ok(())
}

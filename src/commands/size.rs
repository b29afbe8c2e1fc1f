use crate::config::Config;
use crate::error::AppError;
use crate::size::{parse_byte_count, validate_decimal_places};

pub struct SizeOptions {
    pub bytes: String,
    pub decimals: Option<i32>,
}

pub fn execute_size(options: SizeOptions) -> Result<String, AppError> {
    let config = Config::load()?;
    let decimals = config.resolve_decimals(options.decimals);
    validate_decimal_places(decimals)?;

    let byte_count = parse_byte_count(&options.bytes)?;
    let formatted = config.formatter()?.format(byte_count, decimals)?;
    println!("{formatted}");
    Ok(formatted)
}

pub mod config_cmd;
pub mod encode;
pub mod info;
pub mod size;

pub use config_cmd::execute_config;
pub use encode::{execute_base64, execute_hex};
pub use info::execute_info;
pub use size::execute_size;

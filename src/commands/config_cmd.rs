use std::path::Path;
use std::process::Command;

use crate::config::{Config, ConfigChanges, config_file_path, ensure_config_file};
use crate::error::AppError;
use crate::path::display_path;

pub struct ConfigOptions {
    pub show_path: bool,
    pub edit: bool,
    pub changes: ConfigChanges,
}

pub fn execute_config(options: ConfigOptions) -> Result<(), AppError> {
    let ConfigOptions { show_path, edit, changes } = options;

    if !changes.is_empty() {
        let mut config = Config::load()?;
        for line in config.apply(&changes)? {
            println!("{line}");
        }
        config.save()?;
    }

    if edit {
        open_editor(&ensure_config_file()?)?;
    }

    // A bare `config` shows where the file lives.
    if show_path || (changes.is_empty() && !edit) {
        println!("Configuration file: {}", display_path(&config_file_path()?));
    }

    Ok(())
}

fn editor_command() -> String {
    ["EDITOR", "VISUAL"]
        .iter()
        .find_map(|key| std::env::var(key).ok().filter(|value| !value.trim().is_empty()))
        .unwrap_or_else(|| "nano".to_string())
}

fn open_editor(path: &Path) -> Result<(), AppError> {
    let editor = editor_command();
    log::debug!("Opening {} with {}", path.display(), editor);

    let status = Command::new(&editor)
        .arg(path)
        .status()
        .map_err(|err| AppError::Editor(format!("{editor}: {err}")))?;

    if !status.success() {
        return Err(AppError::Editor(format!("{editor} exited with status {status}")));
    }
    Ok(())
}

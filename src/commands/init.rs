use crate::config::{CONFIG_FILE_NAME, DEFAULT_CONFIG_TEMPLATE};
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub fn init_config(force: bool) -> Result<()> {
    let config_path = init_config_in(Path::new("."), force)?;
    println!("Created {} configuration file", config_path.display());
    Ok(())
}

/// Write the default config into `dir` and return its path.
pub fn init_config_in(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG_TEMPLATE)?;
    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp = TempDir::new().unwrap();
        let path = init_config_in(temp.path(), false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG_TEMPLATE);

        fs::write(&path, "# edited\n").unwrap();
        assert!(init_config_in(temp.path(), false).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "# edited\n");

        init_config_in(temp.path(), true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG_TEMPLATE);
    }
}

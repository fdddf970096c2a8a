use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GlasstockConfig {
    pub database: Option<String>,
    pub log_file: Option<String>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("glasstock.toml")
}

pub fn default_database_path_in(base: &Path) -> PathBuf {
    base.join(".glasstock").join("glasstock.db")
}

pub fn default_log_path_in(base: &Path) -> PathBuf {
    base.join(".glasstock").join("glasstock.log")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<GlasstockConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: GlasstockConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &GlasstockConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

pub fn ensure_db_dir(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_config(Some(&dir.path().join("glasstock.toml"))).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_config_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("glasstock.toml");

        let config = GlasstockConfig {
            database: Some("inventory.db".to_string()),
            log_file: None,
        };
        write_config(&path, &config, false).unwrap();

        let loaded = load_config(Some(&path)).unwrap().unwrap();
        assert_eq!(loaded.database.as_deref(), Some("inventory.db"));

        let err = write_config(&path, &config, false).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }
}

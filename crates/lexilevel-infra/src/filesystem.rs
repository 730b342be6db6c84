//! Data directory resolution.

use std::path::PathBuf;

/// Resolve the data directory that holds `lexilevel.db` and `config.toml`.
///
/// `LEXILEVEL_DATA_DIR` wins; otherwise `~/.lexilevel`, falling back to a
/// relative `.lexilevel` when no home directory is known.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("LEXILEVEL_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".lexilevel");
    }

    PathBuf::from(".lexilevel")
}

/// SQLite URL for the database inside `data_dir`, created on first use.
pub fn database_url(data_dir: &std::path::Path) -> String {
    format!(
        "sqlite://{}?mode=rwc",
        data_dir.join("lexilevel.db").display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_url() {
        let url = database_url(std::path::Path::new("/tmp/lx"));
        assert_eq!(url, "sqlite:///tmp/lx/lexilevel.db?mode=rwc");
    }

    #[test]
    fn test_resolve_data_dir_ends_with_name() {
        if std::env::var("LEXILEVEL_DATA_DIR").is_err() {
            assert!(resolve_data_dir().ends_with(".lexilevel"));
        }
    }
}

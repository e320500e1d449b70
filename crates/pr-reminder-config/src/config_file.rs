use std::path::{Path, PathBuf};

/// Config file name looked up in the CWD and the home directory
pub const CONFIG_FILE: &str = ".pr-reminder.toml";

/// Environment variable pointing at an explicit config file
pub const ENV_CONFIG_PATH: &str = "PR_REMINDER_CONFIG";

/// Find the config file to load
///
/// Searches in order:
/// 1. The path in `PR_REMINDER_CONFIG`, if set (returned even if missing,
///    so the caller reports the path the user asked for)
/// 2. `.pr-reminder.toml` in the current working directory
/// 3. `.pr-reminder.toml` in the home directory
pub fn locate_config_file() -> Option<PathBuf> {
    locate_in(
        std::env::var_os(ENV_CONFIG_PATH).map(PathBuf::from),
        Path::new(CONFIG_FILE),
        get_home_config_path(),
    )
}

fn locate_in(
    explicit: Option<PathBuf>,
    local: &Path,
    home: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        log::debug!("Using config path from {}", ENV_CONFIG_PATH);
        return Some(path);
    }

    if local.is_file() {
        log::debug!("Found config at {}", local.display());
        return Some(local.to_path_buf());
    }

    home.filter(|path| path.is_file()).inspect(|path| {
        log::debug!("Found config at {}", path.display());
    })
}

/// Get the path to the config file in the home directory
///
/// Returns ~/.pr-reminder.toml when a home directory can be determined.
fn get_home_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins_even_if_missing() {
        let explicit = PathBuf::from("/definitely/not/here.toml");
        let found = locate_in(Some(explicit.clone()), Path::new(CONFIG_FILE), None);
        assert_eq!(found, Some(explicit));
    }

    #[test]
    fn test_nothing_found() {
        let found = locate_in(
            None,
            Path::new("/definitely/not/here.toml"),
            Some(PathBuf::from("/also/not/here.toml")),
        );
        assert_eq!(found, None);
    }

    #[test]
    fn test_home_fallback() {
        let dir = std::env::temp_dir().join(format!(
            "pr-reminder-config-home-{}-{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        let home_file = dir.join(CONFIG_FILE);
        std::fs::write(&home_file, "company = \"acme\"").unwrap();

        let found = locate_in(
            None,
            Path::new("/definitely/not/here.toml"),
            Some(home_file.clone()),
        );

        std::fs::remove_dir_all(&dir).unwrap();
        assert_eq!(found, Some(home_file));
        assert!(!dir.exists());
    }
}

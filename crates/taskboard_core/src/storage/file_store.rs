use crate::error::AppError;
use crate::storage::TextStore;
use std::path::PathBuf;

const STORE_DIR_NAME: &str = "taskboard";
const STORE_ENV_VAR: &str = "TASKBOARD_STORE_DIR";

pub fn store_dir() -> Result<PathBuf, AppError> {
    if let Ok(path) = std::env::var(STORE_ENV_VAR)
        && !path.trim().is_empty()
    {
        return Ok(PathBuf::from(path));
    }

    if cfg!(windows) {
        let appdata =
            std::env::var("APPDATA").map_err(|_| AppError::invalid_data("APPDATA is not set"))?;
        Ok(PathBuf::from(appdata).join(STORE_DIR_NAME))
    } else {
        let home = std::env::var("HOME").map_err(|_| AppError::invalid_data("HOME is not set"))?;
        Ok(PathBuf::from(home).join(".config").join(STORE_DIR_NAME))
    }
}

// One file per key under a single directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::new(store_dir()?))
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl TextStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let path = self.entry_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let content =
            std::fs::read_to_string(&path).map_err(|err| AppError::io(err.to_string()))?;
        Ok(Some(content))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        std::fs::create_dir_all(&self.dir).map_err(|err| AppError::io(err.to_string()))?;

        let path = self.entry_path(key);
        std::fs::write(&path, value).map_err(|err| AppError::io(err.to_string()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(&path, permissions)
                .map_err(|err| AppError::io(err.to_string()))?;
        }

        Ok(())
    }
}

use crate::{
    core::logo::{LogoStore, LogoUpload, LOGO_DIR},
    err,
    error::RosterError,
    map_err,
};
use std::path::PathBuf;
use tracing::{debug, info};
use uuid::Uuid;

/// FS based implementation of a [LogoStore].
/// Logos are written to `<base>/logos/<uuid>.<ext>`.
#[derive(Debug, Clone)]
pub struct FsLogoStore {
    /// The public storage root.
    base: PathBuf,
}

impl FsLogoStore {
    /// Create the store, creating the logo directory under `path` if necessary.
    ///
    /// * `path`: The public storage root.
    pub fn new(path: &str) -> Result<Self, RosterError> {
        let base = PathBuf::from(path);

        map_err!(std::fs::create_dir_all(base.join(LOGO_DIR)));

        let base = map_err!(base.canonicalize());

        info!("Initialising logo store at {}", base.display());

        Ok(Self { base })
    }

    /// Resolve a stored relative path to its location on disk.
    /// Only paths of the form `logos/<file>` are accepted.
    fn resolve(&self, path: &str) -> Result<PathBuf, RosterError> {
        let Some((dir, file)) = path.split_once('/') else {
            return err!(InvalidPath, "not a logo path: {path}");
        };

        if dir != LOGO_DIR
            || file.is_empty()
            || file == "."
            || file == ".."
            || file.contains(['/', '\\'])
        {
            return err!(InvalidPath, "not a logo path: {path}");
        }

        Ok(self.base.join(LOGO_DIR).join(file))
    }
}

impl LogoStore for FsLogoStore {
    async fn write(&self, logo: &LogoUpload) -> Result<String, RosterError> {
        let Some(ext) = logo.extension() else {
            return err!(InvalidFile, "missing extension: {}", logo.file_name);
        };

        let path = format!("{LOGO_DIR}/{}.{ext}", Uuid::new_v4());
        let full = self.base.join(&path);

        debug!("Writing {}", full.display());
        map_err!(tokio::fs::write(&full, &logo.bytes).await);

        Ok(path)
    }

    async fn read(&self, path: &str) -> Result<Vec<u8>, RosterError> {
        let full = self.resolve(path)?;
        debug!("Reading {}", full.display());
        Ok(map_err!(tokio::fs::read(full).await))
    }

    async fn delete(&self, path: &str) -> Result<(), RosterError> {
        let full = self.resolve(path)?;
        debug!("Removing {}", full.display());
        Ok(map_err!(tokio::fs::remove_file(full).await))
    }
}

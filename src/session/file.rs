//! Session file persistence.

use std::collections::BTreeMap;
use std::env;
use std::fs::{self, DirBuilder};
use std::io::{self, ErrorKind, Write};
use std::os::unix::fs::{DirBuilderExt, MetadataExt, PermissionsExt};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::{Result, SessionStore};

/// JSON object file keyed to the current terminal session.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store for the calling process's terminal session.
    pub fn for_current_session() -> Result<Self> {
        let dir = session_dir();
        ensure_private_dir(&dir)?;
        let sid = unsafe { libc::getsid(0) };
        Ok(Self::at(session_file(&dir, sid)?))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };

        if data.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&data)?)
    }

    /// Write through a fresh randomly named file (created 0600 with
    /// `O_EXCL`), then rename it over the session file.
    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;

        tmp.write_all(serde_json::to_string(entries)?.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }

    #[cfg(test)]
    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.read_all()?;
        if entries.remove(key).is_some() {
            self.write_all(&entries)?;
        }
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

/// Directory holding session files and the log.
///
/// `GENPASS_SESSION_DIR`, else `$XDG_RUNTIME_DIR/genpass`, else a per-user
/// directory under the system temp dir.
pub fn session_dir() -> PathBuf {
    if let Ok(dir) = env::var("GENPASS_SESSION_DIR")
        && !dir.is_empty()
    {
        return PathBuf::from(dir);
    }

    if let Ok(runtime) = env::var("XDG_RUNTIME_DIR")
        && !runtime.is_empty()
    {
        return Path::new(&runtime).join("genpass");
    }

    let uid = unsafe { libc::getuid() };
    env::temp_dir().join(format!("genpass-{uid}"))
}

/// File for session `sid`. A negative id is the `getsid` failure value.
fn session_file(dir: &Path, sid: libc::pid_t) -> io::Result<PathBuf> {
    if sid < 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(dir.join(format!("session-{sid}.json")))
}

/// Create `dir` as 0700 if missing, then refuse it unless it is a real
/// directory owned by the current user and closed to group and others.
pub fn ensure_private_dir(dir: &Path) -> io::Result<()> {
    match DirBuilder::new().recursive(true).mode(0o700).create(dir) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {}
        Err(e) => return Err(e),
    }

    let meta = fs::symlink_metadata(dir)?;
    let uid = unsafe { libc::getuid() };
    if !meta.file_type().is_dir() {
        return Err(unsafe_dir(dir, "not a directory"));
    }
    if meta.uid() != uid {
        return Err(unsafe_dir(dir, "owned by another user"));
    }
    if meta.permissions().mode() & 0o077 != 0 {
        return Err(unsafe_dir(dir, "accessible to other users"));
    }
    Ok(())
}

fn unsafe_dir(dir: &Path, reason: &str) -> io::Error {
    io::Error::new(
        ErrorKind::PermissionDenied,
        format!("refusing {}: {reason}", dir.display()),
    )
}

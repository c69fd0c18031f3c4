//! Log setup. Output goes to a file so it never lands on the TUI.

use std::fs::{File, OpenOptions};
use std::io;
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};

use env_logger::{Builder, Env, Target};

use crate::session;

const LOG_FILTER_ENV: &str = "GENPASS_LOG";
const DEFAULT_FILTER: &str = "warn";
const LOG_FILE: &str = "genpass.log";

/// Install the global logger writing to `<dir>/genpass.log`.
pub fn init(dir: &Path) -> io::Result<PathBuf> {
    let (file, path) = open_log(dir)?;

    Builder::from_env(Env::new().filter_or(LOG_FILTER_ENV, DEFAULT_FILTER))
        .format_timestamp_secs()
        .format_module_path(true)
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(io::Error::other)?;

    Ok(path)
}

/// Open the log for appending. A symlink in place of the log is refused.
fn open_log(dir: &Path) -> io::Result<(File, PathBuf)> {
    session::ensure_private_dir(dir)?;
    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .mode(0o600)
        .custom_flags(libc::O_NOFOLLOW)
        .open(&path)?;
    Ok((file, path))
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use std::os::unix::fs::{PermissionsExt, symlink};

    #[test]
    fn log_file_is_owner_only_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let (mut file, path) = open_log(dir.path()).unwrap();
        file.write_all(b"one\n").unwrap();
        let (mut file, _) = open_log(dir.path()).unwrap();
        file.write_all(b"two\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn planted_log_link_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let victim = dir.path().join("victim.txt");
        fs::write(&victim, "keep me").unwrap();
        symlink(&victim, dir.path().join(LOG_FILE)).unwrap();

        assert!(open_log(dir.path()).is_err());
        assert_eq!(fs::read_to_string(&victim).unwrap(), "keep me");
    }
}

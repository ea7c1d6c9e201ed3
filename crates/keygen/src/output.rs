use std::{fs::OpenOptions, io::Write, path::Path};

/// Permission bits for files holding key material.
pub const SECRET_FILE_MODE: u32 = 0o600;

/// Writes `contents` to `path`, creating or truncating it.
///
/// Newly created files are only readable and writable by the owner. Existing
/// files keep their permissions.
pub fn write_secret(path: &Path, contents: impl AsRef<[u8]>) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(SECRET_FILE_MODE);
    }
    let mut file = options.open(path)?;
    file.write_all(contents.as_ref())?;
    file.flush()
}

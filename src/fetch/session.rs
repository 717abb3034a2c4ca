// src/fetch/session.rs

use anyhow::{bail, Context, Result};
use std::{env, fs, path::Path};

/// Environment variable carrying the session cookie value.
pub const SESSION_ENV: &str = "LEETCODE_SESSION";

/// Resolve the LEETCODE_SESSION cookie: an explicit file wins, then the
/// environment. The tool never logs in itself; the user exports the
/// cookie from a browser where they are already signed in.
pub fn resolve_session(file: Option<&Path>) -> Result<String> {
    if let Some(path) = file {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading session file {}", path.display()))?;
        let value = raw.trim();
        if value.is_empty() {
            bail!("session file {} is empty", path.display());
        }
        return Ok(value.to_string());
    }

    match env::var(SESSION_ENV) {
        Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => bail!(
            "{SESSION_ENV} not set; log into leetcode.com in a browser and export the cookie"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn reads_and_trims_session_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "  abc123session  ").unwrap();

        let session = resolve_session(Some(file.path())).unwrap();
        assert_eq!(session, "abc123session");
    }

    #[test]
    fn empty_session_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "   ").unwrap();

        assert!(resolve_session(Some(file.path())).is_err());
    }

    #[test]
    fn missing_session_file_is_an_error() {
        let err = resolve_session(Some(Path::new("/nonexistent/cookie.txt"))).unwrap_err();
        assert!(err.to_string().contains("session file"));
    }
}

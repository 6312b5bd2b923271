use crate::utils::error::{Result, VeridionError};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Names an explicit environment file instead of searching for `.env`.
pub const ENV_FILE_VAR: &str = "VERIDION_ENV_FILE";

const DEFAULT_ENV_FILE: &str = ".env";

/// Outcome of loading the environment file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvFile {
    Loaded(PathBuf),
    Absent,
}

impl EnvFile {
    pub fn is_loaded(&self) -> bool {
        matches!(self, EnvFile::Loaded(_))
    }
}

/// Loads `.env` from the working directory or the nearest ancestor that has one.
///
/// Variables already present in the process environment win. Malformed lines are
/// logged and skipped; the rest of the file still applies.
pub fn load_env() -> EnvFile {
    let Some(path) = find_env_file() else {
        tracing::debug!("No .env file found");
        return EnvFile::Absent;
    };

    match load_env_from(&path) {
        Ok(env_file) => env_file,
        Err(e) => {
            tracing::warn!("{}", e);
            EnvFile::Absent
        }
    }
}

/// Loads variables from an explicit file.
///
/// A missing file is [`EnvFile::Absent`]. Malformed lines are skipped; only a
/// file that cannot be read is an error.
pub fn load_env_from<P: AsRef<Path>>(path: P) -> Result<EnvFile> {
    let path = path.as_ref();
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) if e.not_found() => return Ok(EnvFile::Absent),
        Err(e) => {
            return Err(VeridionError::EnvFileError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
        }
    };

    let skipped = apply_entries(path, iter)?;
    tracing::debug!(
        "Loaded environment from {} ({} invalid lines skipped)",
        path.display(),
        skipped
    );
    Ok(EnvFile::Loaded(path.to_path_buf()))
}

/// Honors `VERIDION_ENV_FILE` when set, otherwise searches for `.env`.
pub fn load_configured_env() -> EnvFile {
    let Some(explicit) = std::env::var_os(ENV_FILE_VAR) else {
        return load_env();
    };

    match load_env_from(&explicit) {
        Ok(env_file) => env_file,
        Err(e) => {
            tracing::warn!("{}", e);
            EnvFile::Absent
        }
    }
}

fn find_env_file() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    cwd.ancestors()
        .map(|dir| dir.join(DEFAULT_ENV_FILE))
        .find(|candidate| candidate.is_file())
}

// Sets every well-formed entry not already in the environment and returns how
// many lines failed to parse. Read errors abort the load.
fn apply_entries<R: Read>(path: &Path, iter: dotenvy::Iter<R>) -> Result<usize> {
    let mut skipped = 0;
    for item in iter {
        match item {
            Ok((key, value)) => {
                if std::env::var_os(&key).is_none() {
                    std::env::set_var(&key, value);
                }
            }
            Err(e @ dotenvy::Error::LineParse(..)) => {
                skipped += 1;
                tracing::warn!("Skipping invalid line in {}: {}", path.display(), e);
            }
            Err(e) => {
                return Err(VeridionError::EnvFileError {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })
            }
        }
    }
    Ok(skipped)
}

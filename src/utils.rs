use std::path::PathBuf;

/// Loads a `.env` file from the current directory or any ancestor.
///
/// Returns the path that was loaded. A missing file is an error the caller
/// can choose to ignore; credentials are validated at client construction.
pub fn load_env() -> anyhow::Result<PathBuf> {
    let path = dotenv::dotenv()?;
    Ok(path)
}

use crate::config::{self, EnvFile};
use crate::core::banner::VERIDION_BANNER;
use crate::utils::error::Result;
use std::io::Write;

/// Startup routine: load the environment file, then print the banner.
///
/// Nothing loaded from the environment is consulted when printing.
pub fn run<W: Write>(out: &mut W) -> Result<EnvFile> {
    let env_file = config::load_configured_env();
    tracing::debug!("Environment file: {:?}", env_file);

    VERIDION_BANNER.write_to(out)?;
    Ok(env_file)
}

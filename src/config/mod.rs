pub mod env_file;

pub use env_file::{load_configured_env, load_env, load_env_from, EnvFile};

pub mod package;
pub mod target_env;

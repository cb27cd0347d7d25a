use std::path::{Path, PathBuf};

pub fn go_mod_path(package_dir: &Path) -> PathBuf {
    package_dir.join("go.mod")
}

/// Where an explicit `-o` output lands, relative to the directory the build runs in.
pub fn artifact_path(package_dir: &Path, output: &str) -> PathBuf {
    package_dir.join(output)
}

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::targets::Target;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Built,
    Failed,
}

#[derive(Clone, Debug, Serialize)]
pub struct TargetOutcome {
    pub target: Target,
    pub status: Status,
    /// Present when the target was built with an explicit output path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TargetOutcome {
    pub fn is_failure(&self) -> bool {
        self.status == Status::Failed
    }
}

#[derive(Serialize)]
pub struct BuildReport<'a> {
    pub toolchain: &'a Path,
    pub package_dir: &'a Path,
    pub built: usize,
    pub failed: usize,
    pub targets: &'a [TargetOutcome],
}

impl<'a> BuildReport<'a> {
    pub fn new(toolchain: &'a Path, package_dir: &'a Path, targets: &'a [TargetOutcome]) -> Self {
        let failed = targets.iter().filter(|o| o.is_failure()).count();
        Self {
            toolchain,
            package_dir,
            built: targets.len() - failed,
            failed,
            targets,
        }
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Serializing build report")?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Creating {}", parent.display()))?;
        }
        fs::write(path, json + "\n").with_context(|| format!("Writing {}", path.display()))
    }
}

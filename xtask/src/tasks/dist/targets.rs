use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::{Arch, Os};

/// One cross-compilation build: where it runs and where the binary lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Target {
    pub os: Os,
    pub arch: Arch,
    /// Explicit `-o` path. `None` leaves the toolchain's default (`proxy`).
    pub output: Option<&'static str>,
}

impl Target {
    pub const fn new(os: Os, arch: Arch, output: Option<&'static str>) -> Self {
        Self { os, arch, output }
    }

    pub fn label(&self) -> String {
        format!("{}/{}", self.os, self.arch)
    }
}

pub const RELEASE_TARGETS: [Target; 4] = [
    Target::new(Os::Linux, Arch::X86, Some("bin/proxy_linux32")),
    Target::new(Os::Linux, Arch::Amd64, Some("bin/proxy_linux64")),
    Target::new(Os::Linux, Arch::Arm64, Some("bin/proxy_arm64")),
    Target::new(Os::Windows, Arch::Amd64, Some("bin/proxy_win64.exe")),
];

pub const DEFAULT_TARGET: Target = Target::new(Os::Linux, Arch::Amd64, None);

/// Target of the fixed `build-386` task.
pub const LEGACY_386_TARGET: Target = Target::new(Os::Linux, Arch::X86, None);

const ALL_TOKEN: &str = "all";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    Default,
    All,
}

impl Selection {
    /// Only the exact token `all` selects the release table. Anything else,
    /// unknown tokens included, falls through to the default target.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some(ALL_TOKEN) => Self::All,
            _ => Self::Default,
        }
    }

    pub fn targets(self) -> &'static [Target] {
        const DEFAULT: &[Target] = &[DEFAULT_TARGET];
        match self {
            Self::All => &RELEASE_TARGETS,
            Self::Default => DEFAULT,
        }
    }
}

#[derive(Serialize)]
struct TargetListing {
    default: Target,
    release: &'static [Target],
}

pub fn list(json: bool) -> Result<()> {
    if json {
        let listing = TargetListing {
            default: DEFAULT_TARGET,
            release: &RELEASE_TARGETS,
        };
        let rendered =
            serde_json::to_string_pretty(&listing).context("Serializing target table")?;
        println!("{rendered}");
        return Ok(());
    }

    println!("default:");
    println!("  {:<14} {}", DEFAULT_TARGET.label(), display_output(&DEFAULT_TARGET));
    println!("all:");
    for t in &RELEASE_TARGETS {
        println!("  {:<14} {}", t.label(), display_output(t));
    }
    Ok(())
}

fn display_output(t: &Target) -> &'static str {
    t.output.unwrap_or("(toolchain default)")
}

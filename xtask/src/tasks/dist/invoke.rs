use anyhow::{bail, Context, Result};
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use super::targets::Target;

pub const TRIMPATH_FLAG: &str = "-trimpath";
/// Drops the symbol table and DWARF info from the linked binary.
pub const STRIP_LDFLAGS: &str = "-ldflags=-s -w";

pub struct GoToolchain {
    program: PathBuf,
    package_dir: PathBuf,
}

impl GoToolchain {
    pub fn new(program: PathBuf, package_dir: PathBuf) -> Self {
        Self {
            program,
            package_dir,
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn package_dir(&self) -> &Path {
        &self.package_dir
    }

    /// Describes the `go build` run for `target` without starting it.
    pub fn invocation<I>(&self, target: &Target, ambient: I) -> Invocation
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        let mut args: Vec<OsString> =
            vec!["build".into(), TRIMPATH_FLAG.into(), STRIP_LDFLAGS.into()];
        if let Some(output) = target.output {
            args.push("-o".into());
            args.push(output.into());
        }

        Invocation {
            program: self.program.clone(),
            args,
            env: crate::util::target_env::for_target(ambient, target),
            current_dir: self.package_dir.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
    /// Complete child environment, not a delta.
    pub env: BTreeMap<OsString, OsString>,
    pub current_dir: PathBuf,
}

impl Invocation {
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .env_clear()
            .envs(&self.env)
            .current_dir(&self.current_dir);
        cmd
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            let arg = arg.to_string_lossy();
            if arg.contains(' ') {
                write!(f, " \"{arg}\"")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// Executes build invocations. An `Err` means the target did not build.
pub trait Runner {
    fn run(&mut self, invocation: &Invocation) -> Result<()>;
}

/// Spawns the toolchain and blocks until it exits.
pub struct ProcessRunner;

impl Runner for ProcessRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<()> {
        let status = invocation
            .command()
            .status()
            .with_context(|| format!("Spawning {}", invocation.program.display()))?;
        if !status.success() {
            bail!("`{invocation}` failed with {status}");
        }
        Ok(())
    }
}

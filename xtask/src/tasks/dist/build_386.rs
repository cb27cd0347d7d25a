use anyhow::{Context, Result};
use std::env;
use std::ffi::OsString;
use std::io::{self, Write};

use super::invoke::{GoToolchain, ProcessRunner, Runner};
use super::targets::LEGACY_386_TARGET;

pub fn run(toolchain: &GoToolchain) -> Result<()> {
    let ambient: Vec<(OsString, OsString)> = env::vars_os().collect();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with(toolchain, &mut ProcessRunner, &ambient, &mut out).map(|_| ())
}

/// Returns whether the binary was built. A failed build stops before the
/// `Success` line but is not an error for the caller.
pub fn run_with<R, W>(
    toolchain: &GoToolchain,
    runner: &mut R,
    ambient: &[(OsString, OsString)],
    out: &mut W,
) -> Result<bool>
where
    R: Runner,
    W: Write,
{
    writeln!(out, "Building...").context("Writing build output")?;

    let invocation = toolchain.invocation(&LEGACY_386_TARGET, ambient.iter().cloned());
    if let Err(e) = runner.run(&invocation) {
        writeln!(out, "Build error").context("Writing build output")?;
        eprintln!("[error] {}: {:#}", LEGACY_386_TARGET.label(), e);
        return Ok(false);
    }

    writeln!(out, "Success").context("Writing build output")?;
    Ok(true)
}

use anyhow::{bail, Context, Result};
use std::env;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;

use super::invoke::{GoToolchain, ProcessRunner, Runner};
use super::report::{BuildReport, Status, TargetOutcome};
use super::targets::{Selection, Target};

#[derive(Clone, Debug, Default)]
pub struct BuildOptions {
    /// Fail the run instead of reporting `Success` when any target failed.
    pub strict: bool,
    pub report: Option<PathBuf>,
}

pub fn run(toolchain: &GoToolchain, selection: Option<&str>, opts: &BuildOptions) -> Result<()> {
    let ambient: Vec<(OsString, OsString)> = env::vars_os().collect();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with(
        toolchain,
        Selection::from_arg(selection),
        opts,
        &mut ProcessRunner,
        &ambient,
        &mut out,
    )
    .map(|_| ())
}

/// Builds every selected target in order.
///
/// A failed target prints `Build error` and the loop moves on to the next one.
/// Unless `opts.strict` is set, `Success` is printed at the end no matter how
/// many targets failed.
pub fn run_with<R, W>(
    toolchain: &GoToolchain,
    selection: Selection,
    opts: &BuildOptions,
    runner: &mut R,
    ambient: &[(OsString, OsString)],
    out: &mut W,
) -> Result<Vec<TargetOutcome>>
where
    R: Runner,
    W: Write,
{
    let targets = selection.targets();
    let mut outcomes = Vec::with_capacity(targets.len());

    for t in targets {
        outcomes.push(build_one(toolchain, t, runner, ambient, out)?);
    }

    if let Some(path) = opts.report.as_deref() {
        BuildReport::new(toolchain.program(), toolchain.package_dir(), &outcomes).write_to(path)?;
        eprintln!("[info] Build report: {}", path.display());
    }

    let failed = outcomes.iter().filter(|o| o.is_failure()).count();
    if opts.strict && failed > 0 {
        out.flush().context("Flushing build output")?;
        bail!("{failed} of {} target(s) failed to build", outcomes.len());
    }

    writeln!(out, "Success").context("Writing build output")?;
    Ok(outcomes)
}

fn build_one<R, W>(
    toolchain: &GoToolchain,
    t: &Target,
    runner: &mut R,
    ambient: &[(OsString, OsString)],
    out: &mut W,
) -> Result<TargetOutcome>
where
    R: Runner,
    W: Write,
{
    let announced = match t.output {
        Some(output) => writeln!(out, "Building {} -> {}...", t.label(), output),
        None => writeln!(out, "Building {}...", t.label()),
    };
    announced.context("Writing build output")?;

    let invocation = toolchain.invocation(t, ambient.iter().cloned());
    match runner.run(&invocation) {
        Ok(()) => Ok(TargetOutcome {
            target: *t,
            status: Status::Built,
            artifact: t
                .output
                .map(|o| crate::util::package::artifact_path(toolchain.package_dir(), o)),
            error: None,
        }),
        Err(e) => {
            writeln!(out, "Build error").context("Writing build output")?;
            eprintln!("[error] {}: {:#}", t.label(), e);
            Ok(TargetOutcome {
                target: *t,
                status: Status::Failed,
                artifact: None,
                error: Some(format!("{e:#}")),
            })
        }
    }
}

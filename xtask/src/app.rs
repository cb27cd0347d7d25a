use anyhow::Result;

use crate::tasks::dist::invoke::GoToolchain;

pub fn run(cli: crate::cli::Cli) -> Result<()> {
    let toolchain = GoToolchain::new(cli.go, cli.package_dir);
    match cli.cmd {
        crate::cli::Cmd::Build {
            selection,
            strict,
            report,
        } => crate::tasks::dist::build::run(
            &toolchain,
            selection.as_deref(),
            &crate::tasks::dist::build::BuildOptions { strict, report },
        ),
        crate::cli::Cmd::Build386 => crate::tasks::dist::build_386::run(&toolchain),
        crate::cli::Cmd::Targets { json } => crate::tasks::dist::targets::list(json),
        crate::cli::Cmd::Env { shell, os, arch } => {
            crate::tasks::tooling::env::run(shell, os, arch)
        }
        crate::cli::Cmd::Doctor => crate::tasks::tooling::doctor::run(&toolchain),
    }
}

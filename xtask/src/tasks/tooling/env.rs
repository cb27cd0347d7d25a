use anyhow::Result;
use std::io::{self, Write};

use crate::cli::{Arch, Os, Shell};
use crate::tasks::dist::targets::Target;
use crate::util::target_env::{GOARCH, GOOS};

pub fn run(shell: Shell, os: Os, arch: Arch) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_exports(&mut out, shell, &Target::new(os, arch, None))?;
    Ok(())
}

// Pure export lines so users can `eval` the output.
fn write_exports<W: Write>(out: &mut W, shell: Shell, t: &Target) -> io::Result<()> {
    let vars = [(GOOS, t.os.goos()), (GOARCH, t.arch.goarch())];
    for (name, value) in vars {
        match shell {
            Shell::Bash | Shell::Sh => writeln!(out, "export {name}=\"{value}\"")?,
            Shell::Fish => writeln!(out, "set -gx {name} \"{value}\"")?,
        }
    }
    Ok(())
}

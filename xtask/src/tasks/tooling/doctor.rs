use anyhow::{bail, Result};
use std::process::Command;

use crate::tasks::dist::invoke::GoToolchain;

pub fn run(toolchain: &GoToolchain) -> Result<()> {
    let mut ok = true;

    match which::which(toolchain.program()) {
        Ok(path) => {
            eprintln!("[OK] {}", path.display());
            match go_version(toolchain) {
                Some(version) => eprintln!("[OK] {version}"),
                None => {
                    eprintln!("[FAIL] `{} version` did not run", toolchain.program().display());
                    ok = false;
                }
            }
        }
        Err(_) => {
            eprintln!(
                "[FAIL] missing `{}` in PATH (set --go or PROXY_GO)",
                toolchain.program().display()
            );
            ok = false;
        }
    }

    let package_dir = toolchain.package_dir();
    if package_dir.is_dir() {
        eprintln!("[OK] {}", package_dir.display());
    } else {
        eprintln!("[FAIL] missing package directory: {}", package_dir.display());
        ok = false;
    }

    let go_mod = crate::util::package::go_mod_path(package_dir);
    if go_mod.is_file() {
        eprintln!("[OK] {}", go_mod.display());
    } else {
        eprintln!("[FAIL] missing go.mod: {}", go_mod.display());
        ok = false;
    }

    if !ok {
        bail!("doctor checks failed");
    }
    Ok(())
}

fn go_version(toolchain: &GoToolchain) -> Option<String> {
    let out = Command::new(toolchain.program())
        .arg("version")
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&out.stdout).trim().to_string())
}

use std::collections::BTreeMap;
use std::ffi::OsString;

use crate::tasks::dist::targets::Target;

pub const GOOS: &str = "GOOS";
pub const GOARCH: &str = "GOARCH";

/// Copies `ambient` and overrides the two variables that select the toolchain's
/// target platform. Every other variable passes through untouched.
pub fn for_target<I>(ambient: I, target: &Target) -> BTreeMap<OsString, OsString>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    let mut env: BTreeMap<OsString, OsString> = ambient.into_iter().collect();
    env.insert(GOOS.into(), target.os.goos().into());
    env.insert(GOARCH.into(), target.arch.goarch().into());
    env
}

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
    Linux,
    Windows,
}

impl Os {
    /// Value the toolchain expects in `GOOS`.
    pub fn goos(self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::Windows => "windows",
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.goos())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
pub enum Arch {
    #[value(name = "386")]
    #[serde(rename = "386")]
    X86,
    #[value(name = "amd64")]
    #[serde(rename = "amd64")]
    Amd64,
    #[value(name = "arm64")]
    #[serde(rename = "arm64")]
    Arm64,
}

impl Arch {
    /// Value the toolchain expects in `GOARCH`.
    pub fn goarch(self) -> &'static str {
        match self {
            Self::X86 => "386",
            Self::Amd64 => "amd64",
            Self::Arm64 => "arm64",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.goarch())
    }
}

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Cross-compile tasks for the proxy binary")]
pub struct Cli {
    /// Go toolchain used for every build.
    #[arg(long, global = true, env = "PROXY_GO", default_value = "go")]
    pub go: PathBuf,

    /// Directory holding the proxy's go.mod; builds run from here.
    #[arg(
        short = 'C',
        long = "package-dir",
        global = true,
        env = "PROXY_PACKAGE_DIR",
        default_value = "."
    )]
    pub package_dir: PathBuf,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand)]
pub enum Cmd {
    /// Build the default linux/amd64 binary, or every release target with `all`.
    ///
    /// Any selection other than `all` builds the default target.
    Build {
        /// `all` for every release target; any other value builds the default target.
        #[arg(allow_hyphen_values = true)]
        selection: Option<String>,

        /// Exit non-zero and skip the final `Success` line when any target fails.
        #[arg(long)]
        strict: bool,

        /// Write a JSON build report to this path.
        #[arg(long, value_name = "PATH")]
        report: Option<PathBuf>,
    },

    /// Build a single linux/386 binary with the toolchain's default output name.
    #[command(name = "build-386")]
    Build386,

    /// List the release target table.
    Targets {
        #[arg(long)]
        json: bool,
    },

    /// Print the GOOS/GOARCH exports for one target.
    ///
    /// Usage:
    ///   eval "$(cargo xtask env --arch arm64)"
    Env {
        #[arg(value_enum, default_value_t = Shell::Bash)]
        shell: Shell,
        #[arg(long, value_enum, default_value_t = Os::Linux)]
        os: Os,
        #[arg(long, value_enum, default_value_t = Arch::Amd64)]
        arch: Arch,
    },

    /// Check that the Go toolchain and package directory are usable.
    Doctor,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Shell {
    Bash,
    Sh,
    Fish,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_build(args: &[&str]) -> (Option<String>, bool, Option<PathBuf>) {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.cmd {
            Cmd::Build {
                selection,
                strict,
                report,
            } => (selection, strict, report),
            _ => panic!("expected build"),
        }
    }

    #[test]
    fn test_dash_prefixed_selection_is_a_value() {
        assert_eq!(parse_build(&["xtask", "build", "--all"]).0.as_deref(), Some("--all"));
        assert_eq!(parse_build(&["xtask", "build", "-x"]).0.as_deref(), Some("-x"));
    }

    #[test]
    fn test_build_flags_still_recognized() {
        let (selection, strict, report) =
            parse_build(&["xtask", "build", "--all", "--strict", "--report", "r.json"]);
        assert_eq!(selection.as_deref(), Some("--all"));
        assert!(strict);
        assert_eq!(report, Some(PathBuf::from("r.json")));

        let (selection, strict, _) = parse_build(&["xtask", "build", "--strict", "all"]);
        assert_eq!(selection.as_deref(), Some("all"));
        assert!(strict);
    }

    #[test]
    fn test_build_arguments_have_help() {
        use clap::CommandFactory;

        let cmd = Cli::command();
        let build = cmd.find_subcommand("build").unwrap();
        for id in ["selection", "strict", "report"] {
            let arg = build.get_arguments().find(|a| a.get_id() == id).unwrap();
            assert!(arg.get_help().is_some(), "{id} has no help text");
        }
    }

    #[test]
    fn test_no_selection() {
        let (selection, strict, report) = parse_build(&["xtask", "build"]);
        assert!(selection.is_none());
        assert!(!strict);
        assert!(report.is_none());
    }
}

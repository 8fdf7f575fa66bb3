use std::process::ExitCode;

use clap::{ArgGroup, Parser};

use gf256::{DEFAULT_PARAMETERS, run_benchmark, run_self_check};

pub const USAGE: &str = "Usage: gf256 <option>\n\
                         OPTIONS:\n\
                         -h\tPrint implementation details\n\
                         -t\tRun test suite\n\
                         -b\tRun benchmark suite";

const RULE: &str = "===========================================================================";

/// Ровно один из трёх флагов; встроенные `--help`/`--version` отключены,
/// `-h` печатает описание реализации.
#[derive(Parser, Debug)]
#[command(name = "gf256", disable_help_flag = true, disable_version_flag = true)]
#[command(group(ArgGroup::new("mode").required(true).args(["info", "test", "bench"])))]
pub struct Cli {
    #[arg(short = 'h')]
    info: bool,
    #[arg(short = 't')]
    test: bool,
    #[arg(short = 'b')]
    bench: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Info,
    SelfCheck,
    Benchmark,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.test {
            Mode::SelfCheck
        } else if self.bench {
            Mode::Benchmark
        } else {
            Mode::Info
        }
    }
}

pub fn run(mode: Mode) -> ExitCode {
    log::debug!("running in {:?} mode", mode);
    match mode {
        Mode::Info => {
            println!("{:=^75}", "IMPLEMENTATION INFO");
            println!("{}", DEFAULT_PARAMETERS.describe());
            println!("{}", RULE);
            ExitCode::SUCCESS
        }
        Mode::SelfCheck => ExitCode::from(self_check_status(run_self_check())),
        Mode::Benchmark => {
            run_benchmark();
            ExitCode::SUCCESS
        }
    }
}

/// Код завершения для `-t`: 0 при успешной самопроверке, иначе 1.
fn self_check_status(passed: bool) -> u8 {
    if passed { 0 } else { 1 }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    fn parse(args: &[&str]) -> Result<Mode, clap::Error> {
        Cli::try_parse_from(std::iter::once("gf256").chain(args.iter().copied()))
            .map(|cli| cli.mode())
    }

    #[test]
    fn test_single_flags_select_mode() {
        assert_eq!(parse(&["-h"]).unwrap(), Mode::Info);
        assert_eq!(parse(&["-t"]).unwrap(), Mode::SelfCheck);
        assert_eq!(parse(&["-b"]).unwrap(), Mode::Benchmark);
    }

    #[test]
    fn test_no_arguments_rejected() {
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn test_several_flags_rejected() {
        assert!(parse(&["-t", "-b"]).is_err());
        assert!(parse(&["-h", "-t"]).is_err());
    }

    #[test]
    fn test_unknown_arguments_rejected() {
        assert!(parse(&["-x"]).is_err());
        assert!(parse(&["--help"]).is_err());
        assert!(parse(&["-t", "extra"]).is_err());
    }

    #[test]
    fn test_self_check_status() {
        assert_eq!(self_check_status(true), 0);
        assert_eq!(self_check_status(false), 1);
    }

    #[test]
    fn test_failed_self_check_exits_with_one() {
        let root = gf256::primitive_root().pow(3);
        let passed = gf256::run_self_check_with(root, &mut std::io::sink()).unwrap();
        assert_eq!(self_check_status(passed), 1);
    }

    #[test]
    fn test_usage_lists_every_option() {
        for flag in ["-h", "-t", "-b"] {
            assert!(USAGE.contains(flag), "usage does not mention {}", flag);
        }
    }
}

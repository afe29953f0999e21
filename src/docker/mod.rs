use std::io;

use anyhow::{Error, Result};

use crate::process::{CommandOutput, CommandRunner};

pub mod container;
pub mod format;
pub mod inspect;
pub mod probe;
pub mod query;

/// The local `docker` executable, driven through a [`CommandRunner`].
pub struct DockerCli<'a> {
    runner: &'a dyn CommandRunner,
    program: String,
}

impl<'a> DockerCli<'a> {
    pub fn new(runner: &'a dyn CommandRunner, program: impl Into<String>) -> DockerCli<'a> {
        DockerCli {
            runner,
            program: program.into(),
        }
    }

    /// Runs one docker subcommand. The caller decides what a failed exit means.
    pub fn exec<S: AsRef<str>>(&self, args: &[S]) -> io::Result<CommandOutput> {
        let args = args.iter().map(|arg| arg.as_ref().to_string()).collect::<Vec<String>>();
        self.runner.run(&self.program, &args)
    }

    /// Runs one docker subcommand and returns its trimmed stdout, a failed
    /// exit becomes an error carrying the trimmed stderr.
    pub fn exec_stdout<S: AsRef<str>>(&self, args: &[S]) -> Result<String> {
        let output = self.exec(args)?;
        if output.success {
            Ok(output.stdout.trim().to_string())
        } else {
            Err(Error::msg(output.stderr.trim().to_string()))
        }
    }

    /// Space-joined argv as it would be typed in a shell.
    pub fn command_line<S: AsRef<str>>(&self, args: &[S]) -> String {
        let mut line = self.program.clone();
        for arg in args {
            line.push(' ');
            line.push_str(arg.as_ref());
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::testing::FakeRunner;

    #[test]
    fn stderr_becomes_the_error() {
        let runner = FakeRunner::new().reply(CommandOutput::failed("Error: No such image: nope\n"));
        let docker = DockerCli::new(&runner, "docker");
        let err = docker.exec_stdout(&["rmi", "nope"]).unwrap_err();
        assert_eq!(err.to_string(), "Error: No such image: nope");
        assert_eq!(runner.calls(), vec![vec!["docker", "rmi", "nope"]]);
    }

    #[test]
    fn command_line_joins_argv() {
        let runner = FakeRunner::new();
        let docker = DockerCli::new(&runner, "docker");
        assert_eq!(docker.command_line(&["rm", "--force", "abc"]), "docker rm --force abc");
        assert!(runner.calls().is_empty());
    }
}

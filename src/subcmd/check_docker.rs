use std::io::Write;

use anyhow::Result;

use crate::docker::DockerCli;
use crate::subcmd::Outcome;

pub struct CheckDockerCommand {}

impl CheckDockerCommand {
    /// Installed first, then the daemon. Stops at the first failing check.
    pub fn check(docker: &DockerCli, out: &mut dyn Write) -> Result<Outcome> {
        let installed = docker.probe_installed();
        if !installed.ok {
            writeln!(out, "Docker is not installed: {}", installed.message)?;
            return Ok(Outcome::Failure);
        }
        writeln!(out, "Docker is installed: {}", installed.message)?;

        let daemon = docker.probe_daemon();
        if !daemon.ok {
            writeln!(out, "Docker daemon is not running: {}", daemon.message)?;
            return Ok(Outcome::Failure);
        }
        writeln!(out, "{}", daemon.message)?;
        Ok(Outcome::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::testing::FakeRunner;
    use crate::process::CommandOutput;

    fn check(runner: &FakeRunner) -> Result<(Outcome, String)> {
        let docker = DockerCli::new(runner, "docker");
        let mut out = Vec::new();
        let outcome = CheckDockerCommand::check(&docker, &mut out)?;
        Ok((outcome, String::from_utf8(out)?))
    }

    #[test]
    fn installed_and_running() -> Result<()> {
        let runner = FakeRunner::new()
            .reply(CommandOutput::ok("Docker version 27.0.3, build 7d4bcd8\n"))
            .reply(CommandOutput::ok("Client: Docker Engine - Community\n"));
        let (outcome, out) = check(&runner)?;
        assert_eq!(outcome, Outcome::Success);
        assert_eq!(
            out,
            "Docker is installed: Docker version 27.0.3, build 7d4bcd8\nDocker daemon is running.\n"
        );
        Ok(())
    }

    #[test]
    fn not_installed_skips_daemon() -> Result<()> {
        let runner = FakeRunner::new().reply_not_found();
        let (outcome, out) = check(&runner)?;
        assert_eq!(outcome, Outcome::Failure);
        assert_eq!(out, "Docker is not installed: Docker CLI not found.\n");
        assert_eq!(runner.calls().len(), 1);
        Ok(())
    }

    #[test]
    fn daemon_stopped() -> Result<()> {
        let runner = FakeRunner::new()
            .reply(CommandOutput::ok("Docker version 27.0.3, build 7d4bcd8\n"))
            .reply(CommandOutput::failed("Cannot connect to the Docker daemon\n"));
        let (outcome, out) = check(&runner)?;
        assert_eq!(outcome, Outcome::Failure);
        assert!(out.ends_with("Docker daemon is not running: Cannot connect to the Docker daemon\n"));
        Ok(())
    }
}

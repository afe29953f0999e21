use std::io::ErrorKind;

use crate::docker::DockerCli;

const CLI_NOT_FOUND: &str = "Docker CLI not found.";

/// Outcome of one probe: whether it passed and the message to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub ok: bool,
    pub message: String,
}

impl DockerCli<'_> {
    /// `docker --version`, the message is the version line on success.
    pub fn probe_installed(&self) -> ProbeResult {
        self.probe(&["--version"], |stdout| stdout.trim().to_string())
    }

    /// `docker info`, fails while the daemon is down.
    pub fn probe_daemon(&self) -> ProbeResult {
        self.probe(&["info"], |_| "Docker daemon is running.".to_string())
    }

    fn probe(&self, args: &[&str], on_success: impl FnOnce(&str) -> String) -> ProbeResult {
        match self.exec(args) {
            Ok(output) if output.success => ProbeResult {
                ok: true,
                message: on_success(&output.stdout),
            },
            Ok(output) => ProbeResult {
                ok: false,
                message: output.stderr.trim().to_string(),
            },
            Err(err) if err.kind() == ErrorKind::NotFound => ProbeResult {
                ok: false,
                message: CLI_NOT_FOUND.to_string(),
            },
            Err(err) => ProbeResult {
                ok: false,
                message: err.to_string(),
            },
        }
    }
}

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::{Error, Result};
use log::info;

use crate::docker::DockerCli;

/// Lifecycle commands that may be issued against a single container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerCommand {
    Start,
    Stop,
    Pause,
    Restart,
    Rm,
}

impl ContainerCommand {
    pub const ALL: [ContainerCommand; 5] = [
        ContainerCommand::Start,
        ContainerCommand::Stop,
        ContainerCommand::Pause,
        ContainerCommand::Restart,
        ContainerCommand::Rm,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerCommand::Start => "start",
            ContainerCommand::Stop => "stop",
            ContainerCommand::Pause => "pause",
            ContainerCommand::Restart => "restart",
            ContainerCommand::Rm => "rm",
        }
    }

    /// Options accepted by this command.
    pub fn allowed_options(&self) -> &'static [&'static str] {
        match self {
            ContainerCommand::Rm => &["--force"],
            _ => &[],
        }
    }
}

impl Display for ContainerCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContainerCommand {
    type Err = anyhow::Error;

    fn from_str(arg: &str) -> Result<Self, Self::Err> {
        let arg = arg.to_lowercase();
        ContainerCommand::ALL
            .into_iter()
            .find(|command| command.as_str() == arg)
            .ok_or_else(|| {
                let valid = ContainerCommand::ALL.map(|command| command.as_str()).join(", ");
                Error::msg(format!("Invalid command: {}. Valid commands are: {}.", arg, valid))
            })
    }
}

/// A command and its options after checking both against the allow-lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerRequest {
    pub container_id: String,
    pub command: ContainerCommand,
    pub options: Vec<String>,
}

impl ContainerRequest {
    /// Checks the command and every option. Nothing is executed here.
    pub fn validate(container_id: &str, command: &str, options: &[String]) -> Result<ContainerRequest> {
        let command = command.parse::<ContainerCommand>()?;
        let allowed = command.allowed_options();
        if !options.iter().all(|option| allowed.contains(&option.as_str())) {
            return Err(Error::msg(format!(
                "Invalid options for command '{}'. Expected options: {:?}",
                command, allowed
            )));
        }
        Ok(ContainerRequest {
            container_id: container_id.to_string(),
            command,
            options: options.to_vec(),
        })
    }

    /// `<command> [options...] <container_id>`
    pub fn args(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(self.options.len() + 2);
        args.push(self.command.as_str().to_string());
        args.extend(self.options.iter().cloned());
        args.push(self.container_id.clone());
        args
    }
}

impl DockerCli<'_> {
    /// Runs a validated request once. A failed exit is returned as an error
    /// carrying docker's stderr.
    pub fn run_container_command(&self, request: &ContainerRequest) -> Result<()> {
        let output = self.exec(&request.args())?;
        if output.success {
            info!("{} {} done", request.command, request.container_id);
            Ok(())
        } else {
            Err(Error::msg(format!(
                "Error executing '{}' on Docker container: {}",
                request.command,
                output.stderr.trim()
            )))
        }
    }
}

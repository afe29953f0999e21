use std::io;
use std::process::ExitCode;

use anyhow::Result;

use crate::config::cmd::{CmdArgs, SubCmd};
use crate::config::AppConfig;
use crate::docker::DockerCli;
use crate::process::SystemRunner;
use crate::subcmd::account::AccountCommand;
use crate::subcmd::address::GenerateAddressCommand;
use crate::subcmd::check_docker::CheckDockerCommand;
use crate::subcmd::container::ContainerCommandHandler;
use crate::subcmd::containers::ContainersCommand;
use crate::subcmd::hub::HubCommand;
use crate::subcmd::icons::IconsCommand;

pub mod account;
pub mod address;
pub mod check_docker;
pub mod container;
pub mod containers;
pub mod hub;
pub mod icons;

/// How a subcommand ended once its messages are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Failure => ExitCode::FAILURE,
        }
    }
}

pub fn run(cmd_args: CmdArgs) -> Result<Outcome> {
    let config = AppConfig::from_args(&cmd_args.global)?;
    let runner = SystemRunner;
    let docker = DockerCli::new(&runner, config.docker_program.as_str());
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &cmd_args.command {
        SubCmd::CheckAccount(args) => AccountCommand::network(&config, args, &mut out),
        SubCmd::CheckBalance(args) => AccountCommand::balance(&config, args, &mut out),
        SubCmd::GenerateAddress => GenerateAddressCommand::generate(&config, &mut out),
        SubCmd::CheckDocker => CheckDockerCommand::check(&docker, &mut out),
        SubCmd::Container(args) => ContainerCommandHandler::dispatch(&docker, args, &mut out),
        SubCmd::Containers(args) => ContainersCommand::query(&docker, args, &mut out),
        SubCmd::Hub(args) => HubCommand::run(&config, &docker, args, &mut out),
        SubCmd::Icons(args) => IconsCommand::generate(&config, args, &runner, &mut out),
    }
}

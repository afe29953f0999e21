use std::io::Write;

use anyhow::Result;

use crate::config::cmd::ContainerCmdArgs;
use crate::docker::container::ContainerRequest;
use crate::docker::DockerCli;
use crate::subcmd::Outcome;

const USAGE: &str = "Usage: metalctl container <container_id> <command> [options]";

pub struct ContainerCommandHandler {}

impl ContainerCommandHandler {
    /// Validates before anything runs, a rejected request never reaches docker.
    pub fn dispatch(docker: &DockerCli, args: &ContainerCmdArgs, out: &mut dyn Write) -> Result<Outcome> {
        let request = match ContainerRequest::validate(&args.container_id, &args.command, &args.options) {
            Ok(request) => request,
            Err(err) => {
                writeln!(out, "{}", err)?;
                writeln!(out, "{}", USAGE)?;
                return Ok(Outcome::Failure);
            }
        };

        writeln!(
            out,
            "Executing '{}' on container with ID: {}",
            docker.command_line(&request.args()),
            request.container_id
        )?;
        match docker.run_container_command(&request) {
            Ok(()) => {
                writeln!(
                    out,
                    "Successfully executed '{}' on container with ID {}",
                    request.command, request.container_id
                )?;
                Ok(Outcome::Success)
            }
            Err(err) => {
                writeln!(out, "{}", err)?;
                Ok(Outcome::Failure)
            }
        }
    }
}

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use crate::config::cmd::{ContainerQuery, QueryArgs};
use crate::config::HUB_NAMESPACE;
use crate::docker::DockerCli;
use crate::subcmd::Outcome;

pub(crate) const NO_COMMAND: &str = "No command specified. Use -c <command_name> to retrieve data.";

pub struct ContainersCommand {}

impl ContainersCommand {
    /// Prints the result of one query as JSON. A failing docker call prints
    /// its error on stderr and an empty array (`{}` for inspect).
    pub fn query(docker: &DockerCli, args: &QueryArgs, out: &mut dyn Write) -> Result<Outcome> {
        let Some(command) = args.command.as_deref() else {
            writeln!(out, "{}", NO_COMMAND)?;
            return Ok(Outcome::Failure);
        };
        let Ok(query) = command.parse::<ContainerQuery>() else {
            writeln!(out, "Invalid command")?;
            return Ok(Outcome::Failure);
        };
        match query {
            ContainerQuery::SudoacornImages => print_list(docker.list_images(HUB_NAMESPACE), out),
            ContainerQuery::RunningContainers => print_list(docker.list_containers(), out),
            ContainerQuery::ContainerStats => print_list(docker.container_stats(), out),
            ContainerQuery::ContainerInfo => {
                let Some(container_id) = args.args.first() else {
                    eprintln!("No container id provided for get_container_info command");
                    writeln!(out, "{{}}")?;
                    return Ok(Outcome::Failure);
                };
                match docker.container_info(container_id) {
                    Ok(info) => {
                        writeln!(out, "{}", serde_json::to_string(&info)?)?;
                        Ok(Outcome::Success)
                    }
                    Err(err) => {
                        eprintln!("{}", err);
                        writeln!(out, "{{}}")?;
                        Ok(Outcome::Failure)
                    }
                }
            }
        }
    }
}

fn print_list<T: Serialize>(records: Result<Vec<T>>, out: &mut dyn Write) -> Result<Outcome> {
    match records {
        Ok(records) => {
            writeln!(out, "{}", serde_json::to_string(&records)?)?;
            Ok(Outcome::Success)
        }
        Err(err) => {
            eprintln!("{}", err);
            writeln!(out, "[]")?;
            Ok(Outcome::Failure)
        }
    }
}

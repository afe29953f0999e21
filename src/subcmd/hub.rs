use std::io::Write;

use anyhow::Result;
use log::{info, warn};

use crate::config::cmd::{HubOperation, QueryArgs};
use crate::config::{AppConfig, HUB_NAMESPACE};
use crate::docker::DockerCli;
use crate::http::HttpClient;
use crate::hub::{extract_repository_name, HubClient};
use crate::subcmd::containers::NO_COMMAND;
use crate::subcmd::Outcome;

pub struct HubCommand {}

impl HubCommand {
    pub fn run(config: &AppConfig, docker: &DockerCli, args: &QueryArgs, out: &mut dyn Write) -> Result<Outcome> {
        let Some(command) = args.command.as_deref() else {
            eprintln!("{}", NO_COMMAND);
            return Ok(Outcome::Failure);
        };
        let Ok(operation) = command.parse::<HubOperation>() else {
            eprintln!("Invalid command");
            return Ok(Outcome::Failure);
        };
        let argument = args.args.first().map(String::as_str);
        match operation {
            HubOperation::ListRepos => list_repos(config, out),
            HubOperation::Pull | HubOperation::Delete => {
                let Some(url) = argument else {
                    eprintln!("No URL provided for {} command", operation.name());
                    return Ok(Outcome::Failure);
                };
                let Some(repository) = extract_repository_name(url) else {
                    eprintln!("Failed to extract repository name from {}", url);
                    return Ok(Outcome::Failure);
                };
                if operation == HubOperation::Pull {
                    pull(docker, &repository, out)
                } else {
                    delete(docker, &repository, out)
                }
            }
            HubOperation::Start | HubOperation::ImageId => {
                let Some(repository) = argument else {
                    eprintln!("No repository name provided for {} command", operation.name());
                    return Ok(Outcome::Failure);
                };
                if operation == HubOperation::Start {
                    start(docker, repository, out)
                } else {
                    image_id(docker, repository, out)
                }
            }
        }
    }
}

fn list_repos(config: &AppConfig, out: &mut dyn Write) -> Result<Outcome> {
    let client = HubClient::new(HttpClient::new(config.http_timeout_secs)?, &config.hub_url);
    match client.list_repositories(HUB_NAMESPACE) {
        Ok(repos) => {
            writeln!(out, "{}", serde_json::to_string(&repos)?)?;
            Ok(Outcome::Success)
        }
        Err(err) => {
            eprintln!("Error fetching repositories: {:#}", err);
            writeln!(out, "[]")?;
            Ok(Outcome::Failure)
        }
    }
}

fn pull(docker: &DockerCli, repository: &str, out: &mut dyn Write) -> Result<Outcome> {
    match docker.pull_image(repository) {
        Ok(()) => {
            writeln!(out, "Successfully pulled {}", repository)?;
            Ok(Outcome::Success)
        }
        Err(err) => {
            eprintln!("{}", err);
            Ok(Outcome::Failure)
        }
    }
}

fn delete(docker: &DockerCli, repository: &str, out: &mut dyn Write) -> Result<Outcome> {
    match docker.delete_image(repository) {
        Ok(report) => {
            info!("removed {} container(s) of {}", report.removed_containers.len(), repository);
            if !report.failed_containers.is_empty() {
                warn!("left behind containers: {}", report.failed_containers.join(", "));
            }
            writeln!(out, "Successfully deleted {}", repository)?;
            Ok(Outcome::Success)
        }
        Err(err) => {
            eprintln!("{}", err);
            Ok(Outcome::Failure)
        }
    }
}

fn start(docker: &DockerCli, repository: &str, out: &mut dyn Write) -> Result<Outcome> {
    match docker.start_image(repository) {
        Ok(container_id) => {
            info!("started container {}", container_id);
            writeln!(out, "Successfully started container from {}", repository)?;
            Ok(Outcome::Success)
        }
        Err(err) => {
            eprintln!("{}", err);
            Ok(Outcome::Failure)
        }
    }
}

fn image_id(docker: &DockerCli, repository: &str, out: &mut dyn Write) -> Result<Outcome> {
    match docker.image_id(repository) {
        Ok(image_id) => {
            writeln!(out, "{}", image_id.unwrap_or_default())?;
            Ok(Outcome::Success)
        }
        Err(err) => {
            eprintln!("{}", err);
            writeln!(out)?;
            Ok(Outcome::Failure)
        }
    }
}

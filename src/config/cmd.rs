use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Error;
use clap::{Args, Parser, Subcommand};

use crate::config::{DEFAULT_DOCKER_PROGRAM, DEFAULT_RPC_URL, HUB_BASE_URL};

#[derive(Parser)]
#[command(about = "Helper commands bundled with the NextMetal app", version)]
pub struct CmdArgs {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: SubCmd,
}

#[derive(Args)]
pub struct GlobalArgs {
    /// Docker executable. Accepts '${ENV_VAR}'.
    #[arg(long, global = true, default_value = DEFAULT_DOCKER_PROGRAM)]
    pub docker: String,

    /// Ethereum JSON-RPC endpoint. Accepts '${ENV_VAR}', e.g. '${METAL_RPC_URL}'.
    #[arg(long, global = true, default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Docker Hub API base url.
    #[arg(long, global = true, default_value = HUB_BASE_URL)]
    pub hub_url: String,

    /// HTTP request timeout in seconds.
    #[arg(long, global = true, default_value = "30")]
    pub http_timeout: u64,
}

#[derive(Subcommand)]
pub enum SubCmd {
    /// Print the name of the network behind the RPC endpoint
    CheckAccount(AddressArgs),
    /// Print the balance of an address in ETH
    CheckBalance(AddressArgs),
    /// Generate a fresh Ethereum keypair and print it as JSON
    GenerateAddress,
    /// Check that Docker is installed and its daemon is running
    CheckDocker,
    /// Run start/stop/pause/restart/rm against one container
    Container(ContainerCmdArgs),
    /// Print local images, containers, stats or inspect data as JSON
    Containers(QueryArgs),
    /// Docker Hub repositories: list, pull, delete, start, image id
    Hub(QueryArgs),
    /// Resize the logo into macOS, Windows and Linux icon sets
    Icons(IconsCmdArgs),
}

#[derive(Args)]
pub struct AddressArgs {
    /// Account address, passed to the node as is
    pub address: String,
}

#[derive(Args)]
pub struct ContainerCmdArgs {
    pub container_id: String,

    /// One of start, stop, pause, restart, rm
    pub command: String,

    /// Extra docker options, only 'rm' accepts '--force'
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub options: Vec<String>,
}

/// `-c <command> [args...]` style invocation.
#[derive(Args)]
pub struct QueryArgs {
    /// Command name, e.g. get_running_containers
    #[arg(short = 'c')]
    pub command: Option<String>,

    /// Command arguments
    #[arg(allow_hyphen_values = true)]
    pub args: Vec<String>,
}

#[derive(Args)]
pub struct IconsCmdArgs {
    /// Logo to resize, an http(s) URL or a local path
    #[arg(long, short)]
    pub source: Option<String>,

    /// Directory the icon sets are written to
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Queries understood by `containers -c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerQuery {
    RunningContainers,
    SudoacornImages,
    ContainerStats,
    ContainerInfo,
}

impl FromStr for ContainerQuery {
    type Err = anyhow::Error;

    fn from_str(arg: &str) -> Result<Self, Self::Err> {
        Ok(match arg {
            "get_running_containers" => ContainerQuery::RunningContainers,
            "get_sudoacorn_images" => ContainerQuery::SudoacornImages,
            "get_container_stats" => ContainerQuery::ContainerStats,
            "get_container_info" => ContainerQuery::ContainerInfo,
            _ => return Err(Error::msg(format!("unknown container query: {}", arg))),
        })
    }
}

/// Operations understood by `hub -c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HubOperation {
    ListRepos,
    Pull,
    Delete,
    Start,
    ImageId,
}

impl HubOperation {
    pub fn name(&self) -> &'static str {
        match self {
            HubOperation::ListRepos => "get_sudoacorn_repos",
            HubOperation::Pull => "pull",
            HubOperation::Delete => "delete",
            HubOperation::Start => "start",
            HubOperation::ImageId => "get_image_id",
        }
    }
}

impl FromStr for HubOperation {
    type Err = anyhow::Error;

    fn from_str(arg: &str) -> Result<Self, Self::Err> {
        Ok(match arg {
            "get_sudoacorn_repos" => HubOperation::ListRepos,
            "pull" => HubOperation::Pull,
            "delete" => HubOperation::Delete,
            "start" => HubOperation::Start,
            "get_image_id" => HubOperation::ImageId,
            _ => return Err(Error::msg(format!("unknown hub operation: {}", arg))),
        })
    }
}

/// Resolves `${NAME}` to the value of the environment variable `NAME`,
/// anything else is returned unchanged.
pub fn value_or_env(param: &str) -> anyhow::Result<String> {
    let value = if param.starts_with("${") && param.ends_with('}') {
        let name = &param[2..param.len() - 1];
        env::var(name).map_err(|_| Error::msg(format!("environment variable {} is not set", name)))?
    } else {
        param.to_string()
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_indirection() -> anyhow::Result<()> {
        assert_eq!(value_or_env("docker")?, "docker");
        assert_eq!(value_or_env("${PATH}")?, env::var("PATH")?);
        assert!(value_or_env("${METALCTL_SURELY_UNSET_VARIABLE}").is_err());
        Ok(())
    }

    #[test]
    fn query_names() {
        assert_eq!(
            "get_container_info".parse::<ContainerQuery>().ok(),
            Some(ContainerQuery::ContainerInfo)
        );
        assert!("get_everything".parse::<ContainerQuery>().is_err());
        for op in [
            HubOperation::ListRepos,
            HubOperation::Pull,
            HubOperation::Delete,
            HubOperation::Start,
            HubOperation::ImageId,
        ] {
            assert_eq!(op.name().parse::<HubOperation>().ok(), Some(op));
        }
    }

    #[test]
    fn container_options_keep_hyphens() {
        let args = CmdArgs::try_parse_from(["metalctl", "container", "abc123", "rm", "--force"])
            .expect("arguments should parse");
        match args.command {
            SubCmd::Container(container) => {
                assert_eq!(container.container_id, "abc123");
                assert_eq!(container.command, "rm");
                assert_eq!(container.options, vec!["--force".to_string()]);
            }
            _ => panic!("expected the container subcommand"),
        }
    }

    #[test]
    fn dash_c_queries() {
        let args = CmdArgs::try_parse_from(["metalctl", "containers", "-c", "get_container_info", "abc123"])
            .expect("arguments should parse");
        match args.command {
            SubCmd::Containers(query) => {
                assert_eq!(query.command.as_deref(), Some("get_container_info"));
                assert_eq!(query.args, vec!["abc123".to_string()]);
            }
            _ => panic!("expected the containers subcommand"),
        }
    }
}

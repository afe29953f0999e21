use anyhow::Result;

use crate::config::cmd::{value_or_env, GlobalArgs};

pub mod cmd;

/// Public Sepolia JSON-RPC endpoint used when `--rpc-url` is not given.
pub const DEFAULT_RPC_URL: &str = "https://rpc.sepolia.org";
pub const DEFAULT_DOCKER_PROGRAM: &str = "docker";

/// Docker Hub namespace whose repositories and local images are managed.
pub const HUB_NAMESPACE: &str = "sudoacorn";
pub const HUB_BASE_URL: &str = "https://hub.docker.com";
/// One page of the repository listing, the registry caps it at 100.
pub const HUB_PAGE_SIZE: u32 = 100;

pub const DEFAULT_LOGO_URL: &str =
    "https://raw.githubusercontent.com/acorn-sh/acorn-leaf-node/acorn_temp_05/Qt/dev/acorn-leaf-node/images/acorn_sh_logo.png";
pub const DEFAULT_ICON_DIR: &str = "output_icons";

/// Values shared by every subcommand, resolved from the global flags.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub docker_program: String,
    pub rpc_url: String,
    pub hub_url: String,
    pub http_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_args(global: &GlobalArgs) -> Result<AppConfig> {
        Ok(AppConfig {
            docker_program: value_or_env(&global.docker)?,
            rpc_url: value_or_env(&global.rpc_url)?,
            hub_url: value_or_env(&global.hub_url)?,
            http_timeout_secs: global.http_timeout,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            docker_program: DEFAULT_DOCKER_PROGRAM.to_string(),
            rpc_url: DEFAULT_RPC_URL.to_string(),
            hub_url: HUB_BASE_URL.to_string(),
            http_timeout_secs: 30,
        }
    }
}

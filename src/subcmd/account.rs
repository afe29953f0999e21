use std::io::Write;

use anyhow::Result;
use ethers_core::types::U256;
use log::debug;

use crate::config::cmd::AddressArgs;
use crate::config::AppConfig;
use crate::eth::rpc::RpcClient;
use crate::eth::{chain_name_of, format_ether};
use crate::subcmd::Outcome;

const NOT_CONNECTED: &str = "Failed to connect to the Ethereum network";

pub struct AccountCommand {}

impl AccountCommand {
    /// `Network: <name>`
    pub fn network(config: &AppConfig, args: &AddressArgs, out: &mut dyn Write) -> Result<Outcome> {
        let client = connect(config)?;
        let Some(client) = client else {
            writeln!(out, "{}", NOT_CONNECTED)?;
            return Ok(Outcome::Failure);
        };
        debug!("network lookup for {}", args.address);
        let chain_id = client.chain_id()?;
        writeln!(out, "{}", network_line(chain_id))?;
        Ok(Outcome::Success)
    }

    /// `<network>: <balance> ETH`
    pub fn balance(config: &AppConfig, args: &AddressArgs, out: &mut dyn Write) -> Result<Outcome> {
        let client = connect(config)?;
        let Some(client) = client else {
            writeln!(out, "{}", NOT_CONNECTED)?;
            return Ok(Outcome::Failure);
        };
        let chain_id = client.chain_id()?;
        let balance = client.balance(&args.address)?;
        writeln!(out, "{}", balance_line(chain_id, balance))?;
        Ok(Outcome::Success)
    }
}

fn connect(config: &AppConfig) -> Result<Option<RpcClient>> {
    let client = RpcClient::new(&config.rpc_url, config.http_timeout_secs)?;
    Ok(if client.is_connected() { Some(client) } else { None })
}

fn network_line(chain_id: U256) -> String {
    format!("Network: {}", chain_name_of(chain_id))
}

fn balance_line(chain_id: U256, wei: U256) -> String {
    format!("{}: {} ETH", chain_name_of(chain_id), format_ether(wei))
}

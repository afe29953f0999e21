use std::io::Write;

use anyhow::Result;

use crate::config::AppConfig;
use crate::eth::rpc::RpcClient;
use crate::eth::wallet::generate_keypair;
use crate::subcmd::Outcome;

pub struct GenerateAddressCommand {}

impl GenerateAddressCommand {
    /// Prints `{"address": ..., "private_key": ...}` once the node answers.
    pub fn generate(config: &AppConfig, out: &mut dyn Write) -> Result<Outcome> {
        let client = RpcClient::new(&config.rpc_url, config.http_timeout_secs)?;
        if !client.is_connected() {
            writeln!(out, "Failed to connect to Sepolia network")?;
            writeln!(out, "Failed to generate Ethereum address")?;
            return Ok(Outcome::Failure);
        }
        let keypair = generate_keypair();
        writeln!(out, "{}", serde_json::to_string(&keypair)?)?;
        Ok(Outcome::Success)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::eth::rpc::testing::serve_node;

    #[test]
    fn keypair_once_connected() -> Result<()> {
        let config = AppConfig {
            rpc_url: serve_node(vec![("web3_clientVersion", json!("Geth/v1.14.8-stable"))]),
            http_timeout_secs: 5,
            ..AppConfig::default()
        };
        let mut out = Vec::new();
        assert_eq!(GenerateAddressCommand::generate(&config, &mut out)?, Outcome::Success);
        let keypair: Value = serde_json::from_slice(&out)?;
        assert_eq!(keypair["address"].as_str().map(str::len), Some(42));
        assert_eq!(keypair["private_key"].as_str().map(str::len), Some(66));
        Ok(())
    }

    #[test]
    fn nothing_generated_without_node() -> Result<()> {
        let config = AppConfig {
            rpc_url: "http://127.0.0.1:9/".to_string(),
            http_timeout_secs: 2,
            ..AppConfig::default()
        };
        let mut out = Vec::new();
        assert_eq!(GenerateAddressCommand::generate(&config, &mut out)?, Outcome::Failure);
        assert_eq!(
            String::from_utf8(out)?,
            "Failed to connect to Sepolia network\nFailed to generate Ethereum address\n"
        );
        Ok(())
    }
}

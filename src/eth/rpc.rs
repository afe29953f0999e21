use std::future::Future;
use std::time::Duration;

use anyhow::{Context, Error, Result};
use ethers_core::types::U256;
use ethers_providers::{Http, Middleware, Provider, ProviderError};
use log::debug;
use tokio::runtime::{Builder, Runtime};
use url::Url;

use crate::http::redact;

/// Blocking facade over an ethers `Provider<Http>`.
///
/// Every call runs on a private current-thread runtime and is bounded by
/// the configured timeout.
pub struct RpcClient {
    provider: Provider<Http>,
    runtime: Runtime,
    url: Url,
    timeout: Duration,
}

impl RpcClient {
    pub fn new(rpc_url: &str, timeout_secs: u64) -> Result<RpcClient> {
        let url = Url::parse(rpc_url).context("invalid rpc url")?;
        let provider = Provider::new(Http::new(url.clone()));
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .context("failed to build rpc runtime")?;
        Ok(RpcClient {
            provider,
            runtime,
            url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// True when the node answers `web3_clientVersion`.
    pub fn is_connected(&self) -> bool {
        match self.block_on("web3_clientVersion", self.provider.client_version()) {
            Ok(version) => {
                debug!("connected to {}", version);
                true
            }
            Err(err) => {
                debug!("rpc endpoint unreachable: {:#}", err);
                false
            }
        }
    }

    pub fn chain_id(&self) -> Result<U256> {
        self.block_on("eth_chainId", self.provider.get_chainid())
    }

    /// Balance in wei at the latest block. The address goes to the node as
    /// given, the node is the one to reject a malformed one.
    pub fn balance(&self, address: &str) -> Result<U256> {
        self.block_on(
            "eth_getBalance",
            self.provider.request::<_, U256>("eth_getBalance", (address, "latest")),
        )
    }

    fn block_on<T, F>(&self, method: &str, call: F) -> Result<T>
    where
        F: Future<Output = Result<T, ProviderError>>,
    {
        let result = self
            .runtime
            .block_on(async { tokio::time::timeout(self.timeout, call).await })
            .map_err(|_| Error::msg(format!("rpc call {} timed out", method)))?;
        result.map_err(|err| {
            let message = err.to_string().replace(self.url.as_str(), &redact(&self.url));
            Error::msg(format!("rpc call {} failed: {}", method, message))
        })
    }
}

#[cfg(test)]
pub mod testing {
    use serde_json::{json, Value};

    use crate::http::testing::serve;

    /// Local JSON-RPC node answering each known method with a fixed result
    /// and every other method with a `-32601` error.
    pub fn serve_node(results: Vec<(&'static str, Value)>) -> String {
        serve(move |request| {
            let call: Value = serde_json::from_slice(&request.body).unwrap_or_default();
            let method = call["method"].as_str().unwrap_or_default();
            let mut response = json!({"jsonrpc": "2.0", "id": call["id"].clone()});
            match results.iter().find(|(name, _)| *name == method) {
                Some((_, result)) => response["result"] = result.clone(),
                None => {
                    response["error"] = json!({
                        "code": -32601,
                        "message": format!("the method {} does not exist/is not available", method),
                    })
                }
            }
            (200, response.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::testing::serve_node;
    use super::*;
    use crate::http::testing::serve;

    #[test]
    fn connected_node() -> Result<()> {
        let url = serve_node(vec![
            ("web3_clientVersion", json!("Geth/v1.14.8-stable")),
            ("eth_chainId", json!("0xaa36a7")),
            ("eth_getBalance", json!("0xde0b6b3a7640000")),
        ]);
        let client = RpcClient::new(&url, 5)?;
        assert!(client.is_connected());
        assert_eq!(client.chain_id()?, U256::from(11155111u64));
        assert_eq!(client.balance("0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf")?, U256::exp10(18));
        Ok(())
    }

    #[test]
    fn node_errors_surface() -> Result<()> {
        let url = serve_node(vec![("web3_clientVersion", json!("Geth/v1.14.8-stable"))]);
        let client = RpcClient::new(&url, 5)?;
        let err = client.chain_id().unwrap_err();
        assert!(err.to_string().starts_with("rpc call eth_chainId failed"));
        Ok(())
    }

    #[test]
    fn address_is_sent_as_given() -> Result<()> {
        let url = serve(|request| {
            let call: Value = serde_json::from_slice(&request.body).unwrap_or_default();
            let result = if call["params"] == json!(["0xabc", "latest"]) { "0x2a" } else { "0x0" };
            (200, json!({"jsonrpc": "2.0", "id": call["id"].clone(), "result": result}).to_string())
        });
        assert_eq!(RpcClient::new(&url, 5)?.balance("0xabc")?, U256::from(42u64));
        Ok(())
    }

    #[test]
    fn unreachable_node_hides_the_path() -> Result<()> {
        let client = RpcClient::new("http://127.0.0.1:9/v2/secret-key", 2)?;
        assert!(!client.is_connected());
        let err = client.chain_id().unwrap_err();
        assert!(!err.to_string().contains("secret-key"));
        Ok(())
    }
}

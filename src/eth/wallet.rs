use ethers_core::k256::ecdsa::SigningKey;
use ethers_core::rand::thread_rng;
use ethers_core::utils::{secret_key_to_address, to_checksum};
use serde::Serialize;

/// A freshly generated account. Nothing is stored, the caller owns the key.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Keypair {
    /// EIP-55 checksummed address
    pub address: String,
    /// 0x-prefixed hex of the 32 byte secret
    pub private_key: String,
}

pub fn generate_keypair() -> Keypair {
    let signing_key = SigningKey::random(&mut thread_rng());
    keypair_of(&signing_key)
}

fn keypair_of(signing_key: &SigningKey) -> Keypair {
    let address = secret_key_to_address(signing_key);
    Keypair {
        address: to_checksum(&address, None),
        private_key: format!("0x{}", hex::encode(signing_key.to_bytes())),
    }
}

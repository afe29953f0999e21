use ethers_core::types::U256;

pub mod rpc;
pub mod wallet;

pub const UNKNOWN_CHAIN: &str = "Unknown Chain";

/// Decimals shown for ETH amounts.
const DISPLAY_DECIMALS: usize = 4;
/// Decimals of ether, 1 ETH is 10^18 wei.
const ETHER_DECIMALS: usize = 18;

/// Display name of a chain id.
pub fn chain_name(chain_id: u64) -> &'static str {
    match chain_id {
        1 => "Ethereum",
        11155111 => "Sepolia",
        _ => UNKNOWN_CHAIN,
    }
}

/// Same as [`chain_name`] for ids as returned by the node.
pub fn chain_name_of(chain_id: U256) -> &'static str {
    match u64::try_from(chain_id) {
        Ok(id) => chain_name(id),
        Err(_) => UNKNOWN_CHAIN,
    }
}

/// Formats a wei amount as ether with four decimals, rounding half to even.
pub fn format_ether(wei: U256) -> String {
    let step = U256::exp10(ETHER_DECIMALS - DISPLAY_DECIMALS);
    let (mut units, rest) = wei.div_mod(step);
    let half = step / 2;
    if rest > half || (rest == half && units.bit(0)) {
        units += U256::one();
    }
    let (whole, fraction) = units.div_mod(U256::exp10(DISPLAY_DECIMALS));
    format!("{}.{:0width$}", whole, fraction.low_u64(), width = DISPLAY_DECIMALS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wei(amount: &str) -> U256 {
        U256::from_dec_str(amount).expect("decimal wei amount")
    }

    #[test]
    fn known_chains() {
        assert_eq!(chain_name(1), "Ethereum");
        assert_eq!(chain_name(11155111), "Sepolia");
    }

    #[test]
    fn anything_else_is_unknown() {
        for id in [0, 5, 137, 17000, u64::MAX] {
            assert_eq!(chain_name(id), "Unknown Chain");
        }
        assert_eq!(chain_name_of(U256::from(11155111u64)), "Sepolia");
        assert_eq!(chain_name_of(U256::MAX), "Unknown Chain");
    }

    #[test]
    fn whole_and_fractional_ether() {
        assert_eq!(format_ether(U256::zero()), "0.0000");
        assert_eq!(format_ether(wei("1000000000000000000")), "1.0000");
        assert_eq!(format_ether(wei("1234500000000000000")), "1.2345");
        assert_eq!(format_ether(wei("123456789000000000000")), "123.4568");
        assert_eq!(format_ether(wei("1")), "0.0000");
        assert_eq!(format_ether(wei("99999999999999999")), "0.1000");
    }

    #[test]
    fn ties_round_to_even() {
        // 0.00005 lies halfway between 0.0000 and 0.0001
        assert_eq!(format_ether(wei("50000000000000")), "0.0000");
        // 0.00015 lies halfway between 0.0001 and 0.0002
        assert_eq!(format_ether(wei("150000000000000")), "0.0002");
        assert_eq!(format_ether(wei("250000000000000")), "0.0002");
        assert_eq!(format_ether(wei("250000000000001")), "0.0003");
        // carries into the integer part
        assert_eq!(format_ether(wei("1999950000000000000")), "2.0000");
    }
}

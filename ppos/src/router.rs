use {
    crate::{
        bech32::to_bech32_address,
        config::*,
        error::{PposError::*, Result},
    },
    ethereum_types::H160,
    std::ops::Range,
};

/// Function code ranges served by each precompiled contract
pub const ROUTES: [(Range<u32>, H160); 5] = [
    (1000..2000, STAKING_CONTRACT),
    (2000..3000, GOVERNANCE_CONTRACT),
    (3000..4000, SLASHING_CONTRACT),
    (4000..5000, RESTRICTING_CONTRACT),
    (5000..6000, REWARD_CONTRACT),
];

pub fn address_for_function_code(code: u32) -> Result<H160> {
    ROUTES
        .iter()
        .find(|(range, _)| range.contains(&code))
        .map(|(_, address)| *address)
        .ok_or(UnroutedFunctionCode(code))
}

pub fn bech32_for_function_code(hrp: &str, code: u32) -> Result<String> {
    let address = address_for_function_code(code)?;
    to_bech32_address(hrp, &address)
}

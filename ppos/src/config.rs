use ethereum_types::H160;

/// Human-readable part of PlatON mainnet addresses
pub const DEFAULT_HRP: &str = "lat";

/// Block tag used for read-only calls
pub const LATEST: &str = "latest";

/// Precompiled contracts
pub const RESTRICTING_CONTRACT: H160 = precompile(0x01);
pub const STAKING_CONTRACT: H160 = precompile(0x02);
pub const SLASHING_CONTRACT: H160 = precompile(0x04);
pub const GOVERNANCE_CONTRACT: H160 = precompile(0x05);
pub const REWARD_CONTRACT: H160 = precompile(0x06);

/// Receipt polling
pub const RECEIPT_POLL_INTERVAL_MS: u64 = 1000;
pub const RECEIPT_POLL_ATTEMPTS: u32 = 60;

const fn precompile(last: u8) -> H160 {
    let mut bytes = [0_u8; 20];
    bytes[0] = 0x10;
    bytes[19] = last;
    H160(bytes)
}

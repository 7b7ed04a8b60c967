pub mod bech32;
mod config;
pub mod decode;
pub mod error;
pub mod params;
pub mod router;

pub use config::*;
pub use decode::*;
pub use ethereum_types::{H160, H256, U256};
pub use params::*;
pub use router::*;

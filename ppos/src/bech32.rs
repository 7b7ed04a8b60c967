//! Bech32 (BIP-173) addresses of PlatON accounts.
//!
//! PlatON renders a 20-byte account as `hrp` + `1` + base32 payload + 6 checksum
//! characters, e.g. `lat1zqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqzsjx8h7`.

use {
    crate::{
        config::DEFAULT_HRP,
        error::{PposError::*, Result},
    },
    ::bech32::{FromBase32, ToBase32, Variant},
    ethereum_types::H160,
};

fn address_format(e: ::bech32::Error) -> crate::error::PposError {
    AddressFormat(e.to_string())
}

pub fn encode(hrp: &str, data: &[u8]) -> Result<String> {
    ::bech32::encode(hrp, data.to_base32(), Variant::Bech32).map_err(address_format)
}

pub fn decode(address: &str) -> Result<(String, Vec<u8>)> {
    let (hrp, words, variant) = ::bech32::decode(address).map_err(address_format)?;
    if variant != Variant::Bech32 {
        return Err(AddressFormat(format!("unexpected checksum variant: {variant:?}")));
    }
    let data = Vec::<u8>::from_base32(&words).map_err(address_format)?;

    Ok((hrp, data))
}

/// Decodes a PlatON address, rejecting any other human-readable part.
pub fn decode_with_prefix(expected: &str, address: &str) -> Result<H160> {
    let (hrp, data) = decode(address)?;
    if hrp != expected.to_ascii_lowercase() {
        return Err(InvalidPrefix {
            expected: expected.to_string(),
            found: hrp,
        });
    }
    if data.len() != H160::len_bytes() {
        return Err(AddressFormat(format!("invalid payload length: {}", data.len())));
    }

    Ok(H160::from_slice(&data))
}

pub fn to_bech32_address(hrp: &str, address: &H160) -> Result<String> {
    encode(hrp, address.as_bytes())
}

pub fn to_platon_address(address: &H160) -> Result<String> {
    to_bech32_address(DEFAULT_HRP, address)
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::config::*,
        std::str::FromStr,
    };

    #[test]
    fn precompile_addresses() {
        let cases = [
            (RESTRICTING_CONTRACT, "lat1zqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqp7pn3ep"),
            (STAKING_CONTRACT, "lat1zqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqzsjx8h7"),
            (SLASHING_CONTRACT, "lat1zqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqyva9ztf"),
            (GOVERNANCE_CONTRACT, "lat1zqqqqqqqqqqqqqqqqqqqqqqqqqqqqqq93t3hkm"),
            (REWARD_CONTRACT, "lat1zqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqxlcypcy"),
        ];

        for (address, expected) in cases {
            assert_eq!(to_platon_address(&address).unwrap(), expected);
        }
    }

    #[test]
    fn other_hrp() {
        let encoded = to_bech32_address("lax", &STAKING_CONTRACT).unwrap();
        assert_eq!(encoded, "lax1zqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqzlh5ge3");

        let zero = to_bech32_address("lat", &H160::zero()).unwrap();
        assert_eq!(zero, "lat1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqq542u6a");
    }

    #[test]
    fn round_trip() {
        let addresses = [
            H160::zero(),
            H160::repeat_byte(0xff),
            STAKING_CONTRACT,
            H160::from_str("82a33964706683db62b85a59128ce2fc07c91658").unwrap(),
        ];

        for hrp in ["lat", "lax", "atp"] {
            for address in addresses {
                let encoded = to_bech32_address(hrp, &address).unwrap();
                let (decoded_hrp, data) = decode(&encoded).unwrap();
                assert_eq!(decoded_hrp, hrp);
                assert_eq!(H160::from_slice(&data), address);
            }
        }
    }

    #[test]
    fn bip173_uppercase() {
        let (hrp, data) = decode("A12UEL5L").unwrap();
        assert_eq!(hrp, "a");
        assert!(data.is_empty());
    }

    #[test]
    fn prefix_mismatch() {
        let err = decode_with_prefix("lat", "lax1zqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqzlh5ge3").unwrap_err();
        match err {
            InvalidPrefix { expected, found } => {
                assert_eq!(expected, "lat");
                assert_eq!(found, "lax");
            }
            e => panic!("unexpected error {e:?}"),
        }

        let address =
            decode_with_prefix("lat", "lat1zqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqzsjx8h7").unwrap();
        assert_eq!(address, STAKING_CONTRACT);
    }

    #[test]
    fn invalid_addresses() {
        // checksum
        assert!(matches!(
            decode("lat1zqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqzsjx8h8"),
            Err(AddressFormat(_))
        ));
        // mixed case
        assert!(matches!(
            decode("Lat1zqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqzsjx8h7"),
            Err(AddressFormat(_))
        ));
        // 'b' is not in the charset
        assert!(matches!(
            decode("lat1zqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqzsjx8hb"),
            Err(AddressFormat(_))
        ));
        assert!(matches!(decode("zqqqqqqqqq"), Err(AddressFormat(_))));
        assert!(matches!(decode("1qqqqqqqqq"), Err(AddressFormat(_))));
    }

    #[test]
    fn invalid_hrp() {
        assert!(matches!(encode("", &[1, 2, 3]), Err(AddressFormat(_))));
        assert!(matches!(encode("la t", &[1, 2, 3]), Err(AddressFormat(_))));
    }
}

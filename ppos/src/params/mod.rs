mod call;
pub mod order;

pub use {call::*, order::*};

use {
    ethereum_types::{H160, H256, U256},
    rlp::{Encodable, RlpStream},
    std::collections::BTreeMap,
};

pub type NamedArgs = BTreeMap<String, Param>;

/// One positional slot of a precompile call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Param {
    #[default]
    Null,
    Uint(U256),
    Bytes(Vec<u8>),
    Text(String),
    List(Vec<Param>),
}

// Scalars are written through the encoder so that the enclosing `append` counts
// each of them once.
impl Encodable for Param {
    fn rlp_append(&self, stream: &mut RlpStream) {
        match self {
            Param::Null => stream.encoder().encode_value(&[]),
            Param::Uint(value) => value.rlp_append(stream),
            Param::Bytes(bytes) => stream.encoder().encode_value(bytes),
            Param::Text(text) => stream.encoder().encode_value(text.as_bytes()),
            Param::List(items) => {
                stream.begin_list(items.len());
                for item in items {
                    stream.append(item);
                }
            }
        }
    }
}

macro_rules! impl_from_uint {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Param {
                fn from(value: $ty) -> Self {
                    Param::Uint(U256::from(value))
                }
            }
        )*
    };
}

impl_from_uint!(u8, u16, u32, u64, u128, U256);

impl From<Vec<u8>> for Param {
    fn from(bytes: Vec<u8>) -> Self {
        Param::Bytes(bytes)
    }
}

impl From<&[u8]> for Param {
    fn from(bytes: &[u8]) -> Self {
        Param::Bytes(bytes.to_vec())
    }
}

impl From<H160> for Param {
    fn from(address: H160) -> Self {
        Param::Bytes(address.as_bytes().to_vec())
    }
}

impl From<H256> for Param {
    fn from(hash: H256) -> Self {
        Param::Bytes(hash.as_bytes().to_vec())
    }
}

/// `0x`-prefixed hex strings are taken as raw bytes, anything else as UTF-8 text.
impl From<&str> for Param {
    fn from(value: &str) -> Self {
        match hex_bytes(value) {
            Some(bytes) => Param::Bytes(bytes),
            None => Param::Text(value.to_string()),
        }
    }
}

impl From<String> for Param {
    fn from(value: String) -> Self {
        match hex_bytes(&value) {
            Some(bytes) => Param::Bytes(bytes),
            None => Param::Text(value),
        }
    }
}

impl From<Vec<Param>> for Param {
    fn from(items: Vec<Param>) -> Self {
        Param::List(items)
    }
}

impl<T: Into<Param>> From<Option<T>> for Param {
    fn from(value: Option<T>) -> Self {
        value.map_or(Param::Null, Into::into)
    }
}

fn hex_bytes(value: &str) -> Option<Vec<u8>> {
    let digits = value.strip_prefix("0x")?;
    if !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    if digits.len() % 2 == 1 {
        hex::decode(format!("0{digits}")).ok()
    } else {
        hex::decode(digits).ok()
    }
}

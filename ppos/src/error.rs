use {
    hex::FromHexError,
    rlp::DecoderError,
    serde_json::Value,
    thiserror::Error,
};

pub type Result<T> = std::result::Result<T, PposError>;

#[derive(Debug, Error)]
pub enum PposError {
    #[error("Function code is not in the parameter order table: {0}")]
    UnknownFunctionCode(u32),

    #[error("Function code is outside of all precompile ranges: {0}")]
    UnroutedFunctionCode(u32),

    #[error("Invalid bech32 address: {0}")]
    AddressFormat(String),

    #[error("Invalid address prefix: expected {expected}, got {found}")]
    InvalidPrefix { expected: String, found: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("JSON-RPC error: {0}")]
    RpcProtocol(Value),

    #[error("RPC provider is not configured")]
    MissingProvider,

    #[error("Transaction receipt not found: {0} after {1} attempts")]
    ReceiptTimeout(String, u32),

    #[error("RLP Decoder error: {0}")]
    RlpDecoderError(#[from] DecoderError),

    #[error("Hex error: {0}")]
    HexError(#[from] FromHexError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Custom error: {0}")]
    Custom(String),
}

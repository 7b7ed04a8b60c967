use anyhow::{anyhow, bail, Context};
use ppos::{NamedArgs, Param, H160};
use ppos_client::Settings;
use serde_json::Value;
use std::env;
use std::str::FromStr;

pub struct CliParams {
    /// PPOS function code
    pub func_type: u32,
    /// Named call arguments
    pub args: NamedArgs,
    /// Account the transaction request is built for
    pub from: Option<H160>,
    /// Client settings
    pub settings: Settings,
}

impl CliParams {
    /// Get the params from the environment
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            func_type: env::var("FUNC_TYPE")
                .context("FUNC_TYPE not specified")?
                .parse()
                .context("Failed to parse FUNC_TYPE")?,
            args: match env::var("PPOS_ARGS") {
                Ok(s) => parse_args(&s).context("Failed to parse PPOS_ARGS")?,
                Err(_) => NamedArgs::new(),
            },
            from: env::var("PPOS_FROM")
                .ok()
                .map(|s| {
                    H160::from_str(&s).map_err(|e| {
                        anyhow!("Failed to parse H160 from PPOS_FROM {s:#?} {:?}", e)
                    })
                })
                .transpose()?,
            settings: Settings::from_env().context("Failed to read client settings")?,
        })
    }
}

/// Parses a JSON object of named call arguments
pub fn parse_args(json: &str) -> anyhow::Result<NamedArgs> {
    let value: Value = serde_json::from_str(json).context("not a JSON document")?;
    let object = value
        .as_object()
        .ok_or_else(|| anyhow!("a JSON object expected, found {value}"))?;

    object
        .iter()
        .map(|(name, value)| Ok((name.clone(), to_param(value).context(name.clone())?)))
        .collect()
}

/// Numbers up to `u64` become integers; strings follow the `0x`-hex or text rule.
fn to_param(value: &Value) -> anyhow::Result<Param> {
    let param = match value {
        Value::Null => Param::Null,
        Value::Number(n) => n
            .as_u64()
            .map(Param::from)
            .ok_or_else(|| anyhow!("unsigned integer expected, found {n}"))?,
        Value::String(s) => Param::from(s.as_str()),
        Value::Array(items) => Param::List(
            items
                .iter()
                .map(to_param)
                .collect::<anyhow::Result<Vec<_>>>()?,
        ),
        Value::Bool(_) | Value::Object(_) => bail!("unsupported argument: {value}"),
    };

    Ok(param)
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        ppos::{PposCall, SUBMIT_TEXT},
    };

    #[test]
    fn named_args() {
        let args = parse_args(
            r#"{"stakingBlockNum": 100, "nodeId": "0x0abc", "amount": 1000000000000000000, "name": "x"}"#,
        )
        .unwrap();

        assert_eq!(args["stakingBlockNum"], Param::from(100_u64));
        assert_eq!(args["nodeId"], Param::Bytes(vec![0x0a, 0xbc]));
        assert_eq!(args["amount"], Param::from(1_000_000_000_000_000_000_u64));
        assert_eq!(args["name"], Param::Text("x".to_string()));
    }

    #[test]
    fn digit_strings_stay_text() {
        let args = parse_args(r#"{"verifier": "0x01", "pIDID": "100"}"#).unwrap();
        assert_eq!(args["pIDID"], Param::Text("100".to_string()));

        let call = PposCall::by_name(SUBMIT_TEXT, &args).unwrap();
        assert_eq!(call.data(), "0xca838207d0018483313030");

        // amounts above u64 are given in hex
        let args = parse_args(r#"{"amount": "0x056bc75e2d63100000"}"#).unwrap();
        assert_eq!(
            args["amount"],
            Param::Bytes(vec![0x05, 0x6b, 0xc7, 0x5e, 0x2d, 0x63, 0x10, 0x00, 0x00])
        );
    }

    #[test]
    fn lists_and_nulls() {
        let args = parse_args(r#"{"nodeIDs": ["0x01", "0x02"], "address": null}"#).unwrap();

        assert_eq!(
            args["nodeIDs"],
            Param::List(vec![Param::Bytes(vec![1]), Param::Bytes(vec![2])])
        );
        assert_eq!(args["address"], Param::Null);
    }

    #[test]
    fn unsupported() {
        assert!(parse_args("[1, 2]").is_err());
        assert!(parse_args(r#"{"typ": -1}"#).is_err());
        assert!(parse_args(r#"{"typ": true}"#).is_err());
        assert!(parse_args(r#"{"plan": {"epoch": 1}}"#).is_err());
        assert!(parse_args("not json").is_err());
    }
}

use {
    rlp::Rlp,
    serde_json::Value,
    tracing::debug,
};

/// Decodes the hex result of a `platon_call`.
///
/// The payload is JSON text whose `Data` field usually holds JSON text of its own.
/// Decoding is best effort: whatever fails to parse is returned as it was.
pub fn decode_hex_result(hex_str: &str) -> Value {
    let digits = hex_str
        .strip_prefix("0x")
        .or_else(|| hex_str.strip_prefix("0X"))
        .unwrap_or(hex_str);

    let bytes = match hex::decode(digits) {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!("result is not hex: {}", e);
            return Value::String(hex_str.to_string());
        }
    };
    let text = String::from_utf8_lossy(&bytes).into_owned();

    let mut value = match serde_json::from_str::<Value>(&text) {
        Ok(value) => value,
        Err(_) => return Value::String(text),
    };

    let nested = value
        .get("Data")
        .and_then(Value::as_str)
        .and_then(|s| serde_json::from_str::<Value>(s).ok());
    if let Some(nested) = nested {
        value["Data"] = nested;
    }

    value
}

fn parse_text(bytes: &[u8]) -> Value {
    let text = String::from_utf8_lossy(bytes).into_owned();
    serde_json::from_str(&text).unwrap_or(Value::String(text))
}

/// Decodes the RLP payload of a PPOS receipt log.
pub fn decode_log_data(data: &[u8]) -> Option<Value> {
    let rlp = Rlp::new(data);
    let payload = rlp.payload_info().ok()?;

    if rlp.is_data() {
        let bytes = rlp.data().ok()?;
        let text = std::str::from_utf8(bytes).ok()?;
        return serde_json::from_str(text).ok();
    }

    // `iter` stops at the first malformed item; the items must cover the whole payload
    let items = rlp.iter().collect::<Vec<_>>();
    let consumed = items.iter().map(|item| item.as_raw().len()).sum::<usize>();
    if consumed != payload.value_len {
        debug!("malformed log data: {} of {} payload bytes", consumed, payload.value_len);
        return None;
    }

    let values = items
        .iter()
        .map(|item| item.data().map(parse_text))
        .collect::<Result<Vec<_>, _>>()
        .ok()?;

    Some(Value::Array(values))
}

/// Adds a `dataStr` entry to every log of `block` whose data decodes.
pub fn decode_block_logs(block: &mut Value) {
    let Some(logs) = block.get_mut("logs").and_then(Value::as_array_mut) else {
        return;
    };

    for log in logs {
        let decoded = log
            .get("data")
            .and_then(Value::as_str)
            .and_then(|s| hex::decode(s.trim_start_matches("0x")).ok())
            .and_then(|bytes| decode_log_data(&bytes));

        if let (Some(decoded), Some(log)) = (decoded, log.as_object_mut()) {
            log.insert("dataStr".to_string(), decoded);
        }
    }
}

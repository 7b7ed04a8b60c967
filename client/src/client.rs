use {
    crate::{
        settings::Settings,
        transport::{HttpTransport, Transport},
    },
    ppos::{
        decode_hex_result,
        error::{PposError, Result},
        tx_request, NamedArgs, Param, PposCall, TxRequest, GET_RELATED_LIST_BY_DEL_ADDR, H160,
        H256, LATEST,
    },
    serde_json::{json, Value},
    std::{
        thread,
        time::{Duration, SystemTime, UNIX_EPOCH},
    },
    tracing::{debug, info, warn},
};

/// JSON-RPC client of the PPOS precompiled contracts
pub struct Ppos<T: Transport = HttpTransport> {
    settings: Settings,
    transport: Option<T>,
}

impl Ppos<HttpTransport> {
    pub fn new(settings: Settings) -> Result<Self> {
        let transport = match settings.provider.as_deref() {
            Some(url) => {
                info!("Provider URL: {}", url);
                Some(HttpTransport::new(url)?)
            }
            None => None,
        };

        Ok(Self {
            settings,
            transport,
        })
    }

    /// Replaces the settings. The HTTP transport is rebuilt only when a provider
    /// is given; otherwise the current one is kept.
    pub fn update_settings(&mut self, settings: Settings) -> Result<()> {
        if let Some(url) = self.merge_settings(settings) {
            info!("Provider URL: {}", url);
            self.transport = Some(HttpTransport::new(&url)?);
        }

        Ok(())
    }
}

impl<T: Transport> Ppos<T> {
    pub fn with_transport(settings: Settings, transport: T) -> Self {
        Self {
            settings,
            transport: Some(transport),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    fn merge_settings(&mut self, mut settings: Settings) -> Option<String> {
        let provider = settings.provider.clone();
        if provider.is_none() {
            settings.provider = self.settings.provider.take();
        }
        self.settings = settings;

        provider
    }

    pub fn rpc(&self, method: &str, params: Value) -> Result<Value> {
        let transport = self.transport.as_ref().ok_or(PposError::MissingProvider)?;

        let request = json!({
            "jsonrpc": "2.0",
            "method": method,
            "params": params,
            "id": request_id(),
        });
        debug!("rpc request: {}", request);

        let reply = transport.post(&request)?;
        if reply.status != 200 {
            return Err(PposError::Transport(format!(
                "request error: HTTP {}",
                reply.status
            )));
        }

        let result = reply.body.get("result");
        let error = reply.body.get("error").filter(|e| !e.is_null());

        match (result, error) {
            (None, Some(error)) => {
                warn!("{} failed: {}", method, error);
                Err(PposError::RpcProtocol(error.clone()))
            }
            (Some(result), _) => Ok(result.clone()),
            (None, None) => Ok(Value::Null),
        }
    }

    /// Read-only `platon_call` of a precompile; the hex result is decoded
    /// with [`decode_hex_result`].
    pub fn call(&self, call: &PposCall) -> Result<Value> {
        let to = call.bech32_to(&self.settings.hrp)?;
        let data = call.data();

        let result = self.rpc("platon_call", json!([{ "to": to, "data": data }, LATEST]))?;

        match result.as_str() {
            Some(hex_str) => Ok(decode_hex_result(hex_str)),
            None => Err(PposError::Custom(format!(
                "unexpected platon_call result: {result}"
            ))),
        }
    }

    pub fn call_by_position(&self, func_type: u32, args: Vec<Param>) -> Result<Value> {
        self.call(&PposCall::by_position(func_type, args))
    }

    pub fn call_by_name(&self, func_type: u32, args: &NamedArgs) -> Result<Value> {
        let call = PposCall::by_name(func_type, args)?;
        self.call(&call)
    }

    /// Nodes delegated to by `account`
    pub fn delegation_info(&self, account: &H160) -> Result<Value> {
        self.call_by_position(GET_RELATED_LIST_BY_DEL_ADDR, vec![Param::from(*account)])
    }

    /// Unsigned transaction for a wallet, carrying the configured gas limits
    pub fn tx_request(&self, from: &H160, call: &PposCall) -> Result<TxRequest> {
        let request = tx_request(from, call)?;
        Ok(request.with_gas(self.settings.gas, self.settings.gas_price))
    }

    pub fn transaction_receipt(&self, hash: &H256) -> Result<Option<Value>> {
        let receipt = self.rpc("platon_getTransactionReceipt", json!([format!("{hash:#x}")]))?;

        Ok(Some(receipt).filter(|r| !r.is_null()))
    }

    /// Polls for the receipt of `hash` every `interval`, at most `attempts` times.
    /// Transport failures count as a missed attempt.
    pub fn wait_for_receipt(&self, hash: &H256, interval: Duration, attempts: u32) -> Result<Value> {
        for attempt in 1..=attempts {
            match self.transaction_receipt(hash) {
                Ok(Some(receipt)) => {
                    info!("receipt of {:#x} found after {} attempts", hash, attempt);
                    return Ok(receipt);
                }
                Ok(None) => debug!("receipt of {:#x} not found, attempt {}", hash, attempt),
                Err(PposError::Transport(e)) => warn!("receipt of {:#x}: {}", hash, e),
                Err(e) => return Err(e),
            }

            if attempt < attempts {
                thread::sleep(interval);
            }
        }

        Err(PposError::ReceiptTimeout(format!("{hash:#x}"), attempts))
    }
}

fn request_id() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

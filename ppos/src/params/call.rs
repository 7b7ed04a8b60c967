use {
    super::{param_order, NamedArgs, Param},
    crate::{
        error::{PposError::*, Result},
        router::{address_for_function_code, bech32_for_function_code},
    },
    ethereum_types::{H160, U256},
    rlp::RlpStream,
    serde::Serialize,
    tracing::debug,
};

/// Orders `args` by the declared parameter names of `code`.
/// The result starts with the function code itself; a name missing from `args`
/// still takes its slot as [`Param::Null`].
pub fn build_call_params(code: u32, args: &NamedArgs) -> Result<Vec<Param>> {
    let order = param_order(code).ok_or(UnknownFunctionCode(code))?;

    let mut params = Vec::with_capacity(order.len() + 1);
    params.push(Param::from(code));
    params.extend(
        order
            .iter()
            .map(|name| args.get(*name).cloned().unwrap_or_default()),
    );

    Ok(params)
}

/// Call data: `0x` + RLP(list of RLP(param)).
pub fn encode_call_data(params: &[Param]) -> String {
    let mut stream = RlpStream::new_list(params.len());
    for param in params {
        debug!("encoding param: {:?}", param);
        stream.append(&rlp::encode(param).to_vec());
    }

    format!("0x{}", hex::encode(stream.out()))
}

/// A call to one of the PPOS precompiled contracts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PposCall {
    func_type: u32,
    args: Vec<Param>,
}

impl PposCall {
    pub fn by_position(func_type: u32, args: Vec<Param>) -> Self {
        Self { func_type, args }
    }

    pub fn by_name(func_type: u32, args: &NamedArgs) -> Result<Self> {
        let mut params = build_call_params(func_type, args)?;
        params.remove(0);

        Ok(Self {
            func_type,
            args: params,
        })
    }

    pub fn func_type(&self) -> u32 {
        self.func_type
    }

    pub fn args(&self) -> &[Param] {
        &self.args
    }

    pub fn params(&self) -> Vec<Param> {
        let mut params = Vec::with_capacity(self.args.len() + 1);
        params.push(Param::from(self.func_type));
        params.extend(self.args.iter().cloned());

        params
    }

    pub fn data(&self) -> String {
        encode_call_data(&self.params())
    }

    pub fn to(&self) -> Result<H160> {
        address_for_function_code(self.func_type)
    }

    pub fn bech32_to(&self, hrp: &str) -> Result<String> {
        bech32_for_function_code(hrp, self.func_type)
    }
}

/// Unsigned transaction fields handed over to a wallet for signing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TxRequest {
    pub from: String,
    pub to: String,
    pub data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<String>,
}

impl TxRequest {
    pub fn with_gas(mut self, gas: Option<U256>, gas_price: Option<U256>) -> Self {
        self.gas = gas.map(|g| format!("{g:#x}"));
        self.gas_price = gas_price.map(|p| format!("{p:#x}"));
        self
    }
}

pub fn tx_request(from: &H160, call: &PposCall) -> Result<TxRequest> {
    let to = call.to()?;

    Ok(TxRequest {
        from: format!("{from:#x}"),
        to: format!("{to:#x}"),
        data: call.data(),
        gas: None,
        gas_price: None,
    })
}

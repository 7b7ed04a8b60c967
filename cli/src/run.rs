use crate::params::CliParams;
use anyhow::Context;
use ppos::{PposCall, H160};
use ppos_client::Ppos;
use tracing::info;

pub struct Runner {
    ppos: Ppos,
    call: PposCall,
    from: Option<H160>,
}

impl Runner {
    /// Convert the [CliParams] to the [Runner]
    pub fn new(params: CliParams) -> anyhow::Result<Runner> {
        let call = PposCall::by_name(params.func_type, &params.args)
            .context("Failed to build the call parameters")?;
        let ppos = Ppos::new(params.settings).context("Failed to create the rpc client")?;

        Ok(Runner {
            ppos,
            call,
            from: params.from,
        })
    }

    /// Print the encoded call, then query the chain when a provider is set
    pub fn run(&self) -> anyhow::Result<()> {
        let to = self
            .call
            .bech32_to(&self.ppos.settings().hrp)
            .context("Unable to route the function code")?;

        println!("to: {}", to);
        println!("data: {}", self.call.data());

        if let Some(from) = self.from {
            let request = self.ppos.tx_request(&from, &self.call)?;
            println!(
                "transaction request: {}",
                serde_json::to_string_pretty(&request)?
            );
        }

        if self.ppos.settings().provider.is_none() {
            return Ok(());
        }

        info!("platon_call of function {} to {}", self.call.func_type(), to);
        let result = self.ppos.call(&self.call).context("platon_call failed")?;
        println!("result: {}", serde_json::to_string_pretty(&result)?);

        Ok(())
    }
}

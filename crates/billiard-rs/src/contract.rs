use crate::{
    CallResponse, Env, Signer, crypto,
    error::ClientError,
    operation::Operations,
    transaction::{TransactionBuilder, sign_envelope},
};
use stellar_xdr::curr::ScVal;
use tracing::{debug, info};

const CONTRACT_ID_BYTES: usize = 32;
const CONTRACT_STRKEY_LEN: usize = 56;

/// A deployed contract bound to the signer that pays for and authorizes
/// calls to it.
///
/// The identifier is kept exactly as it was handed to [`ContractHandle::connect`];
/// only the decoded 32-byte form is used on the wire.
#[derive(Clone)]
pub struct ContractHandle {
    contract_id: String,
    contract: stellar_strkey::Contract,
    signer: Signer,
    env: Env,
}

impl ContractHandle {
    pub fn connect(contract_id: &str, signer: Signer, env: &Env) -> Result<Self, ClientError> {
        let contract = parse_contract_id(contract_id)?;
        debug!(contract = contract_id, signer = %signer, "connected contract handle");

        Ok(Self {
            contract_id: contract_id.to_string(),
            contract,
            signer,
            env: env.clone(),
        })
    }

    /// The identifier this handle was connected with, unmodified.
    pub fn contract_id(&self) -> &str {
        &self.contract_id
    }

    pub fn contract(&self) -> &stellar_strkey::Contract {
        &self.contract
    }

    pub fn signer(&self) -> &Signer {
        &self.signer
    }

    pub fn env(&self) -> &Env {
        &self.env
    }

    /// Calls `function_name` on the contract and waits for the transaction
    /// to complete.
    ///
    /// The transaction is simulated first and then submitted exactly once;
    /// there is no retry.
    pub async fn invoke(
        &self,
        function_name: &str,
        args: Vec<ScVal>,
    ) -> Result<CallResponse, ClientError> {
        let invoke_operation = Operations::invoke_contract(&self.contract, function_name, args)?;

        let invoke_tx = TransactionBuilder::new(&self.signer, &self.env)
            .add_operation(invoke_operation)
            .simulate_and_build(&self.env)
            .await?;

        let transaction_id =
            hex::encode(crypto::transaction_hash(&invoke_tx, &self.env.network_id())?.0);
        let tx_envelope = sign_envelope(&invoke_tx, &self.env, &self.signer)?;

        info!(
            contract = %self.contract_id,
            function = function_name,
            transaction_id = %transaction_id,
            "submitting contract call"
        );
        let response = self.env.send_transaction(&tx_envelope).await?;

        CallResponse::from_response(transaction_id, response)
    }
}

/// Decodes a contract identifier given either as 32 bytes of hex (with or
/// without a `0x` prefix) or as a 56 character `C...` strkey.
pub fn parse_contract_id(contract_id: &str) -> Result<stellar_strkey::Contract, ClientError> {
    if contract_id.len() == CONTRACT_STRKEY_LEN && contract_id.starts_with('C') {
        return stellar_strkey::Contract::from_string(contract_id).map_err(|e| {
            ClientError::InvalidArgument(format!("Invalid contract id {}: {}", contract_id, e))
        });
    }

    let digits = contract_id
        .strip_prefix("0x")
        .or_else(|| contract_id.strip_prefix("0X"))
        .unwrap_or(contract_id);

    let bytes = hex::decode(digits).map_err(|e| {
        ClientError::InvalidArgument(format!("Invalid contract id {}: {}", contract_id, e))
    })?;

    let bytes: [u8; CONTRACT_ID_BYTES] = bytes.try_into().map_err(|bytes: Vec<u8>| {
        ClientError::InvalidArgument(format!(
            "Invalid contract id {}: expected {} bytes, got {}",
            contract_id,
            CONTRACT_ID_BYTES,
            bytes.len()
        ))
    })?;

    Ok(stellar_strkey::Contract(bytes))
}

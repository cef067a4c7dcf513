//! The `init` call shared by every script variant

use billiard_rs::{CallResponse, Env, Signer, parse_units_u128};
use tracing::info;

use crate::bindings::{BilliardFixedPointPairClient, BilliardIntegerPairClient, BilliardTextClient};
use crate::errors::ScriptError;

/// Deployed Billiard contract
pub const BILLIARD_CONTRACT_ID: &str =
    "0xb021b238d430b7584c8b86b82372984d2b08221eac1d08e37b22227dd2132218";

/// Scale the fixed-point arguments are read at
const FIXED_POINT_DECIMALS: u32 = 0;

/// Arguments of one `init` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitArgs {
    Text(String),
    IntegerPair(u64, u64),
    /// Decimal strings, parsed at scale 0 before the call
    FixedPointPair(String, String),
}

/// Connects `signer` to the contract and calls `init` once with `args`.
///
/// The contract identifier is handed to the client unmodified. Nothing is
/// retried: any failure is returned as is.
pub async fn run_init(
    env: &Env,
    contract_id: &str,
    signer: Signer,
    args: InitArgs,
) -> Result<CallResponse, ScriptError> {
    info!(contract = contract_id, signer = %signer, ?args, "calling init");

    let call = match args {
        InitArgs::Text(label) => {
            BilliardTextClient::connect(contract_id, signer, env)?
                .init(label)
                .await?
        }
        InitArgs::IntegerPair(x, y) => {
            BilliardIntegerPairClient::connect(contract_id, signer, env)?
                .init(x, y)
                .await?
        }
        InitArgs::FixedPointPair(x, y) => {
            let (x, y) = (parse_fixed_point(&x)?, parse_fixed_point(&y)?);
            BilliardFixedPointPairClient::connect(contract_id, signer, env)?
                .init(x, y)
                .await?
        }
    };

    info!(transaction_id = %call.transaction_id, "init completed");
    Ok(call)
}

fn parse_fixed_point(value: &str) -> Result<u64, ScriptError> {
    let units = parse_units_u128(value, FIXED_POINT_DECIMALS)?;
    u64::try_from(units).map_err(|_| ScriptError::ArgumentOutOfRange(value.to_string()))
}

/// Renders the value returned by the call as a single line of JSON.
pub fn render_value(call: &CallResponse) -> Result<String, ScriptError> {
    Ok(serde_json::to_string(&call.value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use billiard_rs::{
        ClientError, IntoScVal, parse_units,
        mock::{
            MockRpcClient, mock_env_with_client, mock_simulate_tx_response,
            mock_transaction_response_with_return_value,
        },
        xdr::{HostFunction, OperationBody, ScVal, TransactionEnvelope},
    };
    use std::sync::Arc;

    fn recording_env(return_value: ScVal) -> (Arc<MockRpcClient>, Env) {
        let client = Arc::new(MockRpcClient::new(
            None,
            Some(Ok(mock_simulate_tx_response(None))),
            Some(Ok(mock_transaction_response_with_return_value(return_value))),
        ));
        let env = mock_env_with_client(client.clone());
        (client, env)
    }

    fn sent_call(client: &MockRpcClient) -> (String, Vec<ScVal>) {
        let sent = client.sent_envelopes();
        assert_eq!(sent.len(), 1, "expected exactly one submission");

        let TransactionEnvelope::Tx(envelope) = &sent[0] else {
            panic!("expected a V1 envelope");
        };
        let OperationBody::InvokeHostFunction(op) = &envelope.tx.operations[0].body else {
            panic!("expected InvokeHostFunction");
        };
        let HostFunction::InvokeContract(args) = &op.host_function else {
            panic!("expected InvokeContract");
        };
        (
            String::from_utf8(args.function_name.0.to_vec()).unwrap(),
            args.args.to_vec(),
        )
    }

    #[tokio::test]
    async fn test_text_variant_sends_one_call() {
        let (client, env) = recording_env(ScVal::Void);

        let call = run_init(
            &env,
            BILLIARD_CONTRACT_ID,
            Signer::generate(),
            InitArgs::Text("bar".to_string()),
        )
        .await
        .unwrap();

        let (function, args) = sent_call(&client);
        assert_eq!(function, "init");
        assert_eq!(args, vec!["bar".to_string().into_val()]);
        assert_eq!(call.value, ScVal::Void);
        let rendered = render_value(&call).unwrap();
        assert_eq!(serde_json::from_str::<ScVal>(&rendered).unwrap(), ScVal::Void);
    }

    #[tokio::test]
    async fn test_integer_pair_variant() {
        let (client, env) = recording_env(ScVal::U64(3));

        let call = run_init(
            &env,
            BILLIARD_CONTRACT_ID,
            Signer::generate(),
            InitArgs::IntegerPair(1, 2),
        )
        .await
        .unwrap();

        let (function, args) = sent_call(&client);
        assert_eq!(function, "init");
        assert_eq!(args, vec![ScVal::U64(1), ScVal::U64(2)]);
        assert_eq!(call.value, ScVal::U64(3));
        let rendered = render_value(&call).unwrap();
        assert!(!rendered.contains('\n'));
        assert_eq!(serde_json::from_str::<ScVal>(&rendered).unwrap(), ScVal::U64(3));
    }

    #[tokio::test]
    async fn test_fixed_point_pair_variant() {
        let (client, env) = recording_env(ScVal::Bool(true));

        run_init(
            &env,
            BILLIARD_CONTRACT_ID,
            Signer::generate(),
            InitArgs::FixedPointPair("100".to_string(), "100".to_string()),
        )
        .await
        .unwrap();

        let (_, args) = sent_call(&client);
        assert_eq!(args, vec![ScVal::U64(100), ScVal::U64(100)]);
    }

    #[test]
    fn test_fixed_point_matches_integer_literal() {
        assert_eq!(parse_units("100", 0).unwrap(), "100");
        assert_eq!(parse_units("100", 0).unwrap(), parse_units(&100.to_string(), 0).unwrap());
        assert_eq!(parse_fixed_point("100").unwrap(), 100);
    }

    #[test]
    fn test_fixed_point_rejects_out_of_range() {
        let too_big = (u64::MAX as u128 + 1).to_string();
        assert!(matches!(
            parse_fixed_point(&too_big),
            Err(ScriptError::ArgumentOutOfRange(v)) if v == too_big
        ));
        assert!(matches!(
            parse_fixed_point("1.5"),
            Err(ScriptError::Client(ClientError::ConversionError(_)))
        ));
    }

    #[tokio::test]
    async fn test_reverted_transaction_is_an_error() {
        let client = Arc::new(MockRpcClient::new(
            None,
            None,
            Some(Err(ClientError::TransactionFailed("TxFailed".to_string()))),
        ));
        let env = mock_env_with_client(client.clone());

        let res = run_init(
            &env,
            BILLIARD_CONTRACT_ID,
            Signer::generate(),
            InitArgs::IntegerPair(1, 2),
        )
        .await;

        assert!(matches!(
            res,
            Err(ScriptError::Client(ClientError::TransactionFailed(_)))
        ));
        assert_eq!(client.sent_envelopes().len(), 1);
    }

    #[tokio::test]
    async fn test_network_error_is_an_error() {
        let client = Arc::new(MockRpcClient::new(
            None,
            None,
            Some(Err(ClientError::NetworkRequestFailed("timeout".to_string()))),
        ));
        let env = mock_env_with_client(client.clone());

        let res = run_init(
            &env,
            BILLIARD_CONTRACT_ID,
            Signer::generate(),
            InitArgs::Text("bar".to_string()),
        )
        .await;

        assert!(res.is_err());
        assert_eq!(client.sent_envelopes().len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_contract_id_sends_nothing() {
        let (client, env) = recording_env(ScVal::Void);

        let res = run_init(
            &env,
            "0xnot-a-contract",
            Signer::generate(),
            InitArgs::IntegerPair(1, 2),
        )
        .await;

        assert!(matches!(
            res,
            Err(ScriptError::Client(ClientError::InvalidArgument(_)))
        ));
        assert!(client.sent_envelopes().is_empty());
    }

    #[test]
    fn test_contract_id_reaches_client_unmodified() {
        let env = billiard_rs::mock::mock_env(None, None, None);
        let client =
            BilliardTextClient::connect(BILLIARD_CONTRACT_ID, Signer::generate(), &env).unwrap();

        assert_eq!(client.contract_id(), BILLIARD_CONTRACT_ID);
        assert_eq!(client.handle().contract_id(), BILLIARD_CONTRACT_ID);
    }

    #[test]
    fn test_generated_signers_differ() {
        let a = Signer::generate();
        let b = Signer::generate();
        assert_ne!(a.account_id(), b.account_id());
    }
}

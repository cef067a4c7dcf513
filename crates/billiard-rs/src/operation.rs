use stellar_xdr::curr::{
    Hash, HostFunction, InvokeContractArgs, InvokeHostFunctionOp, Operation, OperationBody,
    ScAddress, ScSymbol, ScVal, SorobanAuthorizationEntry, VecM,
};

use crate::error::ClientError;

pub struct Operations;

impl Operations {
    pub fn invoke_contract(
        contract_id: &stellar_strkey::Contract,
        function_name: &str,
        args: Vec<ScVal>,
    ) -> Result<Operation, ClientError> {
        let invoke_contract_args = InvokeContractArgs {
            contract_address: ScAddress::Contract(Hash(contract_id.0)),
            function_name: ScSymbol(function_name.try_into().map_err(|e| {
                ClientError::InvalidArgument(format!("Invalid function name: {}", e))
            })?),
            args: args.try_into().map_err(|e| {
                ClientError::XdrEncodingFailed(format!("Failed to encode arguments: {}", e))
            })?,
        };

        Ok(Operation {
            source_account: None,
            body: OperationBody::InvokeHostFunction(InvokeHostFunctionOp {
                host_function: HostFunction::InvokeContract(invoke_contract_args),
                auth: VecM::default(),
            }),
        })
    }

    /// Replaces the authorization entries of an `InvokeHostFunction` operation.
    ///
    /// Other operation kinds carry no Soroban auth and are returned untouched.
    pub fn with_auth(
        mut operation: Operation,
        auth: Vec<SorobanAuthorizationEntry>,
    ) -> Result<Operation, ClientError> {
        if let OperationBody::InvokeHostFunction(op) = &mut operation.body {
            op.auth = auth.try_into().map_err(|e| {
                ClientError::XdrEncodingFailed(format!("Failed to encode auth entries: {}", e))
            })?;
        }
        Ok(operation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stellar_xdr::curr::{
        SorobanAuthorizedFunction, SorobanAuthorizedInvocation, SorobanCredentials,
    };

    fn contract_id() -> stellar_strkey::Contract {
        stellar_strkey::Contract([7; 32])
    }

    #[test]
    fn test_invoke_contract_encodes_call() {
        let op = Operations::invoke_contract(&contract_id(), "init", vec![ScVal::U64(1)]).unwrap();

        let OperationBody::InvokeHostFunction(body) = op.body else {
            panic!("expected InvokeHostFunction");
        };
        let HostFunction::InvokeContract(args) = body.host_function else {
            panic!("expected InvokeContract");
        };
        assert_eq!(args.contract_address, ScAddress::Contract(Hash([7; 32])));
        assert_eq!(args.function_name.0.as_slice(), b"init");
        assert_eq!(args.args.to_vec(), vec![ScVal::U64(1)]);
        assert!(body.auth.is_empty());
    }

    #[test]
    fn test_invoke_contract_rejects_long_function_name() {
        let name = "x".repeat(33);
        let res = Operations::invoke_contract(&contract_id(), &name, vec![]);
        assert!(matches!(res, Err(ClientError::InvalidArgument(_))));
    }

    #[test]
    fn test_with_auth_sets_entries() {
        let op = Operations::invoke_contract(&contract_id(), "init", vec![]).unwrap();
        let OperationBody::InvokeHostFunction(body) = &op.body else {
            panic!("expected InvokeHostFunction");
        };
        let HostFunction::InvokeContract(args) = body.host_function.clone() else {
            panic!("expected InvokeContract");
        };

        let entry = SorobanAuthorizationEntry {
            credentials: SorobanCredentials::SourceAccount,
            root_invocation: SorobanAuthorizedInvocation {
                function: SorobanAuthorizedFunction::ContractFn(args),
                sub_invocations: VecM::default(),
            },
        };

        let op = Operations::with_auth(op, vec![entry.clone()]).unwrap();
        let OperationBody::InvokeHostFunction(body) = op.body else {
            panic!("expected InvokeHostFunction");
        };
        assert_eq!(body.auth.to_vec(), vec![entry]);
    }
}

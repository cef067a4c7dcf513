//! Client bindings for the deployed Billiard contract.
//!
//! The scripts were written against different revisions of the contract,
//! whose `init` entry points disagree on their arguments. Each revision gets
//! its own client.
use billiard_contract_client::contract_client;

// Generates BilliardTextClient
contract_client!(
    r#"
    pub struct BilliardText;

    impl BilliardText {
        pub fn init(env: Env, label: String) {
            env.storage().instance().set(&LABEL, &label);
        }
    }
"#
);

// Generates BilliardIntegerPairClient
contract_client!(
    r#"
    pub struct BilliardIntegerPair;

    impl BilliardIntegerPair {
        pub fn init(env: Env, x: u64, y: u64) {
            env.storage().instance().set(&POSITION, &(x, y));
        }
    }
"#
);

// Generates BilliardFixedPointPairClient
contract_client!(
    r#"
    pub struct BilliardFixedPointPair;

    impl BilliardFixedPointPair {
        pub fn init(env: Env, x: u64, y: u64) {
            env.storage().instance().set(&POSITION, &(x, y));
        }
    }
"#
);

//! Proptest generators for property-based testing.

use proptest::prelude::*;

use intkey_forge_core::{
    Batch, BatchBuilder, IntkeyPayload, Keypair, Transaction, TransactionBuilder,
    TransactionId, Verb,
};

/// Generate a random keypair.
pub fn keypair() -> impl Strategy<Value = Keypair> {
    any::<[u8; 32]>().prop_map(|seed| Keypair::from_seed(&seed))
}

/// Generate a random TransactionId.
pub fn transaction_id() -> impl Strategy<Value = TransactionId> {
    any::<[u8; 64]>().prop_map(TransactionId::from_bytes)
}

/// Generate a verb.
pub fn verb() -> impl Strategy<Value = Verb> {
    prop_oneof![Just(Verb::Set), Just(Verb::Inc), Just(Verb::Dec)]
}

/// Generate a key name.
pub fn word() -> impl Strategy<Value = String> {
    "[a-zA-Z]{1,20}".prop_map(String::from)
}

/// Generate a payload value from the generator's range.
pub fn pool_value() -> impl Strategy<Value = u32> {
    9000u32..100_000u32
}

/// Parameters for generating a signed transaction.
#[derive(Debug, Clone)]
pub struct TransactionParams {
    pub seed: [u8; 32],
    pub verb: Verb,
    pub name: String,
    pub value: u32,
}

impl Arbitrary for TransactionParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (any::<[u8; 32]>(), verb(), word(), any::<u32>())
            .prop_map(|(seed, verb, name, value)| TransactionParams {
                seed,
                verb,
                name,
                value,
            })
            .boxed()
    }
}

/// Generate a payload from parameters.
pub fn payload_from_params(params: &TransactionParams) -> IntkeyPayload {
    IntkeyPayload::new(params.verb, params.name.clone(), params.value)
}

/// Generate a signed transaction from parameters.
pub fn transaction_from_params(params: &TransactionParams) -> Transaction {
    let keypair = Keypair::from_seed(&params.seed);
    TransactionBuilder::new(payload_from_params(params)).sign(&keypair)
}

/// Generate a signed batch from a shared seed and per-transaction params.
pub fn batch_from_params(seed: [u8; 32], params: &[TransactionParams]) -> Batch {
    let keypair = Keypair::from_seed(&seed);
    let transactions = params
        .iter()
        .map(|p| TransactionBuilder::new(payload_from_params(p)).sign(&keypair))
        .collect();
    BatchBuilder::new(transactions).sign(&keypair)
}

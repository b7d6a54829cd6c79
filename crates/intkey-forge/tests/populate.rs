//! End-to-end populate tests: generate an artifact, read it back,
//! verify every signature and count.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use std::io::Write;
use tempfile::tempdir;

use intkey_forge::core::validation::validate_batch;
use intkey_forge::words::{FallbackWords, SyntheticWords};
use intkey_forge::{
    populate, populate_with, read_batch_list, IntkeyPayload, Keypair, PopulateConfig, Verb,
    VALUE_MAX, VALUE_MIN,
};

#[test]
fn test_populate_roundtrip() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.intkey");
    let config = PopulateConfig::new(3, &output);

    let keypair = Keypair::from_seed(&[0x42; 32]);
    let mut words = SyntheticWords::with_rng(StdRng::seed_from_u64(7));
    let summary = populate_with(&config, &keypair, &mut words).unwrap();

    assert_eq!(summary.transaction_count, 3);
    assert_eq!(summary.batch_count, 1);
    assert!(summary.bytes_written > 0);

    let list = read_batch_list(&output).unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list.transaction_count(), 3);

    let batch = &list.batches[0];
    validate_batch(batch).unwrap();
    assert_eq!(batch.header.signer_public_key, keypair.public_key());

    let mut names = HashSet::new();
    for txn in &batch.transactions {
        assert_eq!(txn.header.signer_public_key, keypair.public_key());
        assert_eq!(txn.header.batcher_public_key, keypair.public_key());

        let payload = IntkeyPayload::from_bytes(&txn.payload).unwrap();
        assert_eq!(payload.verb(), Verb::Set);
        assert!((VALUE_MIN..VALUE_MAX).contains(&payload.value()));
        assert_eq!(payload.name().len(), 6);
        names.insert(payload.name().to_string());
    }
    // Distinct with overwhelming probability, and this run is seeded.
    assert_eq!(names.len(), 3);
}

#[test]
fn test_populate_zero_pool() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("empty.intkey");
    let config = PopulateConfig::new(0, &output);

    let keypair = Keypair::from_seed(&[0x01; 32]);
    let mut words = SyntheticWords::with_rng(StdRng::seed_from_u64(1));
    let summary = populate_with(&config, &keypair, &mut words).unwrap();

    assert_eq!(summary.transaction_count, 0);
    assert_eq!(summary.batch_count, 1);

    let list = read_batch_list(&output).unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list.transaction_count(), 0);

    // The empty batch is still validly signed.
    validate_batch(&list.batches[0]).unwrap();
}

#[test]
fn test_populate_overwrites_existing_file() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.intkey");
    std::fs::write(&output, b"stale artifact from an earlier run").unwrap();

    let config = PopulateConfig::new(2, &output);
    let keypair = Keypair::from_seed(&[0x02; 32]);
    let mut words = SyntheticWords::with_rng(StdRng::seed_from_u64(2));
    populate_with(&config, &keypair, &mut words).unwrap();

    let list = read_batch_list(&output).unwrap();
    assert_eq!(list.transaction_count(), 2);
}

#[test]
fn test_populate_with_dictionary_words() {
    let dir = tempdir().unwrap();
    let mut dict = tempfile::NamedTempFile::new().unwrap();
    writeln!(dict, "alpha\nbeta\ngamma\ndelta").unwrap();

    let output = dir.path().join("out.intkey");
    let config = PopulateConfig::new(3, &output);
    let keypair = Keypair::from_seed(&[0x03; 32]);
    let mut words = FallbackWords::at(dict.path());
    populate_with(&config, &keypair, &mut words).unwrap();

    let list = read_batch_list(&output).unwrap();
    let names: Vec<String> = list.batches[0]
        .transactions
        .iter()
        .map(|t| {
            IntkeyPayload::from_bytes(&t.payload)
                .unwrap()
                .name()
                .to_string()
        })
        .collect();
    assert_eq!(names, vec!["alpha", "beta", "gamma"]);
}

#[test]
fn test_populate_missing_dictionary_falls_back() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.intkey");
    let config = PopulateConfig::new(4, &output);

    let keypair = Keypair::from_seed(&[0x04; 32]);
    let mut words = FallbackWords::at("/nonexistent/word/list");
    let summary = populate_with(&config, &keypair, &mut words).unwrap();

    assert_eq!(summary.transaction_count, 4);
    let list = read_batch_list(&output).unwrap();
    validate_batch(&list.batches[0]).unwrap();
}

#[test]
fn test_populate_generates_internal_keypair() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.intkey");
    let config = PopulateConfig::new(2, &output);

    let summary = populate(&config).unwrap();
    assert_eq!(summary.batch_count, 1);
    assert!(summary.transaction_count <= 2);

    let list = read_batch_list(&output).unwrap();
    validate_batch(&list.batches[0]).unwrap();

    // Self-batching: every signer in the file is the same key.
    let batch = &list.batches[0];
    for txn in &batch.transactions {
        assert_eq!(txn.header.signer_public_key, batch.header.signer_public_key);
    }
}

#[test]
fn test_injected_signer_is_reproducible() {
    let dir = tempdir().unwrap();
    let keypair = Keypair::from_seed(&[0x05; 32]);

    let out1 = dir.path().join("a.intkey");
    let out2 = dir.path().join("b.intkey");

    let mut w1 = SyntheticWords::with_rng(StdRng::seed_from_u64(9));
    let mut w2 = SyntheticWords::with_rng(StdRng::seed_from_u64(9));
    populate_with(&PopulateConfig::new(3, &out1), &keypair, &mut w1).unwrap();
    populate_with(&PopulateConfig::new(3, &out2), &keypair, &mut w2).unwrap();

    let l1 = read_batch_list(&out1).unwrap();
    let l2 = read_batch_list(&out2).unwrap();

    // Values are random, but the signer and the signed names line up.
    assert_eq!(
        l1.batches[0].header.signer_public_key,
        l2.batches[0].header.signer_public_key
    );
    let names = |list: &intkey_forge::BatchList| -> Vec<String> {
        list.batches[0]
            .transactions
            .iter()
            .map(|t| {
                IntkeyPayload::from_bytes(&t.payload)
                    .unwrap()
                    .name()
                    .to_string()
            })
            .collect()
    };
    assert_eq!(names(&l1), names(&l2));
}

// Known Neo N3 key, script hash and address vectors.

use hex_literal::hex;
use neo_sdk_config::DEFAULT_ADDRESS_VERSION;
use neo_sdk_crypto::signature::{sign_message, signed_message_to_key};
use neo_sdk_crypto::{
    address_to_script_hash, script_hash_to_address, AddressExt, Base58, Crypto, KeyPair,
    PrivateKey, PublicKey, ToScriptHash,
};
use neo_sdk_primitives::Hash160;
use neo_sdk_vm::ScriptBuilder;
use proptest::prelude::*;

struct Vector {
    private_key: [u8; 32],
    public_key: [u8; 33],
    address: &'static str,
}

const VECTORS: [Vector; 4] = [
    Vector {
        private_key: hex!("e6e919577dd7b8e97805151c05ae07ff4f752654d6d8797597aca989c02c4cb3"),
        public_key: hex!("02c0b60c995bc092e866f15a37c176bb59b7ebacf069ba94c0ebf561cb8f956238"),
        address: "NSo4wEjhHuFyEy4K2pzD11KyBYuuFQxM9j",
    },
    Vector {
        private_key: hex!("7d128a6d096f0c14c3a25a2b0c41cf79661bfcb4a8cc95aaaea28bde4d732344"),
        public_key: hex!("02028a99826edc0c97d18e22b6932373d908d323aa7f92656a77ec26e8861699ef"),
        address: "NPTmAHDxo6Pkyic8Nvu3kwyXoYJCvcCB6i",
    },
    Vector {
        private_key: hex!("9117f4bf9be717c9a90994326897f4243503accd06712162267e77f18b49c3a3"),
        public_key: hex!("0265bf906bf385fbf3f777832e55a87991bcfbe19b097fb7c5ca2e4025a4d5e5d6"),
        address: "NY6AaPfnk1HQP6HkShHHyLQ9KBKn78DAqu",
    },
    Vector {
        private_key: hex!("84180ac9d6eb6fba207ea4ef9d2200102d1ebeb4b9c07e2c6a738a42742e27a5"),
        public_key: hex!("033a4d051b04b7fc0230d2b1aaedfd5a84be279a5361a7358db665ad7857787f1b"),
        address: "NM7Aky765FG8NhhwtxjXRx7jEL1cnw7PBP",
    },
];

#[test]
fn test_key_vectors() {
    for vector in &VECTORS {
        let pair = KeyPair::from_private_key(PrivateKey::from_slice(&vector.private_key).unwrap())
            .unwrap();
        assert_eq!(pair.public_key().encoded(), &vector.public_key);
        assert_eq!(pair.address(), vector.address);

        let script_hash = pair.script_hash();
        assert_eq!(Hash160::from_address(vector.address).unwrap(), script_hash);
        assert_eq!(
            address_to_script_hash(vector.address, DEFAULT_ADDRESS_VERSION).unwrap(),
            script_hash.to_le_array()
        );
    }
}

#[test]
fn test_script_hash_matches_verification_script() {
    let key = PublicKey::from_slice(&VECTORS[0].public_key).unwrap();
    let script = ScriptBuilder::build_verification_script(key.encoded()).unwrap();
    assert_eq!(script, key.verification_script());
    assert_eq!(script.to_script_hash(), key.script_hash());
    assert_eq!(
        key.script_hash().to_string(),
        "0x04ab25b6d20857465dcb48fd735e1e81b2c47a4b"
    );
}

#[test]
fn test_raw_script_hash_vector() {
    let raw = hex!("7f4896875d05a596a413300712c964998ebec290");
    assert_eq!(
        script_hash_to_address(&raw, DEFAULT_ADDRESS_VERSION).unwrap(),
        "NXWyxczEhK4dEFGhztm9WiwtRrnPXLeHkK"
    );

    let mut reversed = raw;
    reversed.reverse();
    assert_eq!(
        script_hash_to_address(&reversed, DEFAULT_ADDRESS_VERSION).unwrap(),
        "NZ7PnTMG27qdkVE3s4TGdMuENoF926eJK2"
    );
}

#[test]
fn test_hash_lengths() {
    assert_eq!(Crypto::hash160(b"").len(), 20);
    assert_eq!(Crypto::hash256(b"").len(), 32);
    assert!(Hash160::from_slice(&[0u8; 19]).is_err());
}

#[test]
fn test_recover_signer_for_every_vector() {
    for vector in &VECTORS {
        let pair = KeyPair::from_private_key(PrivateKey::from_slice(&vector.private_key).unwrap())
            .unwrap();
        let signature = sign_message(vector.address.as_bytes(), &pair).unwrap();
        let recovered = signed_message_to_key(vector.address.as_bytes(), &signature).unwrap();
        assert_eq!(recovered.encoded(), &vector.public_key);
    }
}

proptest! {
    #[test]
    fn prop_base58_round_trip(data in prop::collection::vec(any::<u8>(), 0..64)) {
        let encoded = Base58::encode(&data);
        prop_assert_eq!(Base58::decode(&encoded).unwrap(), data.clone());

        let leading_zeros = data.iter().take_while(|b| **b == 0).count();
        prop_assert!(encoded.starts_with(&"1".repeat(leading_zeros)));
    }

    #[test]
    fn prop_base58_check_round_trip(data in prop::collection::vec(any::<u8>(), 0..64)) {
        let encoded = Base58::encode_check(&data);
        prop_assert_eq!(Base58::decode_check(&encoded).unwrap(), data);
    }

    #[test]
    fn prop_generated_keys_sign_and_verify(message in prop::collection::vec(any::<u8>(), 1..128)) {
        let pair = KeyPair::generate();
        let hash = Crypto::sha256(&message);
        let signature = pair.sign(&hash).unwrap();
        prop_assert!(pair.public_key().verify(&hash, &signature));
    }
}

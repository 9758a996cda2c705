use super::{Address, H256};
use keccak_hash::keccak;

/// Seed for the deterministic contract-address derivation: the one-way
/// hash of the deploying account's address bytes. Downstream the seed is
/// interpreted as a secp256k1 secret key whose public address becomes the
/// contract address, so the same deployer always yields the same
/// candidate on every node.
pub fn contract_address_seed(deployer: &Address) -> H256 {
    keccak(deployer.as_bytes())
}

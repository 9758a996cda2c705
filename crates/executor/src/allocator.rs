// Copyright 2024 Helios Foundation. All rights reserved.
// Helios is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

//! Contract address allocation for deployments without an explicit
//! target. The first candidate is derived deterministically from the
//! deploying account, so all validating nodes that re-execute the same
//! transaction from the same prior state arrive at the same address.
//! If an account already occupies the candidate, fresh random keypairs
//! are drawn until a free address is found. The fallback keeps the
//! allocator live but is NOT reproducible across nodes; in valid
//! protocol operation the collision branch must never be reached.

use crate::state::{DbResult, State};
use helios_keylib::{Generator, KeyPair, Random};
use helios_types::{contract_address_seed, Address};
use keccak_hash::keccak;
use std::fmt;

/// Upper bound on fallback draws. With random 160-bit addresses a
/// collision streak of this length does not happen in correct
/// operation; the bound exists to turn a broken state into a recorded
/// fault instead of a spin.
const MAX_ALLOCATION_ATTEMPTS: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationExhaustion;

impl fmt::Display for AllocationExhaustion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "contract address allocation exhausted")
    }
}

/// The deterministic candidate for a deployer: the hash of the deployer
/// address, read as a secp256k1 secret key, mapped to its public
/// address.
pub fn derive_contract_address(deployer: &Address) -> Address {
    let mut seed = contract_address_seed(deployer);
    loop {
        match KeyPair::from_secret(seed) {
            Ok(pair) => return pair.address(),
            // A seed outside the curve order is astronomically rare but
            // must stay deterministic: re-hash and retry.
            Err(_) => seed = keccak(seed.as_bytes()),
        }
    }
}

/// Allocates an address for a new contract: the deterministic candidate
/// if free, otherwise random draws until a free one is found.
pub fn allocate_contract_address(
    deployer: &Address, state: &State,
) -> DbResult<Result<Address, AllocationExhaustion>> {
    let mut candidate = derive_contract_address(deployer);
    let mut attempts = 0;
    while state.exists(&candidate)? {
        if attempts >= MAX_ALLOCATION_ATTEMPTS {
            return Ok(Err(AllocationExhaustion));
        }
        debug!(
            "contract address {:?} occupied; drawing a random fallback",
            candidate
        );
        candidate = Random.generate().address();
        attempts += 1;
    }
    Ok(Ok(candidate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StateDb;
    use helios_types::U256;
    use primitives::AccountKind;
    use std::sync::Arc;

    #[test]
    fn derivation_is_deterministic() {
        let deployer = Address::repeat_byte(0x5a);
        assert_eq!(
            derive_contract_address(&deployer),
            derive_contract_address(&deployer)
        );
    }

    #[test]
    fn free_candidate_is_the_derived_address() {
        let deployer = Address::repeat_byte(0x5a);
        let state = State::new(Arc::new(StateDb::new()));
        let allocated = allocate_contract_address(&deployer, &state)
            .unwrap()
            .unwrap();
        assert_eq!(allocated, derive_contract_address(&deployer));
    }

    #[test]
    fn occupied_candidate_falls_back_to_a_fresh_address() {
        let deployer = Address::repeat_byte(0x5a);
        let derived = derive_contract_address(&deployer);

        let mut state = State::new(Arc::new(StateDb::new()));
        state.create_account(derived, AccountKind::Basic).unwrap();
        state
            .add_balance(&deployer, &U256::from(1))
            .unwrap();

        let allocated = allocate_contract_address(&deployer, &state)
            .unwrap()
            .unwrap();
        assert_ne!(allocated, derived);
        assert!(!state.exists(&allocated).unwrap());
    }
}

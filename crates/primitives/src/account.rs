// Copyright 2024 Helios Foundation. All rights reserved.
// Helios is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

use helios_types::{Address, Bytes, H256, U256};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountKind {
    Basic,
    Contract,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub address: Address,
    pub balance: U256,
    pub nonce: U256,
    pub kind: AccountKind,
}

impl Account {
    pub fn new_basic(address: Address, balance: U256) -> Account {
        Account {
            address,
            balance,
            nonce: U256::zero(),
            kind: AccountKind::Basic,
        }
    }

    pub fn new_contract(address: Address) -> Account {
        Account {
            address,
            balance: U256::zero(),
            nonce: U256::zero(),
            kind: AccountKind::Contract,
        }
    }

    pub fn is_contract(&self) -> bool {
        self.kind == AccountKind::Contract
    }
}

/// Metadata registered alongside a deployed contract account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractMeta {
    pub deployer: Address,
    pub creation_tx: H256,
    pub abi: Bytes,
}

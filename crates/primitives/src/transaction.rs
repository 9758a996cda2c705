// Copyright 2024 Helios Foundation. All rights reserved.
// Helios is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

use helios_types::{Address, Bytes, H256, U256};
use keccak_hash::keccak;
use rlp::{Encodable, RlpStream};
use serde::{Deserialize, Serialize};

/// Value movement between accounts, handled on the native path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub owner_address: Address,
    pub to_address: Address,
    pub amount: U256,
}

/// Registration of a fresh basic account, handled on the native path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAccountRequest {
    pub owner_address: Address,
    pub account_address: Address,
}

/// Contract deployment. When `contract_address` is absent the executor
/// derives one from the owner address.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateContractRequest {
    pub owner_address: Address,
    pub bytecode: Bytes,
    pub abi: Bytes,
    pub contract_address: Option<Address>,
}

/// Invocation of a deployed contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallContractRequest {
    pub owner_address: Address,
    pub contract_address: Address,
    pub data: Bytes,
    pub call_value: U256,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Request {
    Transfer(TransferRequest),
    CreateAccount(CreateAccountRequest),
    CreateContract(CreateContractRequest),
    CallContract(CallContractRequest),
}

impl Request {
    pub fn owner_address(&self) -> Address {
        match self {
            Request::Transfer(r) => r.owner_address,
            Request::CreateAccount(r) => r.owner_address,
            Request::CreateContract(r) => r.owner_address,
            Request::CallContract(r) => r.owner_address,
        }
    }
}

impl Encodable for Request {
    fn rlp_append(&self, s: &mut RlpStream) {
        match self {
            Request::Transfer(r) => {
                s.begin_list(4);
                s.append(&0u8);
                s.append(&r.owner_address);
                s.append(&r.to_address);
                s.append(&r.amount);
            }
            Request::CreateAccount(r) => {
                s.begin_list(3);
                s.append(&1u8);
                s.append(&r.owner_address);
                s.append(&r.account_address);
            }
            Request::CreateContract(r) => {
                s.begin_list(5);
                s.append(&2u8);
                s.append(&r.owner_address);
                s.append(&r.bytecode);
                s.append(&r.abi);
                match r.contract_address {
                    Some(address) => s.append(&address),
                    None => s.append_empty_data(),
                };
            }
            Request::CallContract(r) => {
                s.begin_list(5);
                s.append(&3u8);
                s.append(&r.owner_address);
                s.append(&r.contract_address);
                s.append(&r.data);
                s.append(&r.call_value);
            }
        }
    }
}

/// An ordered, non-empty list of requests submitted as one unit. The
/// first request's variant determines how the whole transaction is
/// executed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub requests: Vec<Request>,
}

impl Transaction {
    pub fn new(requests: Vec<Request>) -> Transaction {
        Transaction { requests }
    }

    pub fn first_request(&self) -> Option<&Request> {
        self.requests.first()
    }

    pub fn hash(&self) -> H256 {
        keccak(rlp::encode(self))
    }
}

impl Encodable for Transaction {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.begin_list(1);
        s.append_list(&self.requests);
    }
}

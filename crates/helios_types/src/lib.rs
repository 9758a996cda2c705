// Copyright 2024 Helios Foundation. All rights reserved.
// Helios is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

pub use ethereum_types::{
    Address, BigEndianHash, H160, H256, H512, U256, U512,
};

/// Raw byte payloads (code, call data, ABI blobs).
pub type Bytes = Vec<u8>;

pub mod contract_address;
pub use contract_address::contract_address_seed;

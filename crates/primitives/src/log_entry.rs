// Copyright 2024 Helios Foundation. All rights reserved.
// Helios is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

use helios_types::{Address, Bytes, H256};
use serde::{Deserialize, Serialize};

/// A record emitted by executed code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// The address of the contract which produced the log.
    pub address: Address,
    /// Indexed topics.
    pub topics: Vec<H256>,
    /// Opaque payload.
    pub data: Bytes,
}

// Copyright 2024 Helios Foundation. All rights reserved.
// Helios is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

//! secp256k1 keypair helpers: secret-to-public derivation and the
//! public-key-to-address mapping used for account identities.

#[macro_use]
extern crate lazy_static;

use ethereum_types::{Address, H256, H512};
use keccak_hash::keccak;
use secp256k1::{All, PublicKey, Secp256k1, SecretKey};
use std::fmt;

pub type Public = H512;
pub type Secret = H256;

lazy_static! {
    static ref SECP256K1: Secp256k1<All> = Secp256k1::new();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The 32 bytes do not encode a valid curve scalar.
    InvalidSecret,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidSecret => write!(f, "invalid secret key"),
        }
    }
}

impl std::error::Error for Error {}

/// A secp256k1 keypair with its derived account address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    secret: Secret,
    public: Public,
}

impl KeyPair {
    pub fn from_secret(secret: Secret) -> Result<KeyPair, Error> {
        let secret_key = SecretKey::from_slice(secret.as_bytes())
            .map_err(|_| Error::InvalidSecret)?;
        let public_key = PublicKey::from_secret_key(&SECP256K1, &secret_key);
        let serialized = public_key.serialize_uncompressed();

        let mut public = Public::zero();
        public.as_bytes_mut().copy_from_slice(&serialized[1..65]);
        Ok(KeyPair { secret, public })
    }

    pub fn secret(&self) -> &Secret {
        &self.secret
    }

    pub fn public(&self) -> &Public {
        &self.public
    }

    pub fn address(&self) -> Address {
        public_to_address(&self.public)
    }
}

/// Account address of a public key: the low 20 bytes of its keccak hash.
pub fn public_to_address(public: &Public) -> Address {
    let hash = keccak(public.as_bytes());
    Address::from_slice(&hash.as_bytes()[12..])
}

pub trait Generator {
    fn generate(&mut self) -> KeyPair;
}

/// Draws fresh keypairs from the thread rng.
pub struct Random;

impl Generator for Random {
    fn generate(&mut self) -> KeyPair {
        loop {
            let secret_key = SecretKey::new(&mut rand::thread_rng());
            let secret = Secret::from_slice(&secret_key.secret_bytes());
            // from_secret cannot fail for a freshly drawn scalar, but the
            // loop keeps the invariant local.
            if let Ok(pair) = KeyPair::from_secret(secret) {
                return pair;
            }
        }
    }
}

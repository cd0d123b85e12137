// ProofPack: verifiable, privacy-preserving data exchange format and library.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use k256::ecdsa::VerifyingKey;
use sha3::{Digest, Keccak256};

use crate::error::CryptoError;

/// A 20-byte Ethereum address, compared case-insensitively and always
/// displayed lowercase with a `0x` prefix.
#[derive(Clone, Copy, Debug, Eq)]
pub struct EthAddress([u8; 20]);

impl EthAddress {
    /// Derives the address from an uncompressed secp256k1 public key, per
    /// Ethereum's `keccak256(pubkey)[12..]` convention.
    pub fn from_verifying_key(key: &VerifyingKey) -> Self {
        let point = key.to_encoded_point(false);
        let uncompressed = point.as_bytes();
        // Skip the 0x04 prefix byte; hash only the 64-byte X||Y payload.
        let hash = Keccak256::digest(&uncompressed[1..]);
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&hash[12..]);
        EthAddress(bytes)
    }

    /// Parses a `0x`-prefixed or bare 40-hex-digit address, case-insensitive.
    pub fn parse(s: &str) -> Result<Self, CryptoError> {
        let stripped = s.strip_prefix("0x").unwrap_or(s);
        let decoded = hex::decode(stripped).map_err(|_| CryptoError::InvalidAddress(s.to_string()))?;
        let bytes: [u8; 20] = decoded
            .try_into()
            .map_err(|_| CryptoError::InvalidAddress(s.to_string()))?;
        Ok(EthAddress(bytes))
    }

    /// Renders as `0x`-prefixed lowercase hex.
    pub fn to_hex(self) -> String { format!("0x{}", hex::encode(self.0)) }
}

impl PartialEq for EthAddress {
    fn eq(&self, other: &Self) -> bool { self.0 == other.0 }
}

impl std::fmt::Display for EthAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.to_hex()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        let lower = EthAddress::parse("0xa0b1c2d3e4f5061728394a5b6c7d8e9f0a1b2c3").unwrap();
        let upper = EthAddress::parse("0XA0B1C2D3E4F5061728394A5B6C7D8E9F0A1B2C3").unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(EthAddress::parse("0xabcd").is_err());
    }

    #[test]
    fn to_hex_round_trips() {
        let addr = EthAddress::parse("0x00112233445566778899aabbccddeeff00112233").unwrap();
        assert_eq!(addr.to_hex(), "0x00112233445566778899aabbccddeeff00112233");
    }
}

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

use sha2::{Digest, Sha256};

use crate::error::MerkleError;

/// Trait for client-side-validated data that can be turned into a concealed
/// (redacted) form that preserves its commitment while dropping the
/// disclosed payload.
///
/// A [`Leaf`] implements this by clearing `data`/`salt` while leaving `hash`
/// untouched, which is what lets [`crate::tree::MerkleTree::verify_root`]
/// keep succeeding after redaction.
pub trait Conceal {
    /// The resulting concealed type.
    type Concealed;

    /// Produces the concealed form of `self`.
    fn conceal(&self) -> Self::Concealed;
}

/// A single leaf of a Merkle exchange document.
///
/// A leaf is *disclosed* when both `data` and `salt` are present; it is
/// *redacted* when both are absent. `hash` is always present and is
/// unaffected by redaction.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leaf {
    /// Hex-encoded disclosed data, absent when the leaf is redacted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,

    /// Hex-encoded 16-byte salt, absent when the leaf is redacted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salt: Option<String>,

    /// Hex-encoded leaf digest. Survives redaction.
    pub hash: String,

    /// Advisory content type of the disclosed `data`.
    pub content_type: String,
}

impl Leaf {
    /// Builds a disclosed leaf from raw data, a freshly generated salt and a
    /// content type, computing its hash.
    pub fn disclosed(data: &[u8], salt: [u8; 16], content_type: impl Into<String>) -> Self {
        let content_type = content_type.into();
        let hash = Self::compute_hash(data, &salt, &content_type);
        Leaf {
            data: Some(hex::encode(data)),
            salt: Some(hex::encode(salt)),
            hash: hex::encode(hash),
            content_type,
        }
    }

    /// Whether this leaf currently carries its disclosed data and salt.
    pub fn is_disclosed(&self) -> bool { self.data.is_some() && self.salt.is_some() }

    /// Recomputes `hash` from the currently disclosed `data`/`salt`. Returns
    /// `None` for a redacted leaf, since there is nothing left to hash.
    pub fn recompute_hash(&self) -> Result<Option<[u8; 32]>, MerkleError> {
        let (Some(data_hex), Some(salt_hex)) = (&self.data, &self.salt) else {
            return Ok(None);
        };
        let data = hex::decode(data_hex)?;
        let salt = hex::decode(salt_hex)?;
        let salt: [u8; 16] = salt
            .try_into()
            .map_err(|_| MerkleError::InvalidJson("salt is not 16 bytes".into()))?;
        Ok(Some(Self::compute_hash(&data, &salt, &self.content_type)))
    }

    /// `hash = SHA256(data || salt || contentType)`, per the
    /// `merkle-exchange-3.0` leaf commitment rule.
    pub fn compute_hash(data: &[u8], salt: &[u8; 16], content_type: &str) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(data);
        hasher.update(salt);
        hasher.update(content_type.as_bytes());
        hasher.finalize().into()
    }

    /// Decodes the stored `hash` hex string.
    pub fn hash_bytes(&self) -> Result<[u8; 32], MerkleError> {
        let bytes = hex::decode(&self.hash)?;
        bytes
            .try_into()
            .map_err(|_| MerkleError::InvalidJson("hash is not 32 bytes".into()))
    }
}

impl Conceal for Leaf {
    type Concealed = Leaf;

    fn conceal(&self) -> Leaf {
        Leaf {
            data: None,
            salt: None,
            hash: self.hash.clone(),
            content_type: self.content_type.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redaction_preserves_hash() {
        let leaf = Leaf::disclosed(b"John Doe", [7u8; 16], "text/plain");
        let redacted = leaf.conceal();
        assert_eq!(redacted.hash, leaf.hash);
        assert!(!redacted.is_disclosed());
        assert!(leaf.is_disclosed());
    }

    #[test]
    fn recompute_hash_matches_disclosed_hash() {
        let leaf = Leaf::disclosed(b"1990-01-01", [3u8; 16], "text/plain");
        let recomputed = leaf.recompute_hash().unwrap().unwrap();
        assert_eq!(hex::encode(recomputed), leaf.hash);
    }

    #[test]
    fn redacted_leaf_has_no_recomputable_hash() {
        let leaf = Leaf::disclosed(b"GB", [1u8; 16], "text/plain").conceal();
        assert_eq!(leaf.recompute_hash().unwrap(), None);
    }
}

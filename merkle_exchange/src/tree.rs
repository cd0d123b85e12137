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

//! The `merkle-exchange-3.0` document: a header leaf, N data leaves, and a
//! root hash, with redaction-tolerant root recomputation.
//!
//! This module plays the role this workspace's ancestor libraries give to
//! their own Merkle primitive (see `commit_verify::merkle` /
//! `commit_verify::mpc::tree` in the wider client-side-validation family):
//! an append-only, order-sensitive hash set whose root is a pure function of
//! currently-known leaf state.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::MerkleError;
use crate::leaf::Leaf;

/// Version string for the document shape implemented by this crate.
pub const VERSION: &str = "merkle-exchange-3.0";

/// Content type of the header leaf's disclosed data.
pub const HEADER_CONTENT_TYPE: &str =
    "application/merkle-exchange-header-3.0+json; charset=utf-8; encoding=hex";

/// Decoded contents of the header leaf (`leaves[0].data`, hex-decoded then
/// JSON-decoded).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    /// Hash algorithm identifier, e.g. `"sha256"`.
    pub alg: String,
    /// Number of data leaves following the header leaf.
    pub leaves: usize,
    /// Document version, e.g. [`VERSION`].
    pub exchange: String,
}

/// A parsed Merkle exchange document: the header leaf, the data leaves, and
/// the committed root.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerkleTree {
    leaves: Vec<Leaf>,
    root: String,
}

impl MerkleTree {
    /// Starts a new, empty tree using the SHA-256 hash algorithm.
    pub fn new() -> Self {
        let header = Self::make_header_leaf(0);
        MerkleTree {
            leaves: vec![header],
            root: String::new(),
        }
    }

    /// Parses a Merkle exchange document from its canonical JSON.
    pub fn parse(json: &str) -> Result<Self, MerkleError> {
        let tree: MerkleTree = serde_json::from_str(json)?;
        if tree.leaves.is_empty() {
            return Err(MerkleError::NoLeaves);
        }
        let header = tree.decode_header()?;
        if header.exchange != VERSION {
            return Err(MerkleError::UnsupportedVersion(header.exchange));
        }
        Ok(tree)
    }

    /// Serializes this document to its canonical JSON form.
    pub fn to_json(&self) -> Result<String, MerkleError> { Ok(serde_json::to_string(self)?) }

    /// The committed root hash, hex-encoded.
    pub fn root(&self) -> &str { &self.root }

    /// All leaves, header leaf included, in document order.
    pub fn leaves(&self) -> &[Leaf] { &self.leaves }

    /// Leaves carrying disclosed application data (header leaf excluded).
    pub fn data_leaves(&self) -> &[Leaf] { &self.leaves[1.min(self.leaves.len())..] }

    /// Document version declared by the header leaf.
    pub fn version(&self) -> Result<String, MerkleError> { Ok(self.decode_header()?.exchange) }

    /// Hash algorithm declared by the header leaf.
    pub fn hash_algorithm(&self) -> Result<String, MerkleError> { Ok(self.decode_header()?.alg) }

    fn decode_header(&self) -> Result<Header, MerkleError> {
        let header_leaf = self
            .leaves
            .first()
            .ok_or(MerkleError::NoLeaves)?;
        let data_hex = header_leaf
            .data
            .as_deref()
            .ok_or(MerkleError::MissingData(0))?;
        let bytes = hex::decode(data_hex)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn make_header_leaf(leaf_count: usize) -> Leaf {
        let header = Header {
            alg: "sha256".to_string(),
            leaves: leaf_count,
            exchange: VERSION.to_string(),
        };
        let json = serde_json::to_vec(&header).expect("Header always serializes");
        let data_hex = hex::encode(&json);
        let hash = Sha256::digest(&json);
        Leaf {
            data: Some(data_hex),
            salt: None,
            hash: hex::encode(hash),
            content_type: HEADER_CONTENT_TYPE.to_string(),
        }
    }

    /// Adds one disclosed leaf per top-level member of `object`, serializing
    /// each value to JSON, salting it, and hashing it. Used only by
    /// builders; consumers never mutate a parsed tree.
    pub fn add_json_leaves(
        &mut self,
        object: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<(), MerkleError> {
        for (_key, value) in object {
            let bytes = serde_json::to_vec(value)?;
            let salt = random_salt();
            let leaf = Leaf::disclosed(&bytes, salt, "application/json");
            self.leaves.push(leaf);
        }
        self.sync_header_count();
        Ok(())
    }

    fn sync_header_count(&mut self) {
        let count = self.leaves.len().saturating_sub(1);
        self.leaves[0] = Self::make_header_leaf(count);
    }

    /// Recomputes and stores the root from current leaf hashes using the
    /// SHA-256 chained-combination rule of `merkle-exchange-3.0`: the root is
    /// the final accumulator of `acc = SHA256(acc || leaf.hash)` folded over
    /// leaves in document order, seeded with 32 zero bytes.
    pub fn recompute_sha256_root(&mut self) -> Result<(), MerkleError> {
        self.root = hex::encode(Self::combine(&self.leaves)?);
        Ok(())
    }

    /// Recomputes the root from whatever leaf state is currently present
    /// (disclosed or redacted) and compares it against the stored root. Pure:
    /// never mutates `self`, never requires `data` for a redacted leaf. For a
    /// disclosed leaf, `hash` is re-derived from `data`/`salt`/`contentType`
    /// rather than trusted verbatim, so tampering with disclosed data while
    /// leaving the stored `hash` untouched is caught.
    pub fn verify_root(&self) -> Result<bool, MerkleError> {
        let recomputed = Self::combine(&self.leaves)?;
        Ok(hex::encode(recomputed) == self.root)
    }

    fn combine(leaves: &[Leaf]) -> Result<[u8; 32], MerkleError> {
        let mut acc = [0u8; 32];
        for leaf in leaves {
            let hash = match leaf.recompute_hash()? {
                Some(hash) => hash,
                None => leaf.hash_bytes()?,
            };
            let mut hasher = Sha256::new();
            hasher.update(acc);
            hasher.update(hash);
            acc = hasher.finalize().into();
        }
        Ok(acc)
    }

    /// Redacts the leaves at `indices` (into [`MerkleTree::leaves`], header
    /// leaf included at index 0 and never eligible) by dropping their
    /// `data`/`salt`. The root is unaffected, since it is computed purely
    /// from `hash`.
    pub fn redact(&mut self, indices: &[usize]) {
        for &index in indices {
            if index == 0 || index >= self.leaves.len() {
                continue;
            }
            self.leaves[index].data = None;
            self.leaves[index].salt = None;
        }
    }
}

impl Default for MerkleTree {
    fn default() -> Self { Self::new() }
}

fn random_salt() -> [u8; 16] {
    use rand::RngCore;
    let mut salt = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut salt);
    salt
}

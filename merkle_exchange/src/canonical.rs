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

//! Canonical JSON: the single serialization form this workspace signs and
//! hashes over.
//!
//! Compact (no inserted whitespace), camelCase property names, and
//! null-valued properties omitted. Every wire type in this workspace derives
//! `Serialize`/`Deserialize` with `#[serde(rename_all = "camelCase")]` and
//! `#[serde(skip_serializing_if = "Option::is_none")]` on optional fields so
//! that `serde_json::to_string` already produces this form; this module
//! exists so call sites never reach for a different serializer
//! configuration by accident.

use serde::Serialize;

use crate::error::MerkleError;

/// Serializes `value` using this workspace's canonical JSON rules.
///
/// Callers that embed a [`crate::tree::MerkleTree`] inside a larger payload
/// must route it through [`crate::tree::MerkleTree::to_json`] first and
/// embed the result as a pre-serialized value (e.g. via
/// `serde_json::value::RawValue` or by re-parsing it into a
/// `serde_json::Value`), never by letting `#[derive(Serialize)]` walk into
/// the tree's private fields — that would bypass the tree's own canonical
/// form.
pub fn to_canonical_json<T: Serialize>(value: &T) -> Result<String, MerkleError> {
    Ok(serde_json::to_string(value)?)
}

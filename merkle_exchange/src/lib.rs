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

// Coding conventions
#![deny(
    unsafe_code,
    dead_code,
    missing_docs,
    unused_variables,
    unused_mut,
    unused_imports,
    non_upper_case_globals,
    non_camel_case_types,
    non_snake_case
)]

//! The salted Merkle-like hash set at the core of a ProofPack exchange
//! document: an unpadded base64url codec, the `merkle-exchange-3.0` leaf set
//! with a header leaf and redaction support, and the canonical JSON rules
//! every other ProofPack crate signs and hashes over.

pub mod base64url;
mod canonical;
mod error;
mod leaf;
mod tree;

pub use canonical::to_canonical_json;
pub use error::MerkleError;
pub use leaf::{Conceal, Leaf};
pub use tree::{Header, MerkleTree, HEADER_CONTENT_TYPE, VERSION};

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

use amplify::{Display, Error, From};

/// Errors produced while building, serializing or parsing exchange
/// documents.
#[derive(Debug, Display, Error, From)]
#[display(doc_comments)]
pub enum ExchangeError {
    /// underlying merkle exchange document error: {0}
    #[from]
    Merkle(merkle_exchange::MerkleError),

    /// JWS envelope error: {0}
    #[from]
    Jws(proofpack_jws::JwsError),

    /// exchange document is malformed: {0}
    InvalidJson(String),

    /// exchange document is missing required field `{0}`.
    MissingField(&'static str),

    /// `issuedTo` keys and values must be non-empty.
    EmptyIssuedToEntry,

    /// attestation is required before signing an attested exchange.
    AttestationRequired,

    /// no attestation verifier is registered for service `{0}`.
    UnsupportedService(String),
}

impl From<serde_json::Error> for ExchangeError {
    fn from(e: serde_json::Error) -> Self { ExchangeError::InvalidJson(e.to_string()) }
}

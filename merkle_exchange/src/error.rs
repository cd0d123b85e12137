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

use crate::base64url::DecodeError;

/// Errors produced while encoding, decoding or verifying a Merkle exchange
/// document.
#[derive(Debug, Display, Error, From)]
#[display(doc_comments)]
pub enum MerkleError {
    /// input is not valid base64url: {0}
    #[from]
    InvalidEncoding(DecodeError),

    /// input is not valid hex: {0}
    InvalidHex(hex::FromHexError),

    /// merkle exchange document is malformed: {0}
    InvalidJson(String),

    /// merkle exchange document declares unsupported version {0}, expected
    /// `merkle-exchange-3.0`.
    UnsupportedVersion(String),

    /// merkle exchange document has no leaves.
    NoLeaves,

    /// leaf {0} is disclosed but missing its salt.
    MissingSalt(usize),

    /// leaf {0} is disclosed but missing its data.
    MissingData(usize),
}

impl From<hex::FromHexError> for MerkleError {
    fn from(e: hex::FromHexError) -> Self { MerkleError::InvalidHex(e) }
}

impl From<serde_json::Error> for MerkleError {
    fn from(e: serde_json::Error) -> Self { MerkleError::InvalidJson(e.to_string()) }
}

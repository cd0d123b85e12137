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

/// Errors produced while building or reading a JWS envelope.
#[derive(Debug, Display, Error, From)]
#[display(doc_comments)]
pub enum JwsError {
    /// payload must not be empty.
    ArgumentNull,

    /// at least one signer is required to build an envelope.
    NoSigners,

    /// envelope JSON is malformed: {0}
    InvalidJson(String),

    /// envelope is missing a usable payload or signatures array.
    InvalidEnvelope,

    /// signature header is missing the required `alg` claim.
    InvalidHeader,

    /// signature has neither a `protected` nor an unprotected `header`; base64url or JSON error: {0}
    InvalidEncoding(String),

    /// signer {0} produced a different payload encoding than the first signer.
    PayloadMismatch(String),
}

impl From<serde_json::Error> for JwsError {
    fn from(e: serde_json::Error) -> Self { JwsError::InvalidJson(e.to_string()) }
}

impl From<merkle_exchange::base64url::DecodeError> for JwsError {
    fn from(e: merkle_exchange::base64url::DecodeError) -> Self {
        JwsError::InvalidEncoding(e.to_string())
    }
}

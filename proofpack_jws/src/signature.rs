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

use serde::{Deserialize, Serialize};

use crate::header::JwsHeader;

/// One detached signature inside a [`crate::envelope::JwsEnvelope`]'s
/// General Serialization signature array.
///
/// At least one of `protected`/`header` should be present; see
/// [`crate::reader::JwsEnvelopeReader::verify`] for how the missing side is
/// reconstructed, and for the documented policy when both are absent.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JwsSignature {
    /// Base64url-encoded raw signature bytes.
    pub signature: String,

    /// Base64url-encoded JSON protected header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protected: Option<String>,

    /// Unprotected header, not covered by the signature itself. Used by
    /// ES256K to publish the signer's Ethereum address alongside (rather
    /// than inside) the signed header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<JwsHeader>,
}

/// The exact bytes a [`crate::capability::Verifier`] authenticates: the
/// decoded header, the signing input's two base64url segments, and the
/// signature to check against them.
#[derive(Clone, Debug)]
pub struct JwsToken {
    /// Decoded protected header (synthesized from `header` if `protected`
    /// was absent on the wire).
    pub header: JwsHeader,
    /// Base64url protected header segment, as it appears in the signing
    /// input.
    pub protected_b64: String,
    /// Base64url payload segment, shared by every signature in the
    /// envelope.
    pub payload_b64: String,
    /// Base64url signature segment.
    pub signature_b64: String,
}

impl JwsToken {
    /// The exact byte string a signer signs: `protected || '.' || payload`.
    pub fn signing_input(&self) -> Vec<u8> {
        let mut input = Vec::with_capacity(self.protected_b64.len() + 1 + self.payload_b64.len());
        input.extend_from_slice(self.protected_b64.as_bytes());
        input.push(b'.');
        input.extend_from_slice(self.payload_b64.as_bytes());
        input
    }
}

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

//! Pluggable per-algorithm signing and verification capabilities.
//!
//! These traits are the seam `proofpack_crypto`'s RS256/ES256K
//! implementations plug into; the envelope builder and reader never know
//! which concrete algorithm they are driving.

use serde_json::Value;

use crate::error::JwsError;
use crate::header::JwsHeader;
use crate::signature::JwsToken;

/// Result of signing a `(header, payload)` pair: the three segments a
/// [`crate::envelope::JwsEnvelope`] needs, plus any unprotected header
/// claims the signer wants published alongside the signature (e.g.
/// ES256K's `address`).
pub struct SignOutput {
    /// Base64url JSON protected header, canonically serialized.
    pub protected_b64: String,
    /// Base64url JSON payload, canonically serialized.
    pub payload_b64: String,
    /// Base64url raw signature bytes.
    pub signature_b64: String,
    /// Claims to publish in the signature's unprotected `header`, if any.
    pub unprotected_header: Option<JwsHeader>,
}

/// A per-algorithm signing capability.
///
/// Implementations own canonicalization of both `header` and `payload` (so
/// that algorithm-specific header claims, like `kid`, can be folded in
/// before the signing input is fixed).
pub trait Signer {
    /// The `alg` value this signer produces, e.g. `"RS256"`.
    fn alg(&self) -> &'static str;

    /// Signs `payload` under `header`, returning the three wire segments.
    fn sign(&self, header: &JwsHeader, payload: &Value) -> Result<SignOutput, JwsError>;
}

/// A per-algorithm verification capability.
///
/// Crypto failures are reported as `Ok(false)` or swallowed into `Ok(false)`
/// by implementations where appropriate: a signature that doesn't verify is
/// not, by itself, a reason to abort the rest of the pipeline.
pub trait Verifier {
    /// The `alg` value this verifier accepts, e.g. `"ES256K"`.
    fn alg(&self) -> &'static str;

    /// Verifies `token` against this verifier's configured key/identity.
    fn verify(&self, token: &JwsToken) -> Result<bool, JwsError>;
}

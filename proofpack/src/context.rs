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

use chrono::Duration;
use proofpack_attestation::AttestationVerifierFactory;
use proofpack_jws::Verifier;

/// How many signatures an [`crate::AttestedMerkleExchangeReader`] requires
/// to consider an envelope's signature layer satisfied.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SignatureRequirement {
    /// At least one signature must verify.
    AtLeastOne,
    /// Every signature present must verify.
    All,
    /// Don't check signatures at all — the attestation alone is trusted to
    /// establish provenance. Useful when the envelope carries only an
    /// unprotected header (e.g. a relayed document) with no usable
    /// signature material.
    Skip,
}

/// Resolves a [`Verifier`] for a JWS algorithm, optionally narrowed to a
/// specific expected signer.
///
/// `expected_signer` is populated from the attestation's resolved
/// `attester` identity (see [`crate::AttestedMerkleExchangeReader::read`]'s
/// ordering guarantee: the attestation is checked, and its attester
/// resolved, *before* this is called) so an ES256K resolver can build an
/// `Es256kVerifier::expecting(address)` rather than accepting any signer
/// for the algorithm.
pub trait JwsVerifierResolver: Send + Sync {
    /// Resolves a verifier for `alg`, given the attester identity already
    /// established by the attestation check (if any).
    fn resolve(&self, alg: &str, expected_signer: Option<&str>) -> Option<Box<dyn Verifier>>;
}

/// Checks a document's `nonce` against whatever replay-protection store
/// the embedding application keeps (e.g. a seen-nonce cache).
pub trait NonceGuard: Send + Sync {
    /// Whether `nonce` is acceptable (unseen, or otherwise valid per the
    /// embedder's policy).
    fn is_valid(&self, nonce: &str) -> bool;
}

/// A [`NonceGuard`] that accepts every nonce, for callers who don't use
/// the nonce field for replay protection.
pub struct AcceptAllNonces;

impl NonceGuard for AcceptAllNonces {
    fn is_valid(&self, _nonce: &str) -> bool { true }
}

/// Everything an [`crate::AttestedMerkleExchangeReader`] needs to verify
/// one envelope: how to resolve JWS verifiers, how to verify attestations,
/// how to check nonces, how strict to be about signatures, and how stale a
/// document is allowed to be.
pub struct VerificationContext {
    /// Resolves a [`Verifier`] per signature algorithm.
    pub jws_verifier_resolver: Box<dyn JwsVerifierResolver>,
    /// Registry of [`proofpack_attestation::AttestationVerifier`]s, keyed
    /// by service id.
    pub attestation_verifiers: AttestationVerifierFactory,
    /// Checks a document's `nonce`, when present.
    pub nonce_guard: Box<dyn NonceGuard>,
    /// Signature-layer acceptance policy.
    pub signature_requirement: SignatureRequirement,
    /// Rejects documents whose `timestamp` is older than `now - max_age`,
    /// when set.
    pub max_document_age: Option<Duration>,
}

impl VerificationContext {
    /// Builds a context with no nonce checking and no document-age limit.
    pub fn new(
        jws_verifier_resolver: Box<dyn JwsVerifierResolver>,
        attestation_verifiers: AttestationVerifierFactory,
        signature_requirement: SignatureRequirement,
    ) -> Self {
        VerificationContext {
            jws_verifier_resolver,
            attestation_verifiers,
            nonce_guard: Box::new(AcceptAllNonces),
            signature_requirement,
            max_document_age: None,
        }
    }

    /// Overrides the nonce guard.
    pub fn with_nonce_guard(mut self, nonce_guard: Box<dyn NonceGuard>) -> Self {
        self.nonce_guard = nonce_guard;
        self
    }

    /// Sets the maximum accepted document age.
    pub fn with_max_document_age(mut self, max_age: Duration) -> Self {
        self.max_document_age = Some(max_age);
        self
    }
}

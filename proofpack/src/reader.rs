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

use chrono::Utc;
use proofpack_jws::{JwsEnvelopeReader, ParsedEnvelope};
use proofpack_exchange::AttestedExchange;
use serde_json::Value;

use crate::context::{SignatureRequirement, VerificationContext};
use crate::error::ReadError;

/// The result of verifying one attested Merkle exchange envelope.
///
/// `is_valid` is the single bit most callers need; `message` explains why
/// when it's `false`; `document` is populated whenever parsing got far
/// enough to produce one, even on a failed verification, so a caller can
/// still inspect (e.g. log) what was rejected.
#[derive(Debug)]
pub struct VerificationOutcome {
    /// Whether every enabled check passed.
    pub is_valid: bool,
    /// Human-readable explanation, always present.
    pub message: String,
    /// The parsed document, when parsing succeeded regardless of whether
    /// later checks passed.
    pub document: Option<AttestedExchange>,
}

impl VerificationOutcome {
    fn invalid(message: impl Into<String>) -> Self {
        VerificationOutcome {
            is_valid: false,
            message: message.into(),
            document: None,
        }
    }

    fn invalid_with_document(message: impl Into<String>, document: AttestedExchange) -> Self {
        VerificationOutcome {
            is_valid: false,
            message: message.into(),
            document: Some(document),
        }
    }

    fn valid(message: impl Into<String>, document: AttestedExchange) -> Self {
        VerificationOutcome {
            is_valid: true,
            message: message.into(),
            document: Some(document),
        }
    }
}

/// Verifies an attested Merkle exchange envelope end to end: nonce,
/// document age, Merkle root, attestation, then JWS signatures — in that
/// order, so the attestation's resolved attester identity is available to
/// guide signer resolution.
pub struct AttestedMerkleExchangeReader;

impl AttestedMerkleExchangeReader {
    /// Runs the full verification pipeline against `envelope_json`.
    ///
    /// Returns `Err` only for a misconfigured `context` (e.g. no
    /// attestation verifiers registered) — a malformed or otherwise
    /// unverifiable envelope always yields `Ok(VerificationOutcome {
    /// is_valid: false, .. })`, never an `Err`.
    pub fn read(envelope_json: &str, context: &VerificationContext) -> Result<VerificationOutcome, ReadError> {
        if context.attestation_verifiers.available_service_ids().is_empty() {
            return Err(ReadError::NoAttestationVerifiers);
        }

        // 1. Parse the envelope and base64url/JSON-decode its payload.
        let parsed: ParsedEnvelope<Value> = match JwsEnvelopeReader::parse(envelope_json) {
            Ok(parsed) => parsed,
            Err(e) => return Ok(VerificationOutcome::invalid(format!("envelope could not be parsed: {e}"))),
        };
        let Some(payload_value) = &parsed.payload else {
            return Ok(VerificationOutcome::invalid("envelope payload is not valid JSON"));
        };

        // 2. Decode the payload into an attested exchange document.
        let document = match AttestedExchange::from_value(payload_value) {
            Ok(document) => document,
            Err(e) => return Ok(VerificationOutcome::invalid(format!("payload is not an attested exchange document: {e}"))),
        };

        // 3. Check the nonce, when the document carries one.
        if let Some(nonce) = &document.timestamped.nonce {
            if !context.nonce_guard.is_valid(nonce) {
                return Ok(VerificationOutcome::invalid_with_document("nonce was rejected (already used or unknown)", document));
            }
        }

        // 4. Check document age, when a limit is configured.
        if let Some(max_age) = context.max_document_age {
            let age = Utc::now().signed_duration_since(document.timestamped.timestamp);
            if age > max_age {
                return Ok(VerificationOutcome::invalid_with_document(
                    format!("document is older than the configured maximum age of {max_age}"),
                    document,
                ));
            }
        }

        // 5. Verify the Merkle root is internally consistent.
        let root_bytes: [u8; 32] = match hex::decode(document.timestamped.merkle_tree.root())
            .ok()
            .and_then(|bytes| bytes.try_into().ok())
        {
            Some(bytes) => bytes,
            None => return Ok(VerificationOutcome::invalid_with_document("merkle root is not valid 32-byte hex", document)),
        };
        match document.timestamped.merkle_tree.verify_root() {
            Ok(true) => {}
            Ok(false) => return Ok(VerificationOutcome::invalid_with_document("merkle root does not match its leaves", document)),
            Err(e) => return Ok(VerificationOutcome::invalid_with_document(format!("merkle root could not be verified: {e}"), document)),
        }

        // 6. Resolve the attestation verifier for this document's service id.
        let service_id = document.attestation.service_id().to_string();
        let verifier = match context.attestation_verifiers.get(&service_id) {
            Ok(verifier) => verifier,
            Err(e) => return Ok(VerificationOutcome::invalid_with_document(e.to_string(), document)),
        };

        // 7. Verify the attestation, resolving the attester identity.
        let attestation_value = match document.attestation.to_value() {
            Ok(value) => value,
            Err(e) => return Ok(VerificationOutcome::invalid_with_document(format!("attestation could not be serialized: {e}"), document)),
        };
        let attestation_result = verifier.verify(&attestation_value, &root_bytes);
        if !attestation_result.is_valid {
            return Ok(VerificationOutcome::invalid_with_document(attestation_result.message, document));
        }

        // 8. Verify JWS signatures, handing the resolved attester identity
        //    to the verifier resolver so it can narrow acceptance to that
        //    signer.
        let expected_signer = attestation_result.attester.as_deref();
        let outcome = JwsEnvelopeReader::verify(&parsed, |alg| {
            context.jws_verifier_resolver.resolve(alg, expected_signer)
        });

        // 9. Apply the configured signature policy.
        let signatures_ok = match context.signature_requirement {
            SignatureRequirement::AtLeastOne => outcome.verified_count >= 1,
            SignatureRequirement::All => outcome.total_count > 0 && outcome.verified_count == outcome.total_count,
            SignatureRequirement::Skip => true,
        };

        if !signatures_ok {
            return Ok(VerificationOutcome::invalid_with_document(
                format!(
                    "signature requirement not met: {}/{} signatures verified",
                    outcome.verified_count, outcome.total_count
                ),
                document,
            ));
        }

        Ok(VerificationOutcome::valid("attested merkle exchange verified successfully", document))
    }
}

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

use merkle_exchange::base64url;
use serde::de::DeserializeOwned;

use crate::capability::Verifier;
use crate::envelope::JwsEnvelope;
use crate::error::JwsError;
use crate::header::JwsHeader;
use crate::signature::JwsToken;

/// Result of [`JwsEnvelopeReader::parse`]: the raw envelope, plus the
/// payload decoded into the caller's declared type when possible.
pub struct ParsedEnvelope<T> {
    /// The envelope exactly as parsed from JSON.
    pub envelope: JwsEnvelope,
    /// `Some` when the base64url-decoded payload JSON-decodes into `T`;
    /// `None` if the shape doesn't match (the raw envelope is still kept).
    pub payload: Option<T>,
    /// Number of signatures present in the envelope.
    pub signature_count: usize,
}

/// Outcome of [`JwsEnvelopeReader::verify`]: how many of the envelope's
/// signatures verified, out of how many were attempted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VerifyOutcome {
    /// Number of signatures whose verifier accepted them.
    pub verified_count: usize,
    /// Total number of signatures in the envelope.
    pub total_count: usize,
}

/// Parses and verifies [`JwsEnvelope`]s.
///
/// `verify` never short-circuits on an individual signature failure: it
/// reports counts and leaves the accept/reject policy to the caller (see
/// `proofpack`'s `SignatureRequirement`).
pub struct JwsEnvelopeReader;

impl JwsEnvelopeReader {
    /// Parses `envelope_json`, decoding `payload` into `T` when its shape
    /// allows it.
    pub fn parse<T: DeserializeOwned>(envelope_json: &str) -> Result<ParsedEnvelope<T>, JwsError> {
        let envelope: JwsEnvelope =
            serde_json::from_str(envelope_json).map_err(|e| JwsError::InvalidJson(e.to_string()))?;
        if envelope.signatures.is_empty() {
            return Err(JwsError::InvalidEnvelope);
        }

        let payload_json = base64url::decode_to_utf8(&envelope.payload)?;
        let payload = serde_json::from_str(&payload_json).ok();

        Ok(ParsedEnvelope {
            signature_count: envelope.signatures.len(),
            payload,
            envelope,
        })
    }

    /// Verifies every signature in `parsed.envelope`, resolving a
    /// [`Verifier`] per signature via `resolve_verifier(alg)`.
    ///
    /// Signatures lacking both `protected` and an unprotected `header` are
    /// skipped (not counted as verified, not treated as a hard failure) —
    /// see `spec.md`'s Open Questions on this point.
    pub fn verify<T>(
        parsed: &ParsedEnvelope<T>,
        mut resolve_verifier: impl FnMut(&str) -> Option<Box<dyn Verifier>>,
    ) -> VerifyOutcome {
        let total_count = parsed.envelope.signatures.len();
        let mut verified_count = 0;

        for signature in &parsed.envelope.signatures {
            let Some(token) = Self::build_token(&parsed.envelope.payload, signature) else {
                continue;
            };

            let Some(verifier) = resolve_verifier(&token.header.alg) else {
                continue;
            };

            if verifier.verify(&token).unwrap_or(false) {
                verified_count += 1;
            }
        }

        VerifyOutcome {
            verified_count,
            total_count,
        }
    }

    fn build_token(payload_b64: &str, signature: &crate::signature::JwsSignature) -> Option<JwsToken> {
        let (protected_b64, mut header) = match (&signature.protected, &signature.header) {
            (Some(protected_b64), _) => {
                let header_json = base64url::decode_to_utf8(protected_b64).ok()?;
                let header: JwsHeader = serde_json::from_str(&header_json).ok()?;
                (protected_b64.clone(), header)
            }
            (None, Some(header)) => {
                let canonical = merkle_exchange::to_canonical_json(header).ok()?;
                (base64url::encode_utf8(&canonical), header.clone())
            }
            (None, None) => return None,
        };

        // The signing input only ever covers the protected header, but a
        // verifier may need claims a signer only published unprotected
        // (e.g. ES256K's `address`). Merge those in, protected claims win.
        if let Some(unprotected) = &signature.header {
            Self::merge_unprotected_claims(&mut header, unprotected);
        }

        Some(JwsToken {
            header,
            protected_b64,
            payload_b64: payload_b64.to_string(),
            signature_b64: signature.signature.clone(),
        })
    }

    fn merge_unprotected_claims(header: &mut JwsHeader, unprotected: &JwsHeader) {
        header.typ = header.typ.clone().or_else(|| unprotected.typ.clone());
        header.cty = header.cty.clone().or_else(|| unprotected.cty.clone());
        header.kid = header.kid.clone().or_else(|| unprotected.kid.clone());
        header.jku = header.jku.clone().or_else(|| unprotected.jku.clone());
        header.jwk = header.jwk.clone().or_else(|| unprotected.jwk.clone());
        header.x5u = header.x5u.clone().or_else(|| unprotected.x5u.clone());
        header.x5c = header.x5c.clone().or_else(|| unprotected.x5c.clone());
        header.x5t = header.x5t.clone().or_else(|| unprotected.x5t.clone());
        header.x5t_s256 = header.x5t_s256.clone().or_else(|| unprotected.x5t_s256.clone());
        header.crit = header.crit.clone().or_else(|| unprotected.crit.clone());
        for (key, value) in &unprotected.extra {
            header.extra.entry(key.clone()).or_insert_with(|| value.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::builder::JwsEnvelopeBuilder;
    use crate::capability::{SignOutput, Signer};

    struct EchoSigner;

    impl Signer for EchoSigner {
        fn alg(&self) -> &'static str { "RS256" }

        fn sign(
            &self,
            header: &JwsHeader,
            payload: &serde_json::Value,
        ) -> Result<SignOutput, JwsError> {
            let protected = merkle_exchange::to_canonical_json(header).unwrap();
            let payload_json = merkle_exchange::to_canonical_json(payload).unwrap();
            Ok(SignOutput {
                protected_b64: base64url::encode_utf8(&protected),
                payload_b64: base64url::encode_utf8(&payload_json),
                signature_b64: base64url::encode_utf8("sig"),
                unprotected_header: None,
            })
        }
    }

    struct AcceptAllVerifier;

    impl Verifier for AcceptAllVerifier {
        fn alg(&self) -> &'static str { "RS256" }

        fn verify(&self, _token: &JwsToken) -> Result<bool, JwsError> { Ok(true) }
    }

    #[test]
    fn round_trips_payload_and_verifies() {
        let envelope = JwsEnvelopeBuilder::new()
            .build(&json!({"hello": "world"}), &[&EchoSigner])
            .unwrap();
        let envelope_json = serde_json::to_string(&envelope).unwrap();

        let parsed: ParsedEnvelope<serde_json::Value> =
            JwsEnvelopeReader::parse(&envelope_json).unwrap();
        assert_eq!(parsed.signature_count, 1);
        assert_eq!(parsed.payload.unwrap(), json!({"hello": "world"}));

        let outcome =
            JwsEnvelopeReader::verify(&parsed, |alg| {
                (alg == "RS256").then_some(Box::new(AcceptAllVerifier) as Box<dyn Verifier>)
            });
        assert_eq!(outcome, VerifyOutcome {
            verified_count: 1,
            total_count: 1,
        });
    }

    #[test]
    fn unresolved_algorithm_is_not_verified_but_not_fatal() {
        let envelope = JwsEnvelopeBuilder::new()
            .build(&json!({"a": 1}), &[&EchoSigner])
            .unwrap();
        let envelope_json = serde_json::to_string(&envelope).unwrap();
        let parsed: ParsedEnvelope<serde_json::Value> =
            JwsEnvelopeReader::parse(&envelope_json).unwrap();

        let outcome = JwsEnvelopeReader::verify(&parsed, |_alg| None);
        assert_eq!(outcome, VerifyOutcome {
            verified_count: 0,
            total_count: 1,
        });
    }

    struct UnprotectedClaimSigner;

    impl Signer for UnprotectedClaimSigner {
        fn alg(&self) -> &'static str { "ES256K" }

        fn sign(
            &self,
            header: &JwsHeader,
            payload: &serde_json::Value,
        ) -> Result<SignOutput, JwsError> {
            let protected = merkle_exchange::to_canonical_json(header).unwrap();
            let payload_json = merkle_exchange::to_canonical_json(payload).unwrap();
            let unprotected = header.clone().with_claim("address", "0xabc");
            Ok(SignOutput {
                protected_b64: base64url::encode_utf8(&protected),
                payload_b64: base64url::encode_utf8(&payload_json),
                signature_b64: base64url::encode_utf8("sig"),
                unprotected_header: Some(unprotected),
            })
        }
    }

    struct ClaimCapturingVerifier;

    impl Verifier for ClaimCapturingVerifier {
        fn alg(&self) -> &'static str { "ES256K" }

        fn verify(&self, token: &JwsToken) -> Result<bool, JwsError> {
            Ok(token.header.extra.get("address").and_then(|v| v.as_str()) == Some("0xabc"))
        }
    }

    #[test]
    fn unprotected_claims_reach_the_token_header() {
        let envelope = JwsEnvelopeBuilder::new()
            .build(&json!({"hello": "world"}), &[&UnprotectedClaimSigner])
            .unwrap();
        let envelope_json = serde_json::to_string(&envelope).unwrap();
        let parsed: ParsedEnvelope<serde_json::Value> =
            JwsEnvelopeReader::parse(&envelope_json).unwrap();

        let outcome = JwsEnvelopeReader::verify(&parsed, |alg| {
            (alg == "ES256K").then_some(Box::new(ClaimCapturingVerifier) as Box<dyn Verifier>)
        });
        assert_eq!(outcome, VerifyOutcome {
            verified_count: 1,
            total_count: 1,
        });
    }
}

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

use serde::Serialize;
use serde_json::Value;

use crate::capability::Signer;
use crate::envelope::JwsEnvelope;
use crate::error::JwsError;
use crate::header::JwsHeader;
use crate::signature::JwsSignature;

/// Assembles a signed [`JwsEnvelope`] from a payload and an ordered set of
/// signers.
///
/// The output is a pure function of the inputs: no observable side effects,
/// no hidden state between calls.
pub struct JwsEnvelopeBuilder {
    typ: String,
    cty: String,
}

impl JwsEnvelopeBuilder {
    /// Starts a builder with the default `typ = "JWS"` and
    /// `cty = "application/json"`.
    pub fn new() -> Self {
        JwsEnvelopeBuilder {
            typ: "JWS".to_string(),
            cty: "application/json".to_string(),
        }
    }

    /// Overrides the default `typ` claim.
    pub fn with_typ(mut self, typ: impl Into<String>) -> Self {
        self.typ = typ.into();
        self
    }

    /// Overrides the default `cty` claim.
    pub fn with_cty(mut self, cty: impl Into<String>) -> Self {
        self.cty = cty.into();
        self
    }

    /// Builds the envelope, per the spec's five-step algorithm: one
    /// signature per signer, sharing a single payload encoding taken from
    /// the first signer.
    pub fn build<T: Serialize>(
        &self,
        payload: &T,
        signers: &[&dyn Signer],
    ) -> Result<JwsEnvelope, JwsError> {
        if signers.is_empty() {
            return Err(JwsError::NoSigners);
        }

        let payload_value =
            serde_json::to_value(payload).map_err(|e| JwsError::InvalidJson(e.to_string()))?;
        if payload_value.is_null() {
            return Err(JwsError::ArgumentNull);
        }

        let mut shared_payload_b64: Option<String> = None;
        let mut signatures = Vec::with_capacity(signers.len());

        for signer in signers {
            let header = JwsHeader::new(signer.alg(), self.typ.clone(), self.cty.clone());
            let output = signer.sign(&header, &payload_value)?;

            match &shared_payload_b64 {
                None => shared_payload_b64 = Some(output.payload_b64.clone()),
                Some(shared) if shared == &output.payload_b64 => {}
                Some(_) => return Err(JwsError::PayloadMismatch(signer.alg().to_string())),
            }

            signatures.push(JwsSignature {
                signature: output.signature_b64,
                protected: Some(output.protected_b64),
                header: output.unprotected_header,
            });
        }

        Ok(JwsEnvelope {
            payload: shared_payload_b64.expect("at least one signer ran"),
            signatures,
        })
    }
}

impl Default for JwsEnvelopeBuilder {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use serde_json::json;

    use super::*;

    struct StubSigner {
        alg: &'static str,
        calls: AtomicUsize,
    }

    impl Signer for StubSigner {
        fn alg(&self) -> &'static str { self.alg }

        fn sign(&self, header: &JwsHeader, payload: &Value) -> Result<crate::capability::SignOutput, JwsError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let protected = merkle_exchange::to_canonical_json(header).unwrap();
            let payload_json = merkle_exchange::to_canonical_json(payload).unwrap();
            Ok(crate::capability::SignOutput {
                protected_b64: merkle_exchange::base64url::encode_utf8(&protected),
                payload_b64: merkle_exchange::base64url::encode_utf8(&payload_json),
                signature_b64: merkle_exchange::base64url::encode_utf8("stub-signature"),
                unprotected_header: None,
            })
        }
    }

    #[test]
    fn builds_one_signature_per_signer_sharing_one_payload() {
        let signer_a = StubSigner {
            alg: "RS256",
            calls: AtomicUsize::new(0),
        };
        let signer_b = StubSigner {
            alg: "ES256K",
            calls: AtomicUsize::new(0),
        };

        let builder = JwsEnvelopeBuilder::new();
        let envelope = builder
            .build(&json!({"hello": "world"}), &[&signer_a, &signer_b])
            .unwrap();

        assert_eq!(envelope.signatures.len(), 2);
        assert_eq!(signer_a.calls.load(Ordering::SeqCst), 1);
        assert_eq!(signer_b.calls.load(Ordering::SeqCst), 1);
        assert!(envelope
            .signatures
            .iter()
            .all(|sig| sig.protected.is_some()));
    }

    #[test]
    fn rejects_empty_signer_list() {
        let builder = JwsEnvelopeBuilder::new();
        let result = builder.build(&json!({"a": 1}), &[]);
        assert!(matches!(result, Err(JwsError::NoSigners)));
    }

    #[test]
    fn rejects_null_payload() {
        let signer = StubSigner {
            alg: "RS256",
            calls: AtomicUsize::new(0),
        };
        let builder = JwsEnvelopeBuilder::new();
        let result = builder.build(&Value::Null, &[&signer]);
        assert!(matches!(result, Err(JwsError::ArgumentNull)));
    }
}

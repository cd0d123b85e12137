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

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::AttestationError;
use crate::service_id::ServiceId;

/// Outcome of checking an attestation against a Merkle root.
///
/// `attester` carries the resolved signer identity (e.g. an Ethereum
/// address) when verification succeeds, so the reader pipeline can check
/// it against the JWS signer *after* attestation has already been
/// validated (attestation-first ordering).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttestationResult {
    /// Whether the attestation is structurally sound and binds `merkle_root`.
    pub is_valid: bool,
    /// Human-readable explanation, always present (empty on success is
    /// acceptable but a short confirmation message is preferred).
    pub message: String,
    /// The attester's identity, resolved only when `is_valid` is `true`.
    pub attester: Option<String>,
}

impl AttestationResult {
    /// Builds a successful result.
    pub fn valid(attester: impl Into<String>, message: impl Into<String>) -> Self {
        AttestationResult {
            is_valid: true,
            message: message.into(),
            attester: Some(attester.into()),
        }
    }

    /// Builds a failed result.
    pub fn invalid(message: impl Into<String>) -> Self {
        AttestationResult {
            is_valid: false,
            message: message.into(),
            attester: None,
        }
    }
}

/// A pluggable capability for checking one attestation service's records.
///
/// `attestation` is the service-specific attestation document as JSON
/// (e.g. an EAS attestation's fields); implementations own interpreting
/// it and deciding whether it genuinely binds `merkle_root`.
pub trait AttestationVerifier {
    /// The service id this verifier handles, e.g. `"eas"`.
    fn service_id(&self) -> &str;

    /// Verifies that `attestation` binds `merkle_root`.
    fn verify(&self, attestation: &Value, merkle_root: &[u8; 32]) -> AttestationResult;
}

/// A case-insensitive registry of [`AttestationVerifier`]s, keyed by
/// [`ServiceId`].
#[derive(Default)]
pub struct AttestationVerifierFactory {
    verifiers: BTreeMap<ServiceId, Box<dyn AttestationVerifier + Send + Sync>>,
}

impl AttestationVerifierFactory {
    /// Builds an empty factory.
    pub fn new() -> Self { AttestationVerifierFactory::default() }

    /// Registers `verifier` under its own `service_id()`, lowercased.
    pub fn register(&mut self, verifier: impl AttestationVerifier + Send + Sync + 'static) -> &mut Self {
        let id = ServiceId::new(verifier.service_id());
        self.verifiers.insert(id, Box::new(verifier));
        self
    }

    /// Whether a verifier is registered for `service_id`.
    pub fn has(&self, service_id: &str) -> bool { self.verifiers.contains_key(&ServiceId::new(service_id)) }

    /// Looks up the verifier for `service_id`.
    pub fn get(&self, service_id: &str) -> Result<&(dyn AttestationVerifier + Send + Sync), AttestationError> {
        self.verifiers
            .get(&ServiceId::new(service_id))
            .map(|boxed| boxed.as_ref())
            .ok_or_else(|| AttestationError::ServiceUnsupported(service_id.to_string()))
    }

    /// Lists every registered service id, in lookup-normalized form.
    pub fn available_service_ids(&self) -> Vec<String> {
        self.verifiers.keys().map(ServiceId::to_string).collect()
    }
}

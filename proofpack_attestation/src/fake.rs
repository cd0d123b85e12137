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

use serde_json::Value;

use crate::verifier::{AttestationResult, AttestationVerifier};

/// The well-known service id accepted by [`FakeAttestationVerifier`], for
/// downstream integrators who want to exercise the reader pipeline without
/// a real EAS indexer.
pub const FAKE_ATTESTATION_SERVICE_ID: &str = "fake-attestation-service";

/// A deterministic, no-network stand-in for a real attestation lookup.
///
/// It trusts the attestation document at face value: the record is valid
/// if it carries a non-empty `attestationUid`, a `from` address, and a
/// `merkleRoot` hex string equal to the root being verified. There is no
/// signature or on-chain lookup involved — this exists purely to let
/// integrators drive the full reader pipeline end to end.
#[derive(Default)]
pub struct FakeAttestationVerifier;

impl AttestationVerifier for FakeAttestationVerifier {
    fn service_id(&self) -> &str { FAKE_ATTESTATION_SERVICE_ID }

    fn verify(&self, attestation: &Value, merkle_root: &[u8; 32]) -> AttestationResult {
        let Some(attestation_uid) = attestation.get("attestationUid").and_then(Value::as_str) else {
            return AttestationResult::invalid("attestation is missing attestationUid");
        };
        if attestation_uid.is_empty() {
            return AttestationResult::invalid("attestationUid must not be empty");
        }

        let Some(from) = attestation.get("from").and_then(Value::as_str) else {
            return AttestationResult::invalid("attestation is missing from");
        };

        let Some(claimed_root) = attestation.get("merkleRoot").and_then(Value::as_str) else {
            return AttestationResult::invalid("attestation is missing merkleRoot");
        };
        let expected_root = hex::encode(merkle_root);
        if !claimed_root.eq_ignore_ascii_case(&expected_root) {
            return AttestationResult::invalid(format!(
                "attestation's merkleRoot {claimed_root} does not match document root {expected_root}"
            ));
        }

        AttestationResult::valid(from, "fake-attestation-service accepted the attestation")
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn accepts_matching_root() {
        let root = [7u8; 32];
        let attestation = json!({
            "attestationUid": "0xabc",
            "from": "0xattester",
            "merkleRoot": hex::encode(root),
        });
        let result = FakeAttestationVerifier.verify(&attestation, &root);
        assert!(result.is_valid);
        assert_eq!(result.attester.as_deref(), Some("0xattester"));
    }

    #[test]
    fn rejects_mismatched_root() {
        let attestation = json!({
            "attestationUid": "0xabc",
            "from": "0xattester",
            "merkleRoot": hex::encode([1u8; 32]),
        });
        let result = FakeAttestationVerifier.verify(&attestation, &[2u8; 32]);
        assert!(!result.is_valid);
    }

    #[test]
    fn rejects_missing_attestation_uid() {
        let attestation = json!({"from": "0xattester", "merkleRoot": hex::encode([0u8; 32])});
        let result = FakeAttestationVerifier.verify(&attestation, &[0u8; 32]);
        assert!(!result.is_valid);
    }
}

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

use k256::ecdsa::signature::hazmat::PrehashSigner;
use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};
use sha2::{Digest, Sha256};

use merkle_exchange::base64url;
use proofpack_jws::{JwsError, JwsHeader, JwsToken, SignOutput, Signer, Verifier};

use crate::eth_address::EthAddress;

/// Signs JWS envelopes with ES256K (ECDSA over secp256k1, SHA-256 digest),
/// publishing the signer's derived Ethereum address as an unprotected
/// header claim.
pub struct Es256kSigner {
    key: SigningKey,
}

impl Es256kSigner {
    /// Wraps a secp256k1 private key for ES256K signing.
    pub fn new(key: SigningKey) -> Self { Es256kSigner { key } }
}

impl Signer for Es256kSigner {
    fn alg(&self) -> &'static str { "ES256K" }

    fn sign(&self, header: &JwsHeader, payload: &serde_json::Value) -> Result<SignOutput, JwsError> {
        let protected_json =
            merkle_exchange::to_canonical_json(header).map_err(|e| JwsError::InvalidJson(e.to_string()))?;
        let payload_json =
            merkle_exchange::to_canonical_json(payload).map_err(|e| JwsError::InvalidJson(e.to_string()))?;
        let protected_b64 = base64url::encode_utf8(&protected_json);
        let payload_b64 = base64url::encode_utf8(&payload_json);

        let signing_input = format!("{protected_b64}.{payload_b64}");
        let digest = Sha256::digest(signing_input.as_bytes());
        let signature: Signature = self
            .key
            .sign_prehash(&digest)
            .map_err(|e| JwsError::InvalidEncoding(e.to_string()))?;

        let address = EthAddress::from_verifying_key(self.key.verifying_key());
        let unprotected_header = JwsHeader::new("ES256K", "JWS", "application/json")
            .with_claim("address", address.to_hex());

        Ok(SignOutput {
            protected_b64,
            payload_b64,
            signature_b64: base64url::encode_bytes(&signature.to_bytes()),
            unprotected_header: Some(unprotected_header),
        })
    }
}

/// Verifies ES256K-signed JWS tokens against an expected signer address.
///
/// The address is read from the token's `address` claim (protected or
/// unprotected, whichever carried it) and compared case-insensitively
/// against the public key recovered from the signature — so a verifier
/// configured with no fixed key still rejects a signature whose claimed
/// address doesn't match its own recovered key.
pub struct Es256kVerifier {
    expected_address: Option<EthAddress>,
}

impl Es256kVerifier {
    /// Accepts any signer whose claimed `address` matches the key that
    /// actually produced the signature.
    pub fn any_signer() -> Self { Es256kVerifier { expected_address: None } }

    /// Accepts only signatures from `address`.
    pub fn expecting(address: EthAddress) -> Self {
        Es256kVerifier {
            expected_address: Some(address),
        }
    }
}

impl Verifier for Es256kVerifier {
    fn alg(&self) -> &'static str { "ES256K" }

    fn verify(&self, token: &JwsToken) -> Result<bool, JwsError> {
        let signature_bytes = base64url::decode_to_bytes(&token.signature_b64)?;
        let signature = match normalize_signature(&signature_bytes) {
            Some(sig) => sig,
            None => return Ok(false),
        };

        let claimed_address = token
            .header
            .extra
            .get("address")
            .and_then(|v| v.as_str())
            .and_then(|s| EthAddress::parse(s).ok());

        if let Some(expected) = self.expected_address {
            if claimed_address != Some(expected) {
                return Ok(false);
            }
        }

        let Some(claimed_address) = claimed_address else {
            return Ok(false);
        };

        let recovery_candidates = recover_candidates(&token.signing_input(), &signature);

        Ok(recovery_candidates
            .into_iter()
            .any(|key| EthAddress::from_verifying_key(&key) == claimed_address))
    }
}

fn recover_candidates(message: &[u8], signature: &Signature) -> Vec<VerifyingKey> {
    (0u8..=1)
        .filter_map(|id| RecoveryId::try_from(id).ok())
        .filter_map(|id| VerifyingKey::recover_from_msg(message, signature, id).ok())
        .collect()
}

/// Accepts either the canonical 64-byte `r || s` compact form, or a legacy
/// 65-byte `r || s || v` form (the trailing recovery byte is ignored; both
/// recovery candidates are tried by the caller instead).
fn normalize_signature(bytes: &[u8]) -> Option<Signature> {
    match bytes.len() {
        64 => Signature::from_slice(bytes).ok(),
        65 => Signature::from_slice(&bytes[..64]).ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::OsRng;
    use serde_json::json;

    use super::*;

    #[test]
    fn signs_and_verifies_round_trip() {
        let key = SigningKey::random(&mut OsRng);
        let address = EthAddress::from_verifying_key(key.verifying_key());
        let signer = Es256kSigner::new(key);
        let header = JwsHeader::new("ES256K", "JWS", "application/json");

        let output = signer.sign(&header, &json!({"hello": "world"})).unwrap();
        let merged_header = output.unprotected_header.clone().unwrap();
        let token = JwsToken {
            header: merged_header,
            protected_b64: output.protected_b64,
            payload_b64: output.payload_b64,
            signature_b64: output.signature_b64,
        };

        let verifier = Es256kVerifier::expecting(address);
        assert!(verifier.verify(&token).unwrap());
    }

    #[test]
    fn rejects_mismatched_expected_address() {
        let key = SigningKey::random(&mut OsRng);
        let other_key = SigningKey::random(&mut OsRng);
        let other_address = EthAddress::from_verifying_key(other_key.verifying_key());
        let signer = Es256kSigner::new(key);
        let header = JwsHeader::new("ES256K", "JWS", "application/json");

        let output = signer.sign(&header, &json!({"hello": "world"})).unwrap();
        let token = JwsToken {
            header: output.unprotected_header.clone().unwrap(),
            protected_b64: output.protected_b64,
            payload_b64: output.payload_b64,
            signature_b64: output.signature_b64,
        };

        let verifier = Es256kVerifier::expecting(other_address);
        assert!(!verifier.verify(&token).unwrap());
    }

    #[test]
    fn rejects_tampered_signature() {
        let key = SigningKey::random(&mut OsRng);
        let address = EthAddress::from_verifying_key(key.verifying_key());
        let signer = Es256kSigner::new(key);
        let header = JwsHeader::new("ES256K", "JWS", "application/json");

        let output = signer.sign(&header, &json!({"hello": "world"})).unwrap();
        let mut token = JwsToken {
            header: output.unprotected_header.clone().unwrap(),
            protected_b64: output.protected_b64,
            payload_b64: output.payload_b64,
            signature_b64: output.signature_b64,
        };
        token.signature_b64 = base64url::encode_bytes(&[0u8; 64]);

        let verifier = Es256kVerifier::expecting(address);
        assert!(!verifier.verify(&token).unwrap());
    }
}

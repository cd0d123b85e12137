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

use rsa::pkcs1v15::{SigningKey, VerifyingKey};
use rsa::signature::{RandomizedSigner, SignatureEncoding, Verifier as RsaVerifierTrait};
use rsa::{RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;

use merkle_exchange::base64url;
use proofpack_jws::{JwsError, JwsHeader, JwsToken, SignOutput, Signer, Verifier};

/// Signs JWS envelopes with RS256 (RSASSA-PKCS1-v1_5 + SHA-256).
pub struct Rs256Signer {
    key: SigningKey<Sha256>,
    kid: Option<String>,
}

impl Rs256Signer {
    /// Wraps an RSA private key for RS256 signing, optionally stamping a
    /// `kid` claim on every header it produces.
    pub fn new(private_key: RsaPrivateKey, kid: Option<String>) -> Self {
        Rs256Signer {
            key: SigningKey::<Sha256>::new(private_key),
            kid,
        }
    }
}

impl Signer for Rs256Signer {
    fn alg(&self) -> &'static str { "RS256" }

    fn sign(&self, header: &JwsHeader, payload: &serde_json::Value) -> Result<SignOutput, JwsError> {
        let mut header = header.clone();
        if let Some(kid) = &self.kid {
            header.kid = Some(kid.clone());
        }

        let protected_json =
            merkle_exchange::to_canonical_json(&header).map_err(|e| JwsError::InvalidJson(e.to_string()))?;
        let payload_json =
            merkle_exchange::to_canonical_json(payload).map_err(|e| JwsError::InvalidJson(e.to_string()))?;
        let protected_b64 = base64url::encode_utf8(&protected_json);
        let payload_b64 = base64url::encode_utf8(&payload_json);

        let signing_input = format!("{protected_b64}.{payload_b64}");
        let signature = self.key.sign_with_rng(&mut rand::thread_rng(), signing_input.as_bytes());

        Ok(SignOutput {
            protected_b64,
            payload_b64,
            signature_b64: base64url::encode_bytes(&signature.to_bytes()),
            unprotected_header: None,
        })
    }
}

/// Verifies RS256-signed JWS tokens against a fixed RSA public key.
pub struct Rs256Verifier {
    key: VerifyingKey<Sha256>,
}

impl Rs256Verifier {
    /// Wraps an RSA public key for RS256 verification.
    pub fn new(public_key: RsaPublicKey) -> Self {
        Rs256Verifier {
            key: VerifyingKey::<Sha256>::new(public_key),
        }
    }
}

impl Verifier for Rs256Verifier {
    fn alg(&self) -> &'static str { "RS256" }

    fn verify(&self, token: &JwsToken) -> Result<bool, JwsError> {
        let signature_bytes = base64url::decode_to_bytes(&token.signature_b64)?;
        let signature = match rsa::pkcs1v15::Signature::try_from(signature_bytes.as_slice()) {
            Ok(sig) => sig,
            Err(_) => return Ok(false),
        };

        Ok(self
            .key
            .verify(&token.signing_input(), &signature)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::OsRng;
    use serde_json::json;

    use super::*;

    fn keypair() -> (RsaPrivateKey, RsaPublicKey) {
        let private = RsaPrivateKey::new(&mut OsRng, 2048).unwrap();
        let public = RsaPublicKey::from(&private);
        (private, public)
    }

    #[test]
    fn signs_and_verifies_round_trip() {
        let (private, public) = keypair();
        let signer = Rs256Signer::new(private, Some("key-1".to_string()));
        let header = JwsHeader::new("RS256", "JWS", "application/json");
        let payload = json!({"hello": "world"});

        let output = signer.sign(&header, &payload).unwrap();
        let token = JwsToken {
            header: serde_json::from_str(
                &base64url::decode_to_utf8(&output.protected_b64).unwrap(),
            )
            .unwrap(),
            protected_b64: output.protected_b64,
            payload_b64: output.payload_b64,
            signature_b64: output.signature_b64,
        };

        let verifier = Rs256Verifier::new(public);
        assert!(verifier.verify(&token).unwrap());
    }

    #[test]
    fn rejects_tampered_payload() {
        let (private, public) = keypair();
        let signer = Rs256Signer::new(private, None);
        let header = JwsHeader::new("RS256", "JWS", "application/json");
        let output = signer.sign(&header, &json!({"hello": "world"})).unwrap();

        let mut token = JwsToken {
            header: serde_json::from_str(
                &base64url::decode_to_utf8(&output.protected_b64).unwrap(),
            )
            .unwrap(),
            protected_b64: output.protected_b64,
            payload_b64: output.payload_b64,
            signature_b64: output.signature_b64,
        };
        token.payload_b64 = base64url::encode_utf8("{\"hello\":\"tampered\"}");

        let verifier = Rs256Verifier::new(public);
        assert!(!verifier.verify(&token).unwrap());
    }
}

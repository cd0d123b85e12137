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
use serde_json::{Map, Value};

/// A JWS protected (or unprotected) header.
///
/// Unknown claims round-trip through `extra` rather than being dropped, so a
/// consumer that only understands a subset of claims never silently loses
/// data on re-serialization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JwsHeader {
    /// Signing algorithm identifier, e.g. `"RS256"` or `"ES256K"`.
    pub alg: String,

    /// Media type of the envelope, conventionally `"JWS"` or `"JWT"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,

    /// Media type of the payload, e.g.
    /// `"application/attested-merkle-exchange+json"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cty: Option<String>,

    /// Key identifier hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,

    /// JWK Set URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jku: Option<String>,

    /// Embedded JSON Web Key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jwk: Option<Value>,

    /// X.509 URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x5u: Option<String>,

    /// X.509 certificate chain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x5c: Option<Vec<String>>,

    /// X.509 certificate SHA-1 thumbprint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x5t: Option<String>,

    /// X.509 certificate SHA-256 thumbprint.
    #[serde(rename = "x5t#S256", skip_serializing_if = "Option::is_none")]
    pub x5t_s256: Option<String>,

    /// Claims a verifier must understand to process this header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crit: Option<Vec<String>>,

    /// Application-private claims not covered by the fields above (e.g.
    /// ES256K's `address` claim), preserved verbatim on round-trip.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl JwsHeader {
    /// Builds a minimal header carrying only `alg`, `typ` and `cty`.
    pub fn new(alg: impl Into<String>, typ: impl Into<String>, cty: impl Into<String>) -> Self {
        JwsHeader {
            alg: alg.into(),
            typ: Some(typ.into()),
            cty: Some(cty.into()),
            kid: None,
            jku: None,
            jwk: None,
            x5u: None,
            x5c: None,
            x5t: None,
            x5t_s256: None,
            crit: None,
            extra: Map::new(),
        }
    }

    /// Sets an application-private claim, e.g. ES256K's `address`.
    pub fn with_claim(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_claims_round_trip() {
        let header = JwsHeader::new("ES256K", "JWS", "application/json")
            .with_claim("address", "0xabc");
        let json = serde_json::to_string(&header).unwrap();
        assert!(json.contains("\"address\":\"0xabc\""));
        let parsed: JwsHeader = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.extra.get("address").unwrap(), "0xabc");
    }

    #[test]
    fn omits_absent_optional_claims() {
        let header = JwsHeader::new("RS256", "JWT", "application/json");
        let json = serde_json::to_string(&header).unwrap();
        assert!(!json.contains("kid"));
    }
}

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

use serde::{Deserialize, Serialize};

use crate::error::ExchangeError;

/// Well-known `issuedTo` kind constants.
pub const EMAIL: &str = "email";
/// Well-known `issuedTo` kind constants.
pub const PHONE: &str = "phone";
/// Well-known `issuedTo` kind constants.
pub const ETHEREUM: &str = "ethereum";

/// The recipient(s) an exchange document was issued to, keyed by kind
/// (`"email"`, `"phone"`, `"ethereum"`, or any caller-defined string).
///
/// Keys are compared case-sensitively, unlike [`crate::Attestation`]'s
/// service id or [`proofpack_crypto::EthAddress`] — this is a deliberate
/// asymmetry: `issuedTo` keys are caller-defined labels, not a fixed,
/// normalized vocabulary.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssuedTo(BTreeMap<String, String>);

impl IssuedTo {
    /// Builds an empty `issuedTo` map.
    pub fn new() -> Self { IssuedTo::default() }

    /// Inserts `key` -> `value`, rejecting empty keys or values.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), ExchangeError> {
        let key = key.into();
        let value = value.into();
        if key.is_empty() || value.is_empty() {
            return Err(ExchangeError::EmptyIssuedToEntry);
        }
        self.0.insert(key, value);
        Ok(())
    }

    /// Looks up a previously inserted value.
    pub fn get(&self, key: &str) -> Option<&str> { self.0.get(key).map(String::as_str) }

    /// Whether no recipients have been recorded.
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Iterates over `(kind, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_key_or_value() {
        let mut issued_to = IssuedTo::new();
        assert!(issued_to.insert("", "x").is_err());
        assert!(issued_to.insert(EMAIL, "").is_err());
        assert!(issued_to.insert(EMAIL, "jdoe@example.com").is_ok());
    }

    #[test]
    fn round_trips_through_json() {
        let mut issued_to = IssuedTo::new();
        issued_to.insert(ETHEREUM, "0xabc").unwrap();
        let json = serde_json::to_string(&issued_to).unwrap();
        let parsed: IssuedTo = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.get(ETHEREUM), Some("0xabc"));
    }
}

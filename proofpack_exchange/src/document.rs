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

use chrono::{DateTime, Utc};
use merkle_exchange::MerkleTree;
use serde_json::Value;

use crate::attestation::Attestation;
use crate::error::ExchangeError;
use crate::issued_to::IssuedTo;

/// A Merkle exchange document stamped with an issuance time, and
/// optionally a nonce and recipient(s).
///
/// Serializes/deserializes through [`TimestampedExchange::to_value`] /
/// [`TimestampedExchange::from_value`] rather than `#[derive(Serialize)]`,
/// so that `merkle_tree` is always routed through its own
/// [`MerkleTree::to_json`] / [`MerkleTree::parse`] (see
/// `merkle_exchange::to_canonical_json`'s embedding note) instead of a
/// derive walking its private fields directly.
#[derive(Clone, Debug)]
pub struct TimestampedExchange {
    /// The underlying salted hash set.
    pub merkle_tree: MerkleTree,
    /// When this document was issued.
    pub timestamp: DateTime<Utc>,
    /// Replay-resistance token, when the issuer opted in.
    pub nonce: Option<String>,
    /// Recipient(s) this document was issued to.
    pub issued_to: Option<IssuedTo>,
}

impl TimestampedExchange {
    /// Assembles the `{ merkleTree, timestamp, nonce?, issuedTo? }` wire
    /// value.
    pub fn to_value(&self) -> Result<Value, ExchangeError> {
        let mut map = serde_json::Map::new();
        map.insert("merkleTree".to_string(), serde_json::from_str(&self.merkle_tree.to_json()?)?);
        map.insert("timestamp".to_string(), Value::String(self.timestamp.to_rfc3339()));
        if let Some(nonce) = &self.nonce {
            map.insert("nonce".to_string(), Value::String(nonce.clone()));
        }
        if let Some(issued_to) = &self.issued_to {
            if !issued_to.is_empty() {
                map.insert("issuedTo".to_string(), serde_json::to_value(issued_to)?);
            }
        }
        Ok(Value::Object(map))
    }

    /// Parses the wire value produced by [`TimestampedExchange::to_value`].
    pub fn from_value(value: &Value) -> Result<Self, ExchangeError> {
        let merkle_tree_json = value
            .get("merkleTree")
            .ok_or(ExchangeError::MissingField("merkleTree"))?;
        let merkle_tree = MerkleTree::parse(&serde_json::to_string(merkle_tree_json)?)?;

        let timestamp_str = value
            .get("timestamp")
            .and_then(Value::as_str)
            .ok_or(ExchangeError::MissingField("timestamp"))?;
        let timestamp = DateTime::parse_from_rfc3339(timestamp_str)
            .map_err(|e| ExchangeError::InvalidJson(e.to_string()))?
            .with_timezone(&Utc);

        let nonce = value.get("nonce").and_then(Value::as_str).map(str::to_string);
        let issued_to = match value.get("issuedTo") {
            Some(v) => Some(serde_json::from_value(v.clone())?),
            None => None,
        };

        Ok(TimestampedExchange {
            merkle_tree,
            timestamp,
            nonce,
            issued_to,
        })
    }

    /// Serializes to canonical JSON.
    pub fn to_json(&self) -> Result<String, ExchangeError> { Ok(serde_json::to_string(&self.to_value()?)?) }

    /// Parses a document previously produced by
    /// [`TimestampedExchange::to_json`].
    pub fn parse(json: &str) -> Result<Self, ExchangeError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }
}

/// A [`TimestampedExchange`] additionally bound to an [`Attestation`].
#[derive(Clone, Debug)]
pub struct AttestedExchange {
    /// The timestamped document being attested.
    pub timestamped: TimestampedExchange,
    /// The attestation binding this document's Merkle root.
    pub attestation: Attestation,
}

impl AttestedExchange {
    /// Assembles the timestamped document's fields plus `attestation`.
    pub fn to_value(&self) -> Result<Value, ExchangeError> {
        let mut map = match self.timestamped.to_value()? {
            Value::Object(map) => map,
            _ => unreachable!("TimestampedExchange::to_value always returns an object"),
        };
        map.insert("attestation".to_string(), self.attestation.to_value()?);
        Ok(Value::Object(map))
    }

    /// Parses a document previously produced by
    /// [`AttestedExchange::to_value`].
    pub fn from_value(value: &Value) -> Result<Self, ExchangeError> {
        let timestamped = TimestampedExchange::from_value(value)?;
        let attestation_value = value
            .get("attestation")
            .ok_or(ExchangeError::MissingField("attestation"))?;
        let attestation = Attestation::from_value(attestation_value)?;
        Ok(AttestedExchange {
            timestamped,
            attestation,
        })
    }

    /// Serializes to canonical JSON.
    pub fn to_json(&self) -> Result<String, ExchangeError> { Ok(serde_json::to_string(&self.to_value()?)?) }

    /// Parses a document previously produced by
    /// [`AttestedExchange::to_json`].
    pub fn parse(json: &str) -> Result<Self, ExchangeError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::attestation::{EasAttestation, EasSchema};

    fn sample_tree() -> MerkleTree {
        let mut tree = MerkleTree::new();
        let Value::Object(object) = json!({"name": "John Doe"}) else {
            unreachable!()
        };
        tree.add_json_leaves(&object).unwrap();
        tree.recompute_sha256_root().unwrap();
        tree
    }

    #[test]
    fn timestamped_exchange_round_trips() {
        let exchange = TimestampedExchange {
            merkle_tree: sample_tree(),
            timestamp: Utc::now(),
            nonce: Some("abc123".to_string()),
            issued_to: None,
        };
        let json = exchange.to_json().unwrap();
        let parsed = TimestampedExchange::parse(&json).unwrap();
        assert_eq!(parsed.merkle_tree.root(), exchange.merkle_tree.root());
        assert_eq!(parsed.nonce, exchange.nonce);
    }

    #[test]
    fn attested_exchange_round_trips() {
        let timestamped = TimestampedExchange {
            merkle_tree: sample_tree(),
            timestamp: Utc::now(),
            nonce: None,
            issued_to: None,
        };
        let attestation = Attestation::Eas(EasAttestation {
            network: "base-sepolia".to_string(),
            attestation_uid: "0xabc".to_string(),
            from: "0xattester".to_string(),
            to: "0xrecipient".to_string(),
            schema: EasSchema {
                schema_uid: "0xschema".to_string(),
                name: "PrivateData".to_string(),
            },
        });
        let exchange = AttestedExchange {
            timestamped,
            attestation,
        };

        let json = exchange.to_json().unwrap();
        let parsed = AttestedExchange::parse(&json).unwrap();
        assert_eq!(parsed.attestation, exchange.attestation);
        assert_eq!(parsed.timestamped.merkle_tree.root(), exchange.timestamped.merkle_tree.root());
    }
}

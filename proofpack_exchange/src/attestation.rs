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
use serde_json::Value;

use crate::error::ExchangeError;

/// An EAS (Ethereum Attestation Service) schema reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EasSchema {
    /// The schema's on-chain UID.
    pub schema_uid: String,
    /// Human-readable schema name, e.g. `"PrivateData"`.
    pub name: String,
}

/// An EAS attestation record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EasAttestation {
    /// Network the attestation was issued on, e.g. `"base-sepolia"`.
    pub network: String,
    /// The attestation's on-chain UID.
    pub attestation_uid: String,
    /// Attesting address.
    pub from: String,
    /// Recipient address.
    pub to: String,
    /// The schema this attestation was issued against.
    pub schema: EasSchema,
}

/// Locates an attestation without embedding its full record: enough to
/// look it up from an indexer or a direct on-chain call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttestationLocator {
    /// Which [`crate::Attestation`] variant / verifier this locates, e.g.
    /// `"eas"`.
    pub service_id: String,
    /// Network identifier.
    pub network: String,
    /// Schema identifier.
    pub schema_id: String,
    /// Attestation identifier.
    pub attestation_id: String,
    /// Attester's address.
    pub attester_address: String,
    /// Recipient's address.
    pub recipient_address: String,
}

/// A tagged union of attestation records, keyed by service id.
///
/// Unrecognized service ids deserialize into [`Attestation::Unknown`]
/// rather than failing to parse — a document attested by a service this
/// build doesn't know about is still a well-formed document; only
/// *verifying* that attestation will fail, at the factory lookup step.
#[derive(Clone, Debug, PartialEq)]
pub enum Attestation {
    /// An Ethereum Attestation Service record, tagged `"eas"`.
    Eas(EasAttestation),
    /// An attestation tagged with a service id this build doesn't
    /// recognize, kept verbatim.
    Unknown(String, Value),
}

impl Attestation {
    /// The service id this attestation is tagged with, e.g. `"eas"`.
    pub fn service_id(&self) -> &str {
        match self {
            Attestation::Eas(_) => "eas",
            Attestation::Unknown(id, _) => id,
        }
    }

    /// Converts to the `{ serviceId: record }` wire shape.
    pub fn to_value(&self) -> Result<Value, ExchangeError> {
        let (id, record) = match self {
            Attestation::Eas(eas) => ("eas".to_string(), serde_json::to_value(eas)?),
            Attestation::Unknown(id, value) => (id.clone(), value.clone()),
        };
        let mut map = serde_json::Map::new();
        map.insert(id, record);
        Ok(Value::Object(map))
    }

    /// Parses the `{ serviceId: record }` wire shape.
    pub fn from_value(value: &Value) -> Result<Self, ExchangeError> {
        let object = value
            .as_object()
            .ok_or_else(|| ExchangeError::InvalidJson("attestation must be a single-key object".into()))?;
        let (service_id, record) = object
            .iter()
            .next()
            .ok_or_else(|| ExchangeError::InvalidJson("attestation object has no entries".into()))?;

        if service_id.eq_ignore_ascii_case("eas") {
            let eas: EasAttestation = serde_json::from_value(record.clone())?;
            Ok(Attestation::Eas(eas))
        } else {
            Ok(Attestation::Unknown(service_id.clone(), record.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_eas() -> EasAttestation {
        EasAttestation {
            network: "base-sepolia".to_string(),
            attestation_uid: "0xabc".to_string(),
            from: "0xattester".to_string(),
            to: "0xrecipient".to_string(),
            schema: EasSchema {
                schema_uid: "0xschema".to_string(),
                name: "PrivateData".to_string(),
            },
        }
    }

    #[test]
    fn round_trips_known_service() {
        let attestation = Attestation::Eas(sample_eas());
        let value = attestation.to_value().unwrap();
        assert!(value.get("eas").is_some());
        let parsed = Attestation::from_value(&value).unwrap();
        assert_eq!(parsed, attestation);
    }

    #[test]
    fn unknown_service_round_trips_verbatim() {
        let value = serde_json::json!({"some-other-service": {"x": 1}});
        let attestation = Attestation::from_value(&value).unwrap();
        assert_eq!(attestation.service_id(), "some-other-service");
        assert_eq!(attestation.to_value().unwrap(), value);
    }
}

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

use chrono::Utc;
use merkle_exchange::MerkleTree;
use proofpack_jws::{JwsEnvelope, JwsEnvelopeBuilder, Signer};

use crate::attestation::Attestation;
use crate::document::{AttestedExchange, TimestampedExchange};
use crate::error::ExchangeError;
use crate::issued_to::IssuedTo;
use crate::nonce::generate_nonce;

/// Content type stamped on a signed attested exchange envelope's header.
pub const ATTESTED_EXCHANGE_CONTENT_TYPE: &str = "application/attested-merkle-exchange+json";
/// Content type stamped on a signed timestamped exchange envelope's header.
pub const TIMESTAMPED_EXCHANGE_CONTENT_TYPE: &str = "application/timestamped-merkle-exchange+json";

/// Service id accepted for a no-network test double; kept in sync with
/// `proofpack_attestation::FAKE_ATTESTATION_SERVICE_ID` but not imported
/// from it, since this crate has no dependency on the attestation layer.
const FAKE_ATTESTATION_SERVICE_ID: &str = "fake-attestation-service";

/// Builds a [`TimestampedExchange`] draft, fluently, then signs it into a
/// [`JwsEnvelope`].
pub struct TimestampedMerkleExchangeBuilder {
    merkle_tree: MerkleTree,
    nonce: Option<String>,
    issued_to: Option<IssuedTo>,
}

impl TimestampedMerkleExchangeBuilder {
    /// Starts a draft from an already-built [`MerkleTree`].
    pub fn from_tree(merkle_tree: MerkleTree) -> Self {
        TimestampedMerkleExchangeBuilder {
            merkle_tree,
            nonce: None,
            issued_to: None,
        }
    }

    /// Attaches a freshly generated nonce.
    pub fn with_nonce(mut self) -> Self {
        self.nonce = Some(generate_nonce());
        self
    }

    /// Records one `issuedTo` entry.
    pub fn with_issued_to(mut self, key: impl Into<String>, value: impl Into<String>) -> Result<Self, ExchangeError> {
        let mut issued_to = self.issued_to.unwrap_or_default();
        issued_to.insert(key, value)?;
        self.issued_to = Some(issued_to);
        Ok(self)
    }

    /// Replaces the whole `issuedTo` map.
    pub fn with_issued_to_map(mut self, issued_to: IssuedTo) -> Self {
        self.issued_to = Some(issued_to);
        self
    }

    /// Records an `issuedTo` email entry.
    pub fn with_issued_to_email(self, address: impl Into<String>) -> Result<Self, ExchangeError> {
        self.with_issued_to(crate::issued_to::EMAIL, address)
    }

    /// Records an `issuedTo` phone entry.
    pub fn with_issued_to_phone(self, number: impl Into<String>) -> Result<Self, ExchangeError> {
        self.with_issued_to(crate::issued_to::PHONE, number)
    }

    /// Records an `issuedTo` Ethereum address entry.
    pub fn with_issued_to_ethereum(self, address: impl Into<String>) -> Result<Self, ExchangeError> {
        self.with_issued_to(crate::issued_to::ETHEREUM, address)
    }

    /// Finalizes the draft into a [`TimestampedExchange`] without signing
    /// it.
    pub fn build_payload(self) -> TimestampedExchange {
        TimestampedExchange {
            merkle_tree: self.merkle_tree,
            timestamp: Utc::now(),
            nonce: self.nonce,
            issued_to: self.issued_to,
        }
    }

    /// Finalizes the draft and signs it with `signers`, one signature per
    /// signer.
    pub fn build_signed(self, signers: &[&dyn Signer]) -> Result<JwsEnvelope, ExchangeError> {
        let payload = self.build_payload();
        let value = payload.to_value()?;
        let envelope = JwsEnvelopeBuilder::new()
            .with_cty(TIMESTAMPED_EXCHANGE_CONTENT_TYPE)
            .build(&value, signers)?;
        Ok(envelope)
    }
}

/// Builds an [`AttestedExchange`] draft, fluently, then signs it into a
/// [`JwsEnvelope`].
pub struct AttestedMerkleExchangeBuilder {
    inner: TimestampedMerkleExchangeBuilder,
    attestation: Option<Attestation>,
}

impl AttestedMerkleExchangeBuilder {
    /// Starts a draft from an already-built [`MerkleTree`].
    pub fn from_tree(merkle_tree: MerkleTree) -> Self {
        AttestedMerkleExchangeBuilder {
            inner: TimestampedMerkleExchangeBuilder::from_tree(merkle_tree),
            attestation: None,
        }
    }

    /// Attaches a freshly generated nonce.
    pub fn with_nonce(mut self) -> Self {
        self.inner = self.inner.with_nonce();
        self
    }

    /// Records one `issuedTo` entry.
    pub fn with_issued_to(mut self, key: impl Into<String>, value: impl Into<String>) -> Result<Self, ExchangeError> {
        self.inner = self.inner.with_issued_to(key, value)?;
        Ok(self)
    }

    /// Attaches the attestation binding this document's root. Required
    /// before [`AttestedMerkleExchangeBuilder::build_payload`] or
    /// [`AttestedMerkleExchangeBuilder::build_signed`] will succeed.
    pub fn with_attestation(mut self, attestation: Attestation) -> Self {
        self.attestation = Some(attestation);
        self
    }

    /// Attaches an EAS attestation, synthesizing `schema.name =
    /// "PrivateData"` so callers only need to supply the schema's UID.
    pub fn with_eas_attestation(
        self,
        network: impl Into<String>,
        attestation_uid: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
        schema_uid: impl Into<String>,
    ) -> Self {
        self.with_attestation(Attestation::Eas(crate::attestation::EasAttestation {
            network: network.into(),
            attestation_uid: attestation_uid.into(),
            from: from.into(),
            to: to.into(),
            schema: crate::attestation::EasSchema {
                schema_uid: schema_uid.into(),
                name: "PrivateData".to_string(),
            },
        }))
    }

    /// Finalizes the draft into an [`AttestedExchange`].
    ///
    /// Fails with [`ExchangeError::AttestationRequired`] if
    /// [`AttestedMerkleExchangeBuilder::with_attestation`] was never
    /// called, or [`ExchangeError::UnsupportedService`] if the attached
    /// attestation's service id isn't one this builder can synthesize
    /// (`"eas"` or `"fake-attestation-service"`).
    pub fn build_payload(self) -> Result<AttestedExchange, ExchangeError> {
        let attestation = self.attestation.ok_or(ExchangeError::AttestationRequired)?;
        let service_id = attestation.service_id().to_ascii_lowercase();
        if service_id != "eas" && service_id != FAKE_ATTESTATION_SERVICE_ID {
            return Err(ExchangeError::UnsupportedService(service_id));
        }
        Ok(AttestedExchange {
            timestamped: self.inner.build_payload(),
            attestation,
        })
    }

    /// Finalizes the draft and signs it with `signers`, one signature per
    /// signer.
    pub fn build_signed(self, signers: &[&dyn Signer]) -> Result<JwsEnvelope, ExchangeError> {
        let payload = self.build_payload()?;
        let value = payload.to_value()?;
        let envelope = JwsEnvelopeBuilder::new()
            .with_cty(ATTESTED_EXCHANGE_CONTENT_TYPE)
            .build(&value, signers)?;
        Ok(envelope)
    }
}

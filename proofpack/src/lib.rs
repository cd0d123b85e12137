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

#![deny(
    unsafe_code,
    dead_code,
    missing_docs,
    unused_variables,
    unused_mut,
    unused_imports,
    non_upper_case_globals,
    non_camel_case_types,
    non_snake_case
)]

//! ProofPack: verifiable, privacy-preserving data exchange.
//!
//! A ProofPack document is a salted Merkle-like hash set ([`merkle_exchange`])
//! carrying selectively disclosable data, wrapped in a JWS envelope
//! ([`proofpack_jws`]) signed by one or more keys ([`proofpack_crypto`]),
//! and optionally bound to an external attestation
//! ([`proofpack_attestation`]) that some third party vouches for its root.
//! [`proofpack_exchange`] assembles the payload shapes and builders;
//! this crate's [`AttestedMerkleExchangeReader`] runs the full verification
//! pipeline end to end.

mod context;
mod error;
mod reader;

pub use context::{AcceptAllNonces, JwsVerifierResolver, NonceGuard, SignatureRequirement, VerificationContext};
pub use error::{BuildError, ReadError};
pub use reader::{AttestedMerkleExchangeReader, VerificationOutcome};

pub use merkle_exchange::{Conceal, Leaf, MerkleError, MerkleTree};
pub use proofpack_attestation::{
    AttestationError, AttestationResult, AttestationVerifier, AttestationVerifierFactory,
    FakeAttestationVerifier, ServiceId, FAKE_ATTESTATION_SERVICE_ID,
};
pub use proofpack_crypto::{CryptoError, Es256kSigner, Es256kVerifier, EthAddress, Rs256Signer, Rs256Verifier};
pub use proofpack_exchange::{
    generate_nonce, Attestation, AttestationLocator, AttestedExchange, AttestedMerkleExchangeBuilder, EasAttestation,
    EasSchema, ExchangeError, IssuedTo, TimestampedExchange, TimestampedMerkleExchangeBuilder,
    ATTESTED_EXCHANGE_CONTENT_TYPE, EMAIL, ETHEREUM, PHONE, TIMESTAMPED_EXCHANGE_CONTENT_TYPE,
};
pub use proofpack_jws::{
    JwsEnvelope, JwsEnvelopeBuilder, JwsError, JwsHeader, JwsSignature, SignOutput, Signer, Verifier,
};

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

//! Timestamped and attested Merkle exchange documents: the payload types
//! that ride inside a [`proofpack_jws::JwsEnvelope`], and the fluent
//! builders that assemble and sign them.

mod attestation;
mod builder;
mod document;
mod error;
mod issued_to;
mod nonce;

pub use attestation::{Attestation, AttestationLocator, EasAttestation, EasSchema};
pub use builder::{
    AttestedMerkleExchangeBuilder, TimestampedMerkleExchangeBuilder, ATTESTED_EXCHANGE_CONTENT_TYPE,
    TIMESTAMPED_EXCHANGE_CONTENT_TYPE,
};
pub use document::{AttestedExchange, TimestampedExchange};
pub use error::ExchangeError;
pub use issued_to::{IssuedTo, EMAIL, ETHEREUM, PHONE};
pub use nonce::generate_nonce;

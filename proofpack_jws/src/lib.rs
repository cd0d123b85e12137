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

//! JWS General Serialization envelopes over a detached, canonically-encoded
//! payload: building (one signature per signer) and reading (non-short-
//! circuiting, count-reporting verification).

mod builder;
mod capability;
mod envelope;
mod error;
mod header;
mod reader;
mod signature;

pub use builder::JwsEnvelopeBuilder;
pub use capability::{SignOutput, Signer, Verifier};
pub use envelope::JwsEnvelope;
pub use error::JwsError;
pub use header::JwsHeader;
pub use reader::{JwsEnvelopeReader, ParsedEnvelope, VerifyOutcome};
pub use signature::{JwsSignature, JwsToken};

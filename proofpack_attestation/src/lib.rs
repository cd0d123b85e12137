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

//! A pluggable attestation verification capability, keyed by service id,
//! plus a deterministic test double for downstream integrators.

mod error;
mod fake;
mod service_id;
mod verifier;

pub use error::AttestationError;
pub use fake::{FakeAttestationVerifier, FAKE_ATTESTATION_SERVICE_ID};
pub use service_id::ServiceId;
pub use verifier::{AttestationResult, AttestationVerifier, AttestationVerifierFactory};

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

use amplify::{Display, Error, From};

/// Errors produced by the attestation verification framework.
#[derive(Debug, Display, Error, From)]
#[display(doc_comments)]
pub enum AttestationError {
    /// no attestation verifier is registered for service `{0}`.
    ServiceUnsupported(String),

    /// attestation payload is malformed: {0}
    InvalidAttestation(String),
}

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

/// Errors raised while building a signed exchange envelope.
///
/// Aggregates the lower-level crates' errors behind one type for callers
/// who compose a build out of `merkle_exchange`, `proofpack_jws` and
/// `proofpack_exchange` pieces without wanting to match on each crate's
/// own enum.
#[derive(Debug, Display, Error, From)]
#[display(doc_comments)]
pub enum BuildError {
    /// merkle exchange document error: {0}
    #[from]
    Merkle(merkle_exchange::MerkleError),

    /// JWS envelope error: {0}
    #[from]
    Jws(proofpack_jws::JwsError),

    /// exchange document error: {0}
    #[from]
    Exchange(proofpack_exchange::ExchangeError),
}

/// Errors raised *before* [`crate::AttestedMerkleExchangeReader::read`]
/// attempts a verification, i.e. programmer errors in how a
/// [`crate::VerificationContext`] was assembled.
///
/// A malformed or unverifiable envelope is never an `Err` here — that is
/// reported through [`crate::VerificationOutcome`] instead, since it is
/// the expected, data-dependent outcome of checking untrusted input.
#[derive(Debug, Display, Error, From)]
#[display(doc_comments)]
pub enum ReadError {
    /// no attestation verifiers were registered in this `VerificationContext`.
    NoAttestationVerifiers,
}

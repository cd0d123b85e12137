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

/// Errors produced by the RS256 and ES256K signing/verification
/// capabilities.
#[derive(Debug, Display, Error, From)]
#[display(doc_comments)]
pub enum CryptoError {
    /// RSA key rejected the operation: {0}
    Rsa(String),

    /// secp256k1 key or signature rejected the operation: {0}
    Secp256k1(String),

    /// signature has the wrong length for this algorithm: expected {expected}, got {actual}
    WrongSignatureLength { expected: usize, actual: usize },

    /// `{0}` is not a valid hex-encoded Ethereum address.
    InvalidAddress(String),

    /// JWS envelope error: {0}
    #[from]
    Jws(proofpack_jws::JwsError),
}

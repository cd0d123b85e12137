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

use crate::signature::JwsSignature;

/// A JWS envelope in General Serialization: one shared, base64url-encoded
/// payload and an array of detached signatures over it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JwsEnvelope {
    /// Base64url(UTF-8(JSON(payload))).
    pub payload: String,
    /// One entry per signer.
    pub signatures: Vec<JwsSignature>,
}

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

use amplify::{From, Wrapper};

/// A service identifier (e.g. `"eas"`, `"fake-attestation-service"`),
/// compared and looked up case-insensitively.
///
/// Construction lowercases the input once, so every subsequent comparison
/// is a plain string equality.
#[derive(Wrapper, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, From)]
#[wrapper(Deref)]
pub struct ServiceId(String);

impl ServiceId {
    /// Normalizes `id` to lowercase.
    pub fn new(id: impl AsRef<str>) -> Self { ServiceId(id.as_ref().to_lowercase()) }

    /// Borrows the normalized id.
    pub fn as_str(&self) -> &str { &self.0 }
}

impl std::fmt::Display for ServiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0) }
}

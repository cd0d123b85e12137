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

//! Unpadded base64url codec (RFC 4648 §5) for bytes and UTF-8 strings.
//!
//! This is the only place in the workspace that should touch a base64
//! alphabet directly; every other crate calls through here so that the
//! encoding rules (no padding, reject stray characters) stay in one spot.

use amplify::{Display, Error};

const ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Failure to decode a base64url string.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Display, Error)]
#[display(doc_comments)]
pub enum DecodeError {
    /// input contains a byte outside of the base64url alphabet.
    InvalidAlphabet,

    /// input has an invalid length for base64url decoding.
    InvalidLength,

    /// decoded bytes are not valid UTF-8.
    InvalidUtf8,
}

/// Encodes `bytes` as unpadded base64url.
pub fn encode_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity((bytes.len() * 4).div_ceil(3));
    for chunk in bytes.chunks(3) {
        let b0 = chunk[0];
        let b1 = chunk.get(1).copied();
        let b2 = chunk.get(2).copied();

        let n = (b0 as u32) << 16 | (b1.unwrap_or(0) as u32) << 8 | (b2.unwrap_or(0) as u32);

        out.push(ALPHABET[(n >> 18 & 0x3F) as usize] as char);
        out.push(ALPHABET[(n >> 12 & 0x3F) as usize] as char);
        if b1.is_some() {
            out.push(ALPHABET[(n >> 6 & 0x3F) as usize] as char);
        }
        if b2.is_some() {
            out.push(ALPHABET[(n & 0x3F) as usize] as char);
        }
    }
    out
}

/// Encodes a UTF-8 string as unpadded base64url of its bytes.
pub fn encode_utf8(text: &str) -> String { encode_bytes(text.as_bytes()) }

/// Decodes an unpadded (or padded, tolerated) base64url string to bytes.
pub fn decode_to_bytes(input: &str) -> Result<Vec<u8>, DecodeError> {
    let trimmed = input.trim_end_matches('=');

    let mut values = Vec::with_capacity(trimmed.len());
    for byte in trimmed.bytes() {
        let value = match byte {
            b'A'..=b'Z' => byte - b'A',
            b'a'..=b'z' => byte - b'a' + 26,
            b'0'..=b'9' => byte - b'0' + 52,
            b'-' => 62,
            b'_' => 63,
            _ => return Err(DecodeError::InvalidAlphabet),
        };
        values.push(value);
    }

    if values.len() % 4 == 1 {
        return Err(DecodeError::InvalidLength);
    }

    let mut out = Vec::with_capacity(values.len() * 3 / 4);
    for chunk in values.chunks(4) {
        let n = (chunk[0] as u32) << 18
            | (*chunk.get(1).unwrap_or(&0) as u32) << 12
            | (*chunk.get(2).unwrap_or(&0) as u32) << 6
            | (*chunk.get(3).unwrap_or(&0) as u32);

        out.push((n >> 16) as u8);
        if chunk.len() > 2 {
            out.push((n >> 8) as u8);
        }
        if chunk.len() > 3 {
            out.push(n as u8);
        }
    }

    Ok(out)
}

/// Decodes an unpadded base64url string into a UTF-8 string.
pub fn decode_to_utf8(input: &str) -> Result<String, DecodeError> {
    let bytes = decode_to_bytes(input)?;
    String::from_utf8(bytes).map_err(|_| DecodeError::InvalidUtf8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_bytes_of_every_remainder_length() {
        for len in 0..=8 {
            let data: Vec<u8> = (0..len as u8).collect();
            let encoded = encode_bytes(&data);
            assert!(!encoded.contains('='));
            assert_eq!(decode_to_bytes(&encoded).unwrap(), data);
        }
    }

    #[test]
    fn round_trips_utf8() {
        let text = "hello, 世界";
        let encoded = encode_utf8(text);
        assert_eq!(decode_to_utf8(&encoded).unwrap(), text);
    }

    #[test]
    fn decoding_tolerates_missing_padding() {
        // "f" -> "Zg==" padded, "Zg" unpadded.
        assert_eq!(decode_to_bytes("Zg").unwrap(), b"f");
    }

    #[test]
    fn decoding_accepts_stray_padding_but_rejects_bad_alphabet() {
        assert_eq!(decode_to_bytes("Zg==").unwrap(), b"f");
        assert!(matches!(
            decode_to_bytes("Zg@@"),
            Err(DecodeError::InvalidAlphabet)
        ));
    }

    #[test]
    fn rejects_invalid_length() {
        assert!(matches!(decode_to_bytes("A"), Err(DecodeError::InvalidLength)));
    }
}

//! Golden test vectors for deterministic verification.
//!
//! Hash vectors are published reference outputs, written as the hex of the
//! output bytes in the order the algorithm emits them (see
//! `Digest::to_wire_hex`).

use datum_crypto::algorithms;
use datum_encoding::{base58, hex, LetterCase};

/// A hash algorithm with a golden vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Sha2_224,
    Sha2_256,
    Sha2_384,
    Sha2_512,
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
    Ripemd128,
    Ripemd160,
    Ripemd256,
    Ripemd320,
    Bitcoin160,
    Bitcoin256,
}

impl Algorithm {
    /// Output width in bytes.
    pub fn size(self) -> usize {
        match self {
            Self::Ripemd128 => 16,
            Self::Ripemd160 | Self::Bitcoin160 => 20,
            Self::Sha2_224 | Self::Sha3_224 => 28,
            Self::Sha2_256 | Self::Sha3_256 | Self::Ripemd256 | Self::Bitcoin256 => 32,
            Self::Ripemd320 => 40,
            Self::Sha2_384 | Self::Sha3_384 => 48,
            Self::Sha2_512 | Self::Sha3_512 => 64,
        }
    }

    /// Hash `input` and render the output bytes in storage order.
    pub fn wire_hex(self, input: &[u8]) -> String {
        match self {
            Self::Sha2_224 => algorithms::sha2_224(input).to_wire_hex(),
            Self::Sha2_256 => algorithms::sha2_256(input).to_wire_hex(),
            Self::Sha2_384 => algorithms::sha2_384(input).to_wire_hex(),
            Self::Sha2_512 => algorithms::sha2_512(input).to_wire_hex(),
            Self::Sha3_224 => algorithms::sha3_224(input).to_wire_hex(),
            Self::Sha3_256 => algorithms::sha3_256(input).to_wire_hex(),
            Self::Sha3_384 => algorithms::sha3_384(input).to_wire_hex(),
            Self::Sha3_512 => algorithms::sha3_512(input).to_wire_hex(),
            Self::Ripemd128 => algorithms::ripemd_128(input).to_wire_hex(),
            Self::Ripemd160 => algorithms::ripemd_160(input).to_wire_hex(),
            Self::Ripemd256 => algorithms::ripemd_256(input).to_wire_hex(),
            Self::Ripemd320 => algorithms::ripemd_320(input).to_wire_hex(),
            Self::Bitcoin160 => algorithms::bitcoin_160(input).to_wire_hex(),
            Self::Bitcoin256 => algorithms::bitcoin_256(input).to_wire_hex(),
        }
    }
}

/// A golden hash vector.
#[derive(Debug, Clone)]
pub struct HashVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    pub algorithm: Algorithm,
    pub input: &'static [u8],
    /// Expected output bytes as lowercase hex.
    pub expected: &'static str,
}

/// A golden byte-string encoding vector.
#[derive(Debug, Clone)]
pub struct CodecVector {
    pub name: &'static str,
    pub bytes: &'static [u8],
    /// Uppercase hex of `bytes`.
    pub hex: &'static str,
    /// Base58 of `bytes` read as a big-endian natural.
    pub base58: &'static str,
}

/// Get all golden hash vectors.
pub fn hash_vectors() -> Vec<HashVector> {
    use Algorithm::*;

    vec![
        HashVector {
            name: "SHA-224 empty",
            algorithm: Sha2_224,
            input: b"",
            expected: "d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f",
        },
        HashVector {
            name: "SHA-224 abc",
            algorithm: Sha2_224,
            input: b"abc",
            expected: "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7",
        },
        HashVector {
            name: "SHA-256 empty",
            algorithm: Sha2_256,
            input: b"",
            expected: "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
        },
        HashVector {
            name: "SHA-256 abc",
            algorithm: Sha2_256,
            input: b"abc",
            expected: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
        },
        HashVector {
            name: "SHA-384 empty",
            algorithm: Sha2_384,
            input: b"",
            expected: "38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da\
                       274edebfe76f65fbd51ad2f14898b95b",
        },
        HashVector {
            name: "SHA-384 abc",
            algorithm: Sha2_384,
            input: b"abc",
            expected: "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed\
                       8086072ba1e7cc2358baeca134c825a7",
        },
        HashVector {
            name: "SHA-512 empty",
            algorithm: Sha2_512,
            input: b"",
            expected: "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
                       47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e",
        },
        HashVector {
            name: "SHA-512 abc",
            algorithm: Sha2_512,
            input: b"abc",
            expected: "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
                       2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
        },
        HashVector {
            name: "SHA3-224 empty",
            algorithm: Sha3_224,
            input: b"",
            expected: "6b4e03423667dbb73b6e15454f0eb1abd4597f9a1b078e3f5b5a6bc7",
        },
        HashVector {
            name: "SHA3-224 abc",
            algorithm: Sha3_224,
            input: b"abc",
            expected: "e642824c3f8cf24ad09234ee7d3c766fc9a3a5168d0c94ad73b46fdf",
        },
        HashVector {
            name: "SHA3-256 empty",
            algorithm: Sha3_256,
            input: b"",
            expected: "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a",
        },
        HashVector {
            name: "SHA3-256 abc",
            algorithm: Sha3_256,
            input: b"abc",
            expected: "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532",
        },
        HashVector {
            name: "SHA3-384 empty",
            algorithm: Sha3_384,
            input: b"",
            expected: "0c63a75b845e4f7d01107d852e4c2485c51a50aaaa94fc61995e71bbee983a2a\
                       c3713831264adb47fb6bd1e058d5f004",
        },
        HashVector {
            name: "SHA3-384 abc",
            algorithm: Sha3_384,
            input: b"abc",
            expected: "ec01498288516fc926459f58e2c6ad8df9b473cb0fc08c2596da7cf0e49be4b2\
                       98d88cea927ac7f539f1edf228376d25",
        },
        HashVector {
            name: "SHA3-512 empty",
            algorithm: Sha3_512,
            input: b"",
            expected: "a69f73cca23a9ac5c8b567dc185a756e97c982164fe25859e0d1dcc1475c80a6\
                       15b2123af1f5f94c11e3e9402c3ac558f500199d95b6d3e301758586281dcd26",
        },
        HashVector {
            name: "SHA3-512 abc",
            algorithm: Sha3_512,
            input: b"abc",
            expected: "b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e\
                       10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eec53f0",
        },
        HashVector {
            name: "RIPEMD-128 empty",
            algorithm: Ripemd128,
            input: b"",
            expected: "cdf26213a150dc3ecb610f18f6b38b46",
        },
        HashVector {
            name: "RIPEMD-128 abc",
            algorithm: Ripemd128,
            input: b"abc",
            expected: "c14a12199c66e4ba84636b0f69144c77",
        },
        HashVector {
            name: "RIPEMD-160 empty",
            algorithm: Ripemd160,
            input: b"",
            expected: "9c1185a5c5e9fc54612808977ee8f548b2258d31",
        },
        HashVector {
            name: "RIPEMD-160 abc",
            algorithm: Ripemd160,
            input: b"abc",
            expected: "8eb208f7e05d987a9b044a8e98c6b087f15a0bfc",
        },
        HashVector {
            name: "RIPEMD-256 empty",
            algorithm: Ripemd256,
            input: b"",
            expected: "02ba4c4e5f8ecd1877fc52d64d30e37a2d9774fb1e5d026380ae0168e3c5522d",
        },
        HashVector {
            name: "RIPEMD-320 empty",
            algorithm: Ripemd320,
            input: b"",
            expected: "22d65d5661536cdc75c1fdf5c6de7b41b9f27325ebc61e8557177d705a0ec880\
                       151c3a32a00899b8",
        },
        HashVector {
            name: "Bitcoin160 empty",
            algorithm: Bitcoin160,
            input: b"",
            expected: "b472a266d0bd89c13706a4132ccfb16f7c3b9fcb",
        },
        HashVector {
            name: "Bitcoin160 abc",
            algorithm: Bitcoin160,
            input: b"abc",
            expected: "bb1be98c142444d7a56aa3981c3942a978e4dc33",
        },
        HashVector {
            name: "Bitcoin256 empty",
            algorithm: Bitcoin256,
            input: b"",
            expected: "5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456",
        },
        HashVector {
            name: "Bitcoin256 abc",
            algorithm: Bitcoin256,
            input: b"abc",
            expected: "4f8b42c22dd3729b519ba6f68d2da7cc5b2d606d05daed5ad5128cc03e6c6358",
        },
    ]
}

/// Get all golden codec vectors.
pub fn codec_vectors() -> Vec<CodecVector> {
    vec![
        CodecVector {
            name: "single zero byte",
            bytes: &[0x00],
            hex: "00",
            base58: "1",
        },
        CodecVector {
            name: "deadbeef",
            bytes: &[0xde, 0xad, 0xbe, 0xef],
            hex: "DEADBEEF",
            base58: "6h8cQN",
        },
        CodecVector {
            name: "leading zeros carry no value",
            bytes: &[0x00, 0x00, 0x28, 0x7f, 0xb4, 0xcd],
            hex: "0000287FB4CD",
            base58: "233QC4",
        },
        CodecVector {
            name: "Hello World!",
            bytes: b"Hello World!",
            hex: "48656C6C6F20576F726C6421",
            base58: "2NEpo7TZRRrLZSi2U",
        },
    ]
}

/// Verify all golden hash vectors.
///
/// Returns `(name, matches, actual)` for every vector.
pub fn verify_hash_vectors() -> Vec<(String, bool, String)> {
    hash_vectors()
        .iter()
        .map(|v| {
            let actual = v.algorithm.wire_hex(v.input);
            (v.name.to_string(), actual == v.expected, actual)
        })
        .collect()
}

/// Verify all golden codec vectors in both directions.
pub fn verify_codec_vectors() -> Vec<(String, bool)> {
    codec_vectors()
        .iter()
        .map(|v| {
            let encoded = hex::encode(v.bytes, LetterCase::Upper) == v.hex
                && base58::encode(v.bytes) == v.base58;
            let decoded = hex::decode(v.hex).as_deref() == Ok(v.bytes)
                && base58::decode(v.base58).map(|b| trim_leading_zeros(&b))
                    == Ok(trim_leading_zeros(v.bytes));
            (v.name.to_string(), encoded && decoded)
        })
        .collect()
}

/// Base58 keeps the value of the bytes, not their count.
fn trim_leading_zeros(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().skip_while(|&&b| b == 0).copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_lengths_match_algorithm() {
        for v in hash_vectors() {
            assert_eq!(
                v.expected.len(),
                v.algorithm.size() * 2,
                "vector '{}' has the wrong width",
                v.name
            );
        }
    }

    #[test]
    fn test_vector_names_unique() {
        let mut names: Vec<_> = hash_vectors().iter().map(|v| v.name).collect();
        names.extend(codec_vectors().iter().map(|v| v.name));
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_every_algorithm_has_an_empty_input_vector() {
        use Algorithm::*;

        for algorithm in [
            Sha2_224, Sha2_256, Sha2_384, Sha2_512, Sha3_224, Sha3_256, Sha3_384, Sha3_512,
            Ripemd128, Ripemd160, Ripemd256, Ripemd320, Bitcoin160, Bitcoin256,
        ] {
            assert!(
                hash_vectors()
                    .iter()
                    .any(|v| v.algorithm == algorithm && v.input.is_empty()),
                "{algorithm:?} has no empty-input vector"
            );
        }
    }

    #[test]
    fn test_trim_leading_zeros() {
        assert_eq!(trim_leading_zeros(&[0, 0, 1, 0]), vec![1, 0]);
        assert!(trim_leading_zeros(&[0, 0]).is_empty());
    }
}

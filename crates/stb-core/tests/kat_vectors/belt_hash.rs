//! STB 34.101.31 belt-compress and belt-hash vectors (Appendix A).

use stb_core::belt::H;
use stb_core::hash::{belt_compress, hash, BeltHash};

use super::unhex_array;

/// Table A.8: belt-compress of the first 64 octets of `H`.
#[test]
fn table_a8_compress() {
    let mut x = [0u8; 64];
    x.copy_from_slice(&H[..64]);
    let (s, y) = belt_compress(&x);
    assert_eq!(s, unhex_array::<16>("46FE7425C9B181EB41DFEE3E72163D5A"));
    assert_eq!(
        y,
        unhex_array::<32>("ED2F5481D593F40D87FCE37D6BC1A2E1B7D1A2CC975C82D3C0497488C90D99D8")
    );
}

/// Table A.23, first example: 13-octet message.
#[test]
fn table_a23_13_octets() {
    assert_eq!(
        hash(&H[..13]).as_bytes(),
        &unhex_array::<32>("ABEF9725D4C5A83597A367D14494CC2542F20F659DDFECC961A3EC550CBA8C75")
    );
}

/// Table A.23, second example: one full 32-octet block.
#[test]
fn table_a23_32_octets() {
    assert_eq!(
        hash(&H[..32]).as_bytes(),
        &unhex_array::<32>("749E4C3653AECE5E48DB4761227742EB6DBE13F4A80F7BEFF1A9CF8D10EE7786")
    );
}

/// Table A.23, third example: a block and a half.
#[test]
fn table_a23_48_octets() {
    assert_eq!(
        hash(&H[..48]).as_bytes(),
        &unhex_array::<32>("9D02EE446FB6A29FE5C982D4B13AF9D3E90861BC4CEF27CF306BFB0B174A154A")
    );
}

/// The streaming interface reproduces the vectors for every split point.
#[test]
fn table_a23_every_split() {
    let expected = hash(&H[..48]);
    for split in 0..=48 {
        let mut state = BeltHash::new();
        state.update(&H[..split]);
        state.update(&H[split..48]);
        assert_eq!(state.finalize(), expected, "split at {split}");
    }
}

#[test]
fn digest_display_is_lowercase_hex() {
    insta::assert_snapshot!(
        hash(&H[..13]),
        @"abef9725d4c5a83597a367d14494cc2542f20f659ddfecc961a3ec550cba8c75"
    );
}

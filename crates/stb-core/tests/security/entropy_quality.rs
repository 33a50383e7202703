//! Shannon entropy of the generator output.
//!
//! Uniform bytes approach 8 bits per byte; for 64 KiB the expected value is
//! about 7.997. The threshold catches degenerate output (stuck counter,
//! repeated blocks) without flagging natural variance.

use stb_core::prng::StbPrng;

#[allow(clippy::cast_precision_loss)]
fn shannon_entropy(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let mut freq = [0u64; 256];
    for &b in data {
        freq[usize::from(b)] = freq[usize::from(b)].saturating_add(1);
    }
    let len = data.len() as f64;
    freq.iter()
        .filter(|&&f| f > 0)
        .map(|&f| {
            let p = f as f64 / len;
            -p * p.log2()
        })
        .sum()
}

#[test]
fn zero_seed_stream_64kb_entropy() {
    let mut out = vec![0u8; 64 * 1024];
    StbPrng::start(None).step_r(&mut out);
    let h = shannon_entropy(&out);
    assert!(h > 7.99, "entropy {h:.4} bits/byte below 7.99");
}

#[test]
fn blocks_do_not_repeat() {
    let mut out = vec![0u8; 32 * 256];
    StbPrng::start(Some(b"blocks")).step_r(&mut out);
    let mut blocks: Vec<&[u8]> = out.chunks(32).collect();
    blocks.sort_unstable();
    blocks.dedup();
    assert_eq!(blocks.len(), 256);
}

#[test]
fn entropy_helper_sanity() {
    assert!(shannon_entropy(&[0u8; 1024]).abs() < f64::EPSILON);
    let all: Vec<u8> = (0..=255).collect();
    assert!((shannon_entropy(&all) - 8.0).abs() < 1e-9);
}

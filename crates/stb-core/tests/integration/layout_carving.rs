//! Carving caller scratch with `Layout` and `split_words`.

use stb_core::error::CoreError;
use stb_core::layout::{split_words, Align, Layout};
use stb_core::word::{Word, WORD_BYTES};

#[test]
fn byte_only_layout_is_packed() {
    let layout = Layout::new([(3, Align::Byte), (5, Align::Byte)]);
    assert_eq!(layout.total(), Some(8));
    let mut region = [0u8; 8];
    let [a, b] = layout.carve(&mut region).expect("exact region should fit");
    assert_eq!((a.len(), b.len()), (3, 5));
}

#[test]
fn word_parts_are_aligned_at_any_offset() {
    let layout = Layout::new([(3, Align::Byte), (2 * WORD_BYTES, Align::Word), (1, Align::Byte)]);
    let total = layout.total().expect("no overflow");
    let mut backing = vec![0u8; total + WORD_BYTES];
    for shift in 0..WORD_BYTES {
        let region = &mut backing[shift..shift + total];
        let [head, words, tail] = layout.carve(region).expect("total should always suffice");
        assert_eq!(head.len(), 3);
        assert_eq!(words.len(), 2 * WORD_BYTES);
        assert_eq!(tail.len(), 1);
        assert_eq!(words.as_ptr() as usize % WORD_BYTES, 0, "shift {shift}");
    }
}

#[test]
fn short_region_reports_sizes() {
    let layout = Layout::new([(16, Align::Byte), (16, Align::Byte)]);
    let mut region = [0u8; 20];
    let err = layout.carve(&mut region).expect_err("20 < 32");
    assert_eq!(
        err,
        CoreError::ScratchTooSmall {
            needed: 32,
            available: 20
        }
    );
}

#[test]
fn overflowing_sizes_are_detected() {
    let layout = Layout::new([(usize::MAX, Align::Byte), (1, Align::Byte)]);
    assert_eq!(layout.total(), None);
    let mut region = [0u8; 1];
    assert_eq!(layout.carve(&mut region), Err(CoreError::LayoutOverflow));
}

#[test]
fn split_words_hands_out_the_rest() {
    let mut stack = [0 as Word; 10];
    let ([a, b], rest) = split_words(&mut stack, [3, 4]);
    a.fill(1);
    b.fill(2);
    rest.fill(3);
    assert_eq!(stack, [1, 1, 1, 2, 2, 2, 2, 3, 3, 3]);
}

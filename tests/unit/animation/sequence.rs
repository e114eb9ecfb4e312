use proptest::prelude::*;

use super::*;

#[test]
fn start_32_matches_reference_walk() {
    let seq = RevealSequence::from_start_block(32);
    assert_eq!(seq.blocks(), &[32, 24, 18, 14, 11, 8, 6, 5, 4, 3, 2, 1]);
    assert_eq!(seq.len(), 12);
    assert_eq!(seq.last_index(), 11);
}

#[test]
fn small_starts() {
    assert_eq!(RevealSequence::from_start_block(0).blocks(), &[1]);
    assert_eq!(RevealSequence::from_start_block(1).blocks(), &[1]);
    assert_eq!(RevealSequence::from_start_block(2).blocks(), &[2, 1]);
    assert_eq!(RevealSequence::from_start_block(3).blocks(), &[3, 2, 1]);
}

#[test]
fn block_at_clamps_past_the_end() {
    let seq = RevealSequence::from_start_block(4);
    assert_eq!(seq.blocks(), &[4, 3, 2, 1]);
    assert_eq!(seq.block_at(0), 4);
    assert_eq!(seq.block_at(3), 1);
    assert_eq!(seq.block_at(99), 1);
}

proptest! {
    #[test]
    fn strictly_decreasing_with_single_trailing_one(start in 1u32..5000) {
        let seq = RevealSequence::from_start_block(start);
        let blocks = seq.blocks();
        prop_assert_eq!(blocks[0], start);
        prop_assert_eq!(*blocks.last().unwrap(), 1);
        prop_assert!(blocks.iter().all(|&b| b >= 1));
        for pair in blocks.windows(2) {
            prop_assert!(pair[1] < pair[0]);
        }
        prop_assert_eq!(blocks.iter().filter(|&&b| b == 1).count(), 1);
    }
}

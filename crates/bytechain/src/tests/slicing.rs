use alloc::vec;
use alloc::vec::Vec;

use rstest::rstest;

use crate::{
    ByteChain, Chunk,
    chunk_utils::chain_of,
    tests::utils::{TEN_BYTE_SPLITS, ten_bytes},
};

#[rstest]
#[case(&[4, 2, 3, 1])]
#[case(&[2, 2, 2, 2, 2])]
#[case(&[1, 6, 3, 1])]
#[case(&[9, 2])]
#[case(&[10])]
#[case(&[5, 5])]
fn every_subrange_round_trips(#[case] splits: &[usize]) {
    let payload = ten_bytes();
    let chain = chain_of(&payload, splits);

    assert_eq!(chain.to_bytes().as_slice(), payload.as_slice());
    for i in 0..=payload.len() {
        for j in i..=payload.len() {
            let got = chain.slice(
                Some(isize::try_from(i).unwrap()),
                Some(isize::try_from(j).unwrap()),
            );
            assert_eq!(
                got.as_slice(),
                &payload[i..j],
                "slice({i}, {j}) over splits {splits:?}"
            );
        }
    }
}

#[test]
fn negative_indices_count_back_from_the_end() {
    let chain = ByteChain::from_chunks([
        Chunk::from(&[0u8, 1, 2][..]),
        Chunk::from(&[3u8, 4, 5][..]),
        Chunk::from(&[6u8, 7, 8][..]),
    ]);

    assert_eq!(chain.slice(Some(2), Some(5)).as_slice(), &[2, 3, 4]);
    assert_eq!(chain.slice(Some(-4), Some(-2)).as_slice(), &[5, 6]);
    assert!(chain.slice(Some(2), Some(2)).is_empty());
    assert!(chain.slice(Some(2), Some(1)).is_empty());
    assert_eq!(chain.slice(Some(-4), None).as_slice(), &[5, 6, 7, 8]);
}

#[test]
fn out_of_range_bounds_clamp_instead_of_failing() {
    let chain = chain_of(&ten_bytes(), &[4, 2, 3, 1]);

    assert_eq!(chain.slice(Some(7), Some(100)).as_slice(), &[7, 8, 9]);
    assert_eq!(chain.slice(Some(-100), Some(3)).as_slice(), &[0, 1, 2]);
    assert!(chain.slice(Some(100), None).is_empty());
    assert!(chain.slice(Some(0), Some(-100)).is_empty());
    assert!(ByteChain::new().slice(None, None).is_empty());
}

#[test]
fn single_chunk_ranges_are_still_independent_copies() {
    let mut chain = chain_of(&ten_bytes(), &[5, 5]);
    let within_first = chain.slice(Some(1), Some(4));
    chain.set(2, 77).unwrap();
    assert_eq!(within_first.as_slice(), &[1, 2, 3]);
}

#[rstest]
#[case(&[4, 2, 3, 1])]
#[case(&[1, 6, 3, 1])]
#[case(&[10])]
fn copy_into_matches_slice(#[case] splits: &[usize]) {
    let payload = ten_bytes();
    let chain = chain_of(&payload, splits);

    let mut dest = [0xffu8; 10];
    assert_eq!(chain.copy_into(&mut dest, 0, None, None), 10);
    assert_eq!(&dest, payload.as_slice());

    let mut dest = [0u8; 8];
    assert_eq!(chain.copy_into(&mut dest, 2, Some(3), Some(7)), 4);
    assert_eq!(&dest, &[0, 0, 3, 4, 5, 6, 0, 0]);
}

#[test]
fn copy_into_truncates_to_the_destination() {
    let chain = chain_of(&ten_bytes(), &[4, 2, 3, 1]);

    let mut dest = [0u8; 3];
    assert_eq!(chain.copy_into(&mut dest, 0, None, None), 3);
    assert_eq!(&dest, &[0, 1, 2]);

    let mut dest = [9u8; 4];
    assert_eq!(chain.copy_into(&mut dest, 4, None, None), 0);
    assert_eq!(&dest, &[9, 9, 9, 9]);
}

#[test]
fn copy_into_with_an_empty_range_writes_nothing() {
    let chain = chain_of(&ten_bytes(), &[5, 5]);
    let mut dest = [1u8; 4];
    assert_eq!(chain.copy_into(&mut dest, 0, Some(4), Some(4)), 0);
    assert_eq!(chain.copy_into(&mut dest, 0, Some(6), Some(2)), 0);
    assert_eq!(&dest, &[1, 1, 1, 1]);
}

#[test]
fn length_stays_the_sum_of_chunk_lengths() {
    let payload = ten_bytes();
    for splits in TEN_BYTE_SPLITS {
        let mut chain = chain_of(&payload, splits);
        chain.push([Chunk::from(&[10u8, 11][..])]);
        chain.unshift([Chunk::from(&[255u8][..])]);
        chain.splice(3, 2, [Chunk::from(&[42u8, 43, 44][..])]);
        chain.splice(-1, 5, Vec::<Chunk>::new());

        let sum: usize = chain.chunks().iter().map(Chunk::len).sum();
        assert_eq!(chain.len(), sum, "splits {splits:?}");
    }
}

#[test]
fn to_bytes_equals_full_slice() {
    let chain = chain_of(&ten_bytes(), &[1, 6, 3, 1]);
    assert_eq!(chain.to_bytes(), chain.slice(None, None));
    assert_eq!(ByteChain::new().to_bytes().len(), 0);

    // Exercise the Extend impl while we're at it.
    let mut chain = ByteChain::new();
    chain.extend(vec![Chunk::from("ab"), Chunk::from("c")]);
    assert_eq!(chain.to_bytes().as_slice(), b"abc");
}

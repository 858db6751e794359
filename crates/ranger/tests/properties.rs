use proptest::prelude::*;
use ranger::Ranger;


fn arb_bounds() -> impl Strategy<Value = (i32, i32)> {
    (-100_000i32..100_000, 1i32..5_000).prop_map(|(begin, span)| (begin, begin + span))
}


#[test]
fn count_is_inclusive_span() {
    proptest!(|((begin, end) in arb_bounds())| {
        let ranger = Ranger::new(begin, end).unwrap();
        prop_assert_eq!(ranger.count() as i64, end as i64 - begin as i64 + 1);
    });
}


#[test]
fn at_agrees_with_arithmetic() {
    proptest!(|((begin, end) in arb_bounds(), index in 0usize..10_000)| {
        let ranger = Ranger::new(begin, end).unwrap();
        if index < ranger.count() {
            prop_assert_eq!(ranger.at(index).unwrap(), begin + index as i32);
        } else {
            prop_assert!(ranger.at(index).is_err());
        }
    });
}


#[test]
fn membership_agrees_with_bounds() {
    proptest!(|((begin, end) in arb_bounds(), value in -200_000i32..200_000)| {
        let ranger = Ranger::new(begin, end).unwrap();
        let contained = begin <= value && value <= end;
        prop_assert_eq!(ranger.contains(value), contained);
        if contained {
            prop_assert_eq!(ranger.index_of(value), value as i64 - begin as i64);
        } else {
            prop_assert_eq!(ranger.index_of(value), -1);
        }
    });
}


#[test]
fn index_of_round_trips_through_at() {
    proptest!(|((begin, end) in arb_bounds())| {
        let ranger = Ranger::new(begin, end).unwrap();
        for value in [begin, end, (begin + end) / 2] {
            let index = ranger.index_of(value);
            prop_assert_eq!(ranger.at(index as usize).unwrap(), value);
        }
    });
}


#[test]
fn copy_into_preserves_prefix_and_suffix() {
    proptest!(|(
        (begin, end) in arb_bounds(),
        offset in 0usize..32,
        extra in 0usize..32
    )| {
        let ranger = Ranger::new(begin, end).unwrap();
        let mut dst = vec![i32::MIN; offset + ranger.count() + extra];
        ranger.copy_into(&mut dst, offset).unwrap();

        for slot in &dst[..offset] {
            prop_assert_eq!(*slot, i32::MIN);
        }
        for (i, slot) in dst[offset..offset + ranger.count()].iter().enumerate() {
            prop_assert_eq!(*slot, begin + i as i32);
        }
        for slot in &dst[offset + ranger.count()..] {
            prop_assert_eq!(*slot, i32::MIN);
        }
    });
}


#[test]
fn copy_into_fails_whole_when_short_on_space() {
    proptest!(|((begin, end) in arb_bounds(), offset in 1usize..16)| {
        let ranger = Ranger::new(begin, end).unwrap();
        // exactly count() slots shifted by a non-zero offset is always short
        let mut dst = vec![7; ranger.count()];
        prop_assert!(ranger.copy_into(&mut dst, offset).is_err());
        prop_assert!(dst.iter().all(|v| *v == 7));
    });
}


#[test]
fn iteration_matches_indexing() {
    proptest!(|((begin, end) in arb_bounds())| {
        let ranger = Ranger::new(begin, end).unwrap();
        let mut produced = 0usize;
        for (i, value) in ranger.iter().enumerate() {
            prop_assert_eq!(value, ranger.at(i).unwrap());
            produced += 1;
        }
        prop_assert_eq!(produced, ranger.count());

        // a second pass starts over from begin
        prop_assert_eq!(ranger.iter().next(), Some(begin));
    });
}

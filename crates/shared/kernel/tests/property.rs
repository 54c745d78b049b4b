use erbeds_kernel::prelude::*;
use proptest::prelude::*;

fn records() -> impl Strategy<Value = Vec<HospitalRecord>> {
    proptest::collection::vec(proptest::option::of(-5_i64..40), 0..40).prop_map(|beds| {
        beds.into_iter()
            .enumerate()
            .map(|(i, beds)| HospitalRecord::new(format!("h{i}"), beds, None))
            .collect()
    })
}

proptest! {
    #[test]
    fn sort_is_idempotent(mut list in records()) {
        sort_by_beds_descending(&mut list);
        let once = list.clone();
        sort_by_beds_descending(&mut list);
        prop_assert_eq!(once, list);
    }

    #[test]
    fn sort_orders_reported_counts_before_unreported(mut list in records()) {
        let len = list.len();
        sort_by_beds_descending(&mut list);
        prop_assert_eq!(list.len(), len);

        let first_unknown = list.iter().position(|r| r.available_beds.is_none()).unwrap_or(len);
        prop_assert!(list[first_unknown..].iter().all(|r| r.available_beds.is_none()));
        prop_assert!(list[..first_unknown].windows(2).all(|w| w[0].available_beds >= w[1].available_beds));
    }

    #[test]
    fn classification_agrees_with_thresholds(beds in proptest::option::of(any::<i64>())) {
        let expected = match beds {
            Some(n) if n > 5 => BedStatus::Green,
            Some(n) if n >= 1 => BedStatus::Orange,
            _ => BedStatus::Red,
        };
        prop_assert_eq!(BedStatus::classify(beds), expected);
    }
}

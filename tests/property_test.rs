use dashu::integer::IBig;
use hms_duration::Duration;
use proptest::prelude::*;

fn duration() -> impl Strategy<Value = Duration> {
    any::<i64>().prop_map(|n| Duration::from_seconds(n))
}

proptest! {
    #[test]
    fn prop_seconds_round_trip(n in any::<i64>()) {
        let d = Duration::new(n).unwrap();
        prop_assert_eq!(d.total_seconds(), &IBig::from(n));
    }

    #[test]
    fn prop_text_round_trip(n in any::<i64>()) {
        let d = Duration::from_seconds(n);
        prop_assert!(Duration::is_time_format_valid(d.text()));
        let reparsed = Duration::new(d.text()).unwrap();
        prop_assert_eq!(reparsed.text(), d.text());
    }

    #[test]
    fn prop_difference_undoes_sum(a in duration(), b in duration()) {
        let back = a.sum(&b).unwrap().difference(&b).unwrap();
        prop_assert!(back.is_equal_to(&a).unwrap());
    }

    #[test]
    fn prop_negation_involution(a in duration()) {
        prop_assert_eq!(a.negated().negated(), a);
    }

    #[test]
    fn prop_compare_antisymmetric(a in duration(), b in duration()) {
        prop_assert_eq!(a.compare(&b).unwrap(), b.compare(&a).unwrap().reverse());
        prop_assert!(a.is_equal_to(&a).unwrap());
    }

    #[test]
    fn prop_canonical_text_parses(h in 0u32..1000, m in 0u32..60, s in 0u32..60, neg in any::<bool>()) {
        let text = format!("{}{}:{:02}:{:02}", if neg { "-" } else { "" }, h, m, s);
        let d = Duration::new(text.as_str()).unwrap();
        let total = i64::from(h) * 3600 + i64::from(m) * 60 + i64::from(s);
        let expected = if neg { -total } else { total };
        prop_assert_eq!(d.total_seconds(), &IBig::from(expected));
    }
}

use crate::types::{Amount, AmountCoin, ValueAgeCoin};
use std::cmp::Reverse;

/// Returns whether `total` is either exactly the target or greater than the
/// target by at least `min_change`.
///
/// This is the stopping condition shared by every selection algorithm: a
/// running total that overshoots by less than `min_change` would leave a
/// change amount too small to be economically useful.
#[inline]
pub fn satisfies_target_amount(target: Amount, min_change: Amount, total: Amount) -> bool {
    total == target || total >= target.saturating_add(min_change)
}

/// Sorts the coins in place into descending order of amount.
///
/// Sorting reorders the caller's slice rather than producing a copy, so any
/// previously held positional indices are invalidated.
#[inline]
pub fn sort_by_amount_desc<C: AmountCoin>(coins: &mut [C]) {
    coins.sort_by_key(|coin| Reverse(coin.amount()));
}

/// Sorts the coins in place into descending order of value-age.
#[inline]
pub fn sort_by_value_age_desc<C: ValueAgeCoin>(coins: &mut [C]) {
    coins.sort_by_key(|coin| Reverse(coin.value_age()));
}

/// Sorts the coins in place into ascending order of value-age.
#[inline]
pub fn sort_by_value_age_asc<C: ValueAgeCoin>(coins: &mut [C]) {
    coins.sort_by_key(|coin| coin.value_age());
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::types::SimpleCoin;
    use proptest::prelude::*;

    #[test]
    fn test_satisfies_exact_target() {
        assert!(satisfies_target_amount(700, 100, 700));
    }

    #[test]
    fn test_satisfies_with_enough_change() {
        assert!(satisfies_target_amount(100, 50, 200));
    }

    #[test]
    fn test_rejects_dust_change() {
        // Overshoots by 30, below the 50 minimum change
        assert!(!satisfies_target_amount(100, 50, 130));
    }

    #[test]
    fn test_rejects_total_below_target() {
        assert!(!satisfies_target_amount(300, 0, 200));
    }

    #[test]
    fn test_sort_by_amount_desc() {
        let mut coins = vec![
            SimpleCoin {
                value: 500,
                confirmations: 1,
            },
            SimpleCoin {
                value: 100,
                confirmations: 1,
            },
            SimpleCoin {
                value: 400,
                confirmations: 1,
            },
        ];
        sort_by_amount_desc(&mut coins);
        let amounts: Vec<u64> = coins.iter().map(|c| c.value).collect();
        assert_eq!(amounts, vec![500, 400, 100]);
    }

    #[test]
    fn test_sort_by_value_age_orders() {
        let mut coins = vec![
            SimpleCoin {
                value: 100,
                confirmations: 10,
            },
            SimpleCoin {
                value: 100,
                confirmations: 1,
            },
            SimpleCoin {
                value: 100,
                confirmations: 5,
            },
        ];
        sort_by_value_age_asc(&mut coins);
        let confs: Vec<u64> = coins.iter().map(|c| c.confirmations).collect();
        assert_eq!(confs, vec![1, 5, 10]);

        sort_by_value_age_desc(&mut coins);
        let confs: Vec<u64> = coins.iter().map(|c| c.confirmations).collect();
        assert_eq!(confs, vec![10, 5, 1]);
    }

    proptest! {
        #[test]
        fn prop_satisfies_matches_definition(
            target in 0u64..1_000_000,
            min_change in 0u64..1_000_000,
            total in 0u64..2_000_000,
        ) {
            let expected = total == target || (total >= target && total - target >= min_change);
            prop_assert_eq!(satisfies_target_amount(target, min_change, total), expected);
        }
    }
}

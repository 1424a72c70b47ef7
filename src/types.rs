use thiserror::Error;

/// A coin value in the smallest unit of the currency.
pub type Amount = u64;

/// The product of a coin's value and its confirmation count, used as a
/// transaction priority proxy.
pub type ValueAge = u64;

/// A transaction output with a known amount.
///
/// This is the narrowest capability a coin can offer; selection algorithms
/// that only reason about values (such as fewest-inputs selection) are
/// written against this trait alone.
///
/// A collection of coins is any slice of a capability type: `&[C]` or
/// `&mut [C]` with `C: AmountCoin` (or `C: ValueAgeCoin`) already provides
/// indexed access, `len()` and in-place `swap`, which is everything the
/// selection algorithms require of a coin set.
pub trait AmountCoin {
    /// The value of the coin.
    fn amount(&self) -> Amount;
}

/// A transaction output with a known amount and value-age.
///
/// The value-age of a coin MUST stay constant for the duration of a single
/// selection call. Mutating it mid-call invalidates the cached totals kept
/// by [`Subset`](crate::subset::Subset); this is a documented precondition
/// of the library, not something checked at runtime.
pub trait ValueAgeCoin: AmountCoin {
    /// The value of the coin multiplied by its age in confirmations.
    fn value_age(&self) -> ValueAge;
}

/// A spendable transaction output.
///
/// A full coin is exactly a [`ValueAgeCoin`]; the blanket impl makes every
/// value-age coin usable wherever a full coin is required.
pub trait Coin: ValueAgeCoin {}

impl<T: ValueAgeCoin + ?Sized> Coin for T {}

/// The arguments shared by all selection algorithms when picking previous
/// outputs to spend in a new transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoinSelectionOpt {
    /// The value the selection needs to cover.
    pub target_amount: Amount,

    /// Upper bound on the number of selected inputs.
    pub max_inputs: usize,

    /// Minimum acceptable leftover above the target. A selection either hits
    /// the target exactly or overshoots it by at least this much, so the
    /// change output is never uneconomically small.
    pub min_change_amount: Amount,
}

/// Error describing failure of a selection attempt, on any subset of inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// No combination of coins under the given `max_inputs`, target and
    /// `min_change_amount` constraints satisfies the target predicate. This
    /// is an expected, recoverable outcome; callers typically surface it as
    /// insufficient funds.
    #[error("no coin selection possible")]
    NoSelectionAvailable,

    /// A coin was popped from an empty [`Subset`](crate::subset::Subset).
    /// This is a caller contract violation, never silently tolerated.
    #[error("cannot remove a coin from an empty subset")]
    EmptySubset,
}

/// The result of a selection algorithm.
///
/// `selected_inputs` holds positions in the input slice as ordered when the
/// algorithm returns. The sort-based algorithms reorder the caller's slice
/// in place, so these positions refer to the post-sort order; callers that
/// need the original positions must select over a copy or keep their own
/// permutation mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionOutput {
    /// The selected input indices, refers to the indices of the inputs slice reference.
    pub selected_inputs: Vec<usize>,
    /// The summed amount of the selected inputs.
    pub total_amount: Amount,
}

/// A concrete [`ValueAgeCoin`] backed by a transaction output value and the
/// confirmation count of the containing transaction.
///
/// The library user derives `value` from the referenced output and keeps
/// `confirmations` fixed while a selection call runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimpleCoin {
    /// Value of the referenced transaction output.
    pub value: Amount,
    /// Number of confirmations of the transaction holding the output.
    pub confirmations: u64,
}

impl AmountCoin for SimpleCoin {
    fn amount(&self) -> Amount {
        self.value
    }
}

impl ValueAgeCoin for SimpleCoin {
    fn value_age(&self) -> ValueAge {
        self.confirmations.saturating_mul(self.value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_simple_coin_value_age() {
        let coin = SimpleCoin {
            value: 1000,
            confirmations: 6,
        };
        assert_eq!(coin.amount(), 1000);
        assert_eq!(coin.value_age(), 6000);
    }

    #[test]
    fn test_simple_coin_value_age_saturates() {
        let coin = SimpleCoin {
            value: u64::MAX,
            confirmations: 2,
        };
        assert_eq!(coin.value_age(), u64::MAX);
    }

    #[test]
    fn test_unconfirmed_coin_has_zero_value_age() {
        let coin = SimpleCoin {
            value: 5000,
            confirmations: 0,
        };
        assert_eq!(coin.value_age(), 0);
    }

    #[test]
    fn test_every_value_age_coin_is_a_coin() {
        fn value_age_of<C: Coin>(coin: &C) -> ValueAge {
            coin.value_age()
        }
        let coin = SimpleCoin {
            value: 100,
            confirmations: 3,
        };
        assert_eq!(value_age_of(&coin), 300);
    }
}

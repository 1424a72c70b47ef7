use crate::types::{Amount, SelectionError, ValueAge, ValueAgeCoin};

/// An ordered subset of a coin slice, tracked as indices into the source
/// slice together with cached aggregate totals.
///
/// The totals are maintained incrementally: every push adds the coin's
/// amount and value-age, every pop subtracts them, and a full summation pass
/// only happens at construction. For the cached values to stay correct, all
/// coins of the source slice must keep a constant `value_age()` while the
/// subset is alive.
#[derive(Debug)]
pub struct Subset<'a, C> {
    coins: &'a [C],
    idxs: Vec<usize>,
    total_amount: Amount,
    total_value_age: ValueAge,
}

impl<'a, C: ValueAgeCoin> Subset<'a, C> {
    /// Creates a subset of `coins` referencing the given indices, summing
    /// both totals once over `idxs`.
    pub fn new(coins: &'a [C], idxs: Vec<usize>) -> Self {
        let mut total_amount: Amount = 0;
        let mut total_value_age: ValueAge = 0;
        for &i in &idxs {
            total_amount = total_amount.saturating_add(coins[i].amount());
            total_value_age = total_value_age.saturating_add(coins[i].value_age());
        }
        Subset {
            coins,
            idxs,
            total_amount,
            total_value_age,
        }
    }

    /// Appends the coin at index `i` of the source slice to the end of the
    /// subset and folds its amount and value-age into the cached totals.
    pub fn push_back(&mut self, i: usize) {
        let coin = &self.coins[i];
        self.total_amount = self.total_amount.saturating_add(coin.amount());
        self.total_value_age = self.total_value_age.saturating_add(coin.value_age());
        self.idxs.push(i);
    }

    /// Removes and returns the last coin of the subset.
    ///
    /// Returns `EmptySubset` if the subset holds no coins; the cached totals
    /// are left untouched in that case.
    pub fn pop_back(&mut self) -> Result<&'a C, SelectionError> {
        let i = self.idxs.pop().ok_or(SelectionError::EmptySubset)?;
        let coin = &self.coins[i];
        self.sub_totals(coin);
        Ok(coin)
    }

    /// Removes and returns the first coin of the subset.
    ///
    /// Returns `EmptySubset` if the subset holds no coins; the cached totals
    /// are left untouched in that case.
    pub fn pop_front(&mut self) -> Result<&'a C, SelectionError> {
        if self.idxs.is_empty() {
            return Err(SelectionError::EmptySubset);
        }
        let i = self.idxs.remove(0);
        let coin = &self.coins[i];
        self.sub_totals(coin);
        Ok(coin)
    }

    /// Subtracts a removed coin's contribution from the cached totals.
    fn sub_totals(&mut self, coin: &C) {
        self.total_amount = self.total_amount.saturating_sub(coin.amount());
        self.total_value_age = self.total_value_age.saturating_sub(coin.value_age());
    }

    /// The indices of all source-slice coins currently in the subset, in
    /// subset order.
    pub fn indexes(&self) -> &[usize] {
        &self.idxs
    }

    /// Consumes the subset and returns its index list.
    pub fn into_indexes(self) -> Vec<usize> {
        self.idxs
    }

    /// The cached sum of `amount()` over the referenced coins.
    pub fn total_amount(&self) -> Amount {
        self.total_amount
    }

    /// The cached sum of `value_age()` over the referenced coins.
    pub fn total_value_age(&self) -> ValueAge {
        self.total_value_age
    }

    /// Number of coins currently in the subset.
    pub fn num_coins(&self) -> usize {
        self.idxs.len()
    }

    /// Returns true if no coins are in the subset.
    pub fn is_empty(&self) -> bool {
        self.idxs.is_empty()
    }

    /// Iterates over the referenced coins in subset order, materializing the
    /// selection for callers that want coins rather than indices.
    pub fn coins(&self) -> impl Iterator<Item = &'a C> + '_ {
        let coins = self.coins;
        self.idxs.iter().map(move |&i| &coins[i])
    }
}

use crate::{
    algorithms::minindex::select_coin_min_index,
    types::{AmountCoin, CoinSelectionOpt, SelectionError, SelectionOutput},
    utils::sort_by_amount_desc,
};
use tracing::trace;

/// Performs coin selection using as few inputs as possible.
///
/// The inputs are sorted in place into descending order of amount and then
/// scanned greedily, so the largest coins are consumed first. Picking the
/// largest coins first is a heuristic that keeps the input count low; it is
/// not an optimal subset-sum solution and makes no minimality guarantee
/// beyond its deterministic greedy behavior.
///
/// Returns `NoSelectionAvailable` if no selection satisfies the target.
pub fn select_coin_min_number<C: AmountCoin>(
    inputs: &mut [C],
    options: &CoinSelectionOpt,
) -> Result<SelectionOutput, SelectionError> {
    sort_by_amount_desc(inputs);
    trace!(
        num_inputs = inputs.len(),
        target_amount = options.target_amount,
        "scanning amount-sorted inputs"
    );
    select_coin_min_index(inputs, options)
}

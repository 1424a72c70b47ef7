use crate::{
    algorithms::minindex::select_coin_min_index,
    types::{CoinSelectionOpt, SelectionError, SelectionOutput, ValueAgeCoin},
    utils::sort_by_value_age_desc,
};
use tracing::trace;

/// Performs coin selection preferring the inputs with the most value-age.
///
/// The inputs are sorted in place into descending order of value-age and
/// then scanned greedily, biasing the selection toward coins with the
/// greatest accumulated value times confirmations. In systems that weight
/// transaction priority by input age this raises the chance of favorable
/// processing of the spending transaction.
///
/// Returns `NoSelectionAvailable` if no selection satisfies the target.
pub fn select_coin_max_value_age<C: ValueAgeCoin>(
    inputs: &mut [C],
    options: &CoinSelectionOpt,
) -> Result<SelectionOutput, SelectionError> {
    sort_by_value_age_desc(inputs);
    trace!(
        num_inputs = inputs.len(),
        target_amount = options.target_amount,
        "scanning value-age-sorted inputs"
    );
    select_coin_min_index(inputs, options)
}

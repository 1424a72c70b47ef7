use crate::{
    types::{AmountCoin, CoinSelectionOpt, SelectionError, SelectionOutput},
    utils::satisfies_target_amount,
};

/// Performs coin selection by scanning the inputs in index order.
///
/// Coins are accumulated left to right, up to `max_inputs` of them, and the
/// prefix `[0, i]` is returned the first time the running total either hits
/// the target exactly or overshoots it by at least `min_change_amount`. Lower
/// indices are always preferred over higher ones; this is the common tail of
/// every sort-based policy in this crate, which differ only in how they
/// reorder the inputs before scanning.
///
/// Returns `NoSelectionAvailable` if the scan exhausts the inputs or the
/// input budget without satisfying the target.
pub fn select_coin_min_index<C: AmountCoin>(
    inputs: &[C],
    options: &CoinSelectionOpt,
) -> Result<SelectionOutput, SelectionError> {
    let mut total_amount: u64 = 0;
    let mut selected_inputs: Vec<usize> = Vec::new();

    for (index, coin) in inputs.iter().take(options.max_inputs).enumerate() {
        total_amount = total_amount.saturating_add(coin.amount());
        selected_inputs.push(index);

        if satisfies_target_amount(options.target_amount, options.min_change_amount, total_amount) {
            return Ok(SelectionOutput {
                selected_inputs,
                total_amount,
            });
        }
    }

    Err(SelectionError::NoSelectionAvailable)
}

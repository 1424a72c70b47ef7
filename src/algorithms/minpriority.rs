use crate::{
    algorithms::minnumber::select_coin_min_number,
    subset::Subset,
    types::{Amount, CoinSelectionOpt, SelectionError, SelectionOutput, ValueAge, ValueAgeCoin},
    utils::{satisfies_target_amount, sort_by_value_age_asc},
};
use tracing::trace;

/// Performs coin selection meeting the target amount while keeping the
/// average value-age per input at or above `min_avg_value_age`.
///
/// The inputs are sorted in place into ascending order of value-age and
/// partitioned at the first coin whose value-age reaches the threshold.
/// Growing windows of high-priority coins are tried with fewest-inputs
/// selection; a successful window is then topped up with low-priority coins,
/// lowest value-age first, pulling the average down toward the threshold as
/// long as it does not cross it. A window whose coins cannot cover the
/// target is instead supplemented by recursing over the low-priority region
/// with the residual target and a rebalanced threshold that keeps the
/// combined weighted average at or above the original one.
///
/// When possible the selection spends low-priority coins to reduce the
/// average toward the threshold, but no minimality guarantee is made; this
/// is a best-effort heuristic with an explicit fallback ladder. Each failed
/// supplement attempt is non-fatal, and only exhausting every window and
/// every supplement yields `NoSelectionAvailable`.
pub fn select_coin_min_priority<C: ValueAgeCoin>(
    inputs: &mut [C],
    options: &CoinSelectionOpt,
    min_avg_value_age: ValueAge,
) -> Result<SelectionOutput, SelectionError> {
    sort_by_value_age_asc(inputs);

    let num_coins = inputs.len();

    // Everything before the cutoff is low priority, everything from it on is
    // high priority.
    let cutoff = inputs
        .iter()
        .position(|coin| coin.value_age() >= min_avg_value_age)
        .ok_or(SelectionError::NoSelectionAvailable)?;
    trace!(cutoff, num_coins, min_avg_value_age, "partitioned inputs");

    for i in cutoff..num_coins {
        let high_count = i - cutoff + 1;
        let high_amount: Amount = inputs[cutoff..=i].iter().map(|c| c.amount()).sum();
        let high_value_age: ValueAge = inputs[cutoff..=i].iter().map(|c| c.value_age()).sum();

        match select_coin_min_number(&mut inputs[cutoff..=i], options) {
            Ok(output) => {
                // Window indices are relative to the window start
                let idxs: Vec<usize> = output.selected_inputs.iter().map(|j| cutoff + j).collect();
                let mut subset = Subset::new(&*inputs, idxs);

                // Pull the average back toward the threshold, lowest
                // value-age coins first, undoing the first addition that
                // would cross it or leave the total in the dust zone above
                // the target
                for n in 0..cutoff {
                    if subset.num_coins() >= options.max_inputs {
                        break;
                    }
                    subset.push_back(n);
                    let average = subset.total_value_age() / (subset.num_coins() as u64);
                    if average < min_avg_value_age
                        || !satisfies_target_amount(
                            options.target_amount,
                            options.min_change_amount,
                            subset.total_amount(),
                        )
                    {
                        subset.pop_back()?;
                        break;
                    }
                }

                let total_amount = subset.total_amount();
                return Ok(SelectionOutput {
                    selected_inputs: subset.into_indexes(),
                    total_amount,
                });
            }
            Err(_) => {
                // The high window alone is short of the target; supplement
                // it with low-priority coins while the input budget permits
                for num_low in 1..=cutoff {
                    if high_count + num_low > options.max_inputs {
                        break;
                    }

                    let combined = (high_count + num_low) as u64;
                    let low_options = CoinSelectionOpt {
                        target_amount: options.target_amount.saturating_sub(high_amount),
                        max_inputs: num_low,
                        min_change_amount: options.min_change_amount,
                    };
                    // The minimum average the low coins must reach so the
                    // combined weighted average still meets the threshold
                    let low_threshold = min_avg_value_age
                        .saturating_mul(combined)
                        .saturating_sub(high_value_age)
                        / num_low as u64;

                    trace!(
                        window_end = i,
                        num_low,
                        low_threshold,
                        residual_target = low_options.target_amount,
                        "trying low-priority supplement"
                    );
                    match select_coin_min_priority(&mut inputs[..cutoff], &low_options, low_threshold)
                    {
                        Ok(low_output) => {
                            let mut selected_inputs: Vec<usize> = (cutoff..=i).collect();
                            selected_inputs.extend(low_output.selected_inputs);
                            return Ok(SelectionOutput {
                                selected_inputs,
                                total_amount: high_amount + low_output.total_amount,
                            });
                        }
                        Err(_) => continue,
                    }
                }
                // Could not supplement this window; grow it and retry
            }
        }
    }

    Err(SelectionError::NoSelectionAvailable)
}

//! A blockchain-agnostic coin subset selection library.
//!
//! Given a slice of spendable coins and a target amount, the selection
//! algorithms pick a subset whose combined value either matches the target
//! exactly or overshoots it by at least a minimum change amount. All
//! policies are polynomial-time greedy heuristics; none claims an optimal
//! subset-sum solution. The engine is synchronous, performs no I/O and
//! keeps no state between calls, but the sort-based policies do reorder the
//! caller's slice in place.

/// Greedy selection algorithms: index-order baseline, fewest inputs, maximum value-age, and minimum average priority
pub mod algorithms;
/// Ordered index subset over a coin slice with incrementally maintained amount and value-age totals
pub mod subset;
/// Coin capability traits and the shared option, output and error types
pub mod types;
/// Target-satisfaction predicate and the in-place sort comparators
pub mod utils;

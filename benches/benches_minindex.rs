use coinset::{
    algorithms::minindex::select_coin_min_index,
    types::{CoinSelectionOpt, SelectionError, SelectionOutput, SimpleCoin},
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn benchmark_select_coin_min_index(c: &mut Criterion) {
    let inputs: Vec<SimpleCoin> = (1..=100)
        .map(|n| SimpleCoin {
            value: n * 100,
            confirmations: n,
        })
        .collect();

    let options = CoinSelectionOpt {
        target_amount: 250_000,
        max_inputs: 100,
        min_change_amount: 500,
    };

    c.bench_function("select_coin_min_index", |b| {
        b.iter(|| {
            let result: Result<SelectionOutput, SelectionError> =
                select_coin_min_index(black_box(&inputs), black_box(&options));
            let _ = black_box(result);
        })
    });
}

criterion_group!(benches, benchmark_select_coin_min_index);
criterion_main!(benches);

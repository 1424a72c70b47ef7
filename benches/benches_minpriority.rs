use coinset::{
    algorithms::minpriority::select_coin_min_priority,
    types::{CoinSelectionOpt, SelectionError, SelectionOutput, SimpleCoin},
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn benchmark_select_coin_min_priority(c: &mut Criterion) {
    let inputs: Vec<SimpleCoin> = (1..=100)
        .map(|n| SimpleCoin {
            value: (n * 41) % 3000 + 100,
            confirmations: (n * 11) % 80,
        })
        .collect();

    let options = CoinSelectionOpt {
        target_amount: 20_000,
        max_inputs: 30,
        min_change_amount: 500,
    };

    c.bench_function("select_coin_min_priority", |b| {
        b.iter(|| {
            let mut coins = inputs.clone();
            let result: Result<SelectionOutput, SelectionError> = select_coin_min_priority(
                black_box(&mut coins),
                black_box(&options),
                black_box(25_000),
            );
            let _ = black_box(result);
        })
    });
}

criterion_group!(benches, benchmark_select_coin_min_priority);
criterion_main!(benches);

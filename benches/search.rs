use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use minichess::search::{AlphaBetaSearcher, Evaluator};
use minichess::{Board, Variant};

fn bench_legal_moves(c: &mut Criterion) {
    for variant in Variant::ALL {
        let board = Board::new(variant);
        c.bench_function(&format!("legal_moves_{}", variant), |b| {
            b.iter(|| black_box(&board).generate_legal_moves().len());
        });
    }
}

fn bench_alpha_beta(c: &mut Criterion) {
    let mut group = c.benchmark_group("alpha_beta");
    group.sample_size(20);

    for (variant, depth) in [(Variant::Silverman4x4, 4), (Variant::Silverman4x5, 3), (Variant::LosAlamos6x6, 2)] {
        group.bench_with_input(BenchmarkId::new(variant.name(), depth), &depth, |b, &depth| {
            let mut board = Board::new(variant);
            b.iter(|| {
                let mut searcher = AlphaBetaSearcher::new(Evaluator::new());
                searcher.search(black_box(&mut board), depth).score
            });
        });
    }
    group.finish();
}

fn bench_move_ordering_effect(c: &mut Criterion) {
    let mut board = Board::new(Variant::Baby5x5);
    c.bench_function("alpha_beta_unordered_5x5_d3", |b| {
        b.iter(|| {
            let mut searcher = AlphaBetaSearcher::new(Evaluator::new()).with_move_ordering(false);
            searcher.search(black_box(&mut board), 3).nodes_searched
        });
    });
}

criterion_group!(benches, bench_legal_moves, bench_alpha_beta, bench_move_ordering_effect);
criterion_main!(benches);

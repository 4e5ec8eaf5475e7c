use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use minesweeper_engine::{Game, Position};
use rand::{rngs::StdRng, SeedableRng};

fn first_click(c: &mut Criterion) {
    let mut group = c.benchmark_group("first_click");

    for &(size, mines) in &[(9u32, 10u32), (16, 40), (30, 99), (100, 2_000)] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{size}x{size}/{mines}")),
            &(size, mines),
            |b, &(size, mines)| {
                let mut rng = StdRng::seed_from_u64(12345);
                let center = Position::new(size as i32 / 2, size as i32 / 2);
                b.iter(|| {
                    let mut game = Game::new(size, size, mines).unwrap();
                    game.reveal_with(black_box(center), &mut rng);
                    game
                })
            },
        );
    }

    group.finish();
}

fn full_cascade(c: &mut Criterion) {
    // A single mine in the far corner: the first click opens nearly the whole board.
    let mut group = c.benchmark_group("full_cascade");

    for &size in &[50u32, 150, 300] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut rng = StdRng::seed_from_u64(7);
            b.iter(|| {
                let mut game = Game::new(size, size, 1).unwrap();
                game.reveal_with(black_box(Position::new(0, 0)), &mut rng);
                game.revealed_count()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, first_click, full_cascade);
criterion_main!(benches);

use criterion::{Criterion, criterion_group, criterion_main};
use minesweep_core::{Board, BoardView};
use std::hint::black_box;

fn bench_cascade(c: &mut Criterion) {
    c.bench_function("expose_empty_board", |b| {
        b.iter(|| {
            let mut board = Board::new();
            board.expose_cell(black_box((4, 4))).unwrap();
            board.game_status()
        })
    });

    c.bench_function("expose_seeded_board", |b| {
        let mut seeded = Board::new();
        seeded.set_mines(3).unwrap();
        b.iter(|| {
            let mut board = seeded.clone();
            board.expose_all();
            black_box(BoardView::from_board(&board))
        })
    });
}

fn bench_placement(c: &mut Criterion) {
    c.bench_function("set_mines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            board.set_mines(black_box(42)).unwrap();
            board
        })
    });
}

criterion_group!(benches, bench_cascade, bench_placement);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use royal_engine::coretypes::Color::*;
use royal_engine::fen::Fen;
use royal_engine::*;

pub fn criterion_checkmate_scholars(c: &mut Criterion) {
    // Setup
    let board =
        Mailbox::parse_fen("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b").unwrap();

    // Benchmarks

    c.bench_function("scholars_is_in_check", |b| {
        b.iter(|| assert!(is_in_check(black_box(&board), black_box(Black))))
    });

    c.bench_function("scholars_is_in_checkmate", |b| {
        b.iter(|| assert!(is_in_checkmate(black_box(&board), black_box(Black))))
    });
}

pub fn criterion_checkmate_escapable(c: &mut Criterion) {
    // Setup
    let board = Mailbox::parse_fen("4k3/8/8/b7/8/8/2P5/1N2K3 w").unwrap();

    // Benchmarks

    c.bench_function("bishop_check_is_in_checkmate", |b| {
        b.iter(|| assert!(!is_in_checkmate(black_box(&board), black_box(White))))
    });
}

pub fn criterion_checkmate_fools_game(c: &mut Criterion) {
    use royal_engine::coretypes::Square::*;

    // Setup
    let moves = [(F2, F3), (E7, E5), (G2, G4), (D8, H4)];

    // Benchmarks

    c.bench_function("fools_mate_submit_moves", |b| {
        b.iter(|| {
            let mut game = GameState::start_position();
            for &(from, to) in black_box(&moves) {
                game.apply_move(from, to).unwrap();
            }
            assert!(game.is_checkmate());
        })
    });
}

criterion_group! {
    name = checkmate_benches;
    config = Criterion::default().without_plots().sample_size(30);
    targets = criterion_checkmate_scholars, criterion_checkmate_escapable, criterion_checkmate_fools_game
}

criterion_main!(checkmate_benches);

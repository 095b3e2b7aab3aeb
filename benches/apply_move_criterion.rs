use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use quartz_chess::fen::fen_generator::generate_fen;
use quartz_chess::fen::fen_parser::parse_fen;
use quartz_chess::position::chess_move::Move;
use quartz_chess::position::chess_types::Square;
use quartz_chess::position::position::Position;

#[derive(Clone, Copy)]
struct FenCase {
    name: &'static str,
    fen: &'static str,
}

const FEN_CASES: &[FenCase] = &[
    FenCase {
        name: "startpos",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    },
    FenCase {
        name: "italian_game",
        fen: "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQ1RK1 b kq - 4 6",
    },
    FenCase {
        name: "rook_endgame",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    },
];

// A long-algebraic opening line with a double push, captures, a castle, and
// quiet moves, so one pass exercises every branch of the mutator.
const MOVE_LINE: &[(&str, &str)] = &[
    ("e2", "e4"),
    ("e7", "e5"),
    ("g1", "f3"),
    ("b8", "c6"),
    ("f1", "c4"),
    ("g8", "f6"),
    ("e1", "g1"),
    ("f6", "e4"),
    ("f3", "e5"),
    ("c6", "e5"),
];

fn parse_line(line: &[(&str, &str)]) -> Vec<Move> {
    line.iter()
        .map(|&(from, to)| {
            let from: Square = from.parse().expect("bench square should parse");
            let to: Square = to.parse().expect("bench square should parse");
            Move::new(from, to)
        })
        .collect()
}

fn bench_apply_moves(c: &mut Criterion) {
    let moves = parse_line(MOVE_LINE);

    let mut group = c.benchmark_group("apply_unchecked");
    group.throughput(Throughput::Elements(moves.len() as u64));
    group.bench_function("opening_line", |b| {
        b.iter(|| {
            let mut position = Position::new();
            for &mv in &moves {
                position.apply_unchecked(black_box(mv));
            }
            black_box(position)
        })
    });
    group.finish();
}

fn bench_fen_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("fen");

    for case in FEN_CASES {
        group.bench_with_input(BenchmarkId::new("parse", case.name), &case.fen, |b, fen| {
            b.iter(|| parse_fen(black_box(fen)).expect("bench FEN should parse"))
        });

        let position = parse_fen(case.fen).expect("bench FEN should parse");
        group.bench_with_input(
            BenchmarkId::new("generate", case.name),
            &position,
            |b, position| b.iter(|| generate_fen(black_box(position))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_apply_moves, bench_fen_round_trip);
criterion_main!(benches);

use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chess_rules_engine::game_state::chess_rules::STARTING_POSITION_FEN;
use chess_rules_engine::move_generation::legal_move_mask::enumerate;
use chess_rules_engine::move_generation::perft::perft;
use chess_rules_engine::GameState;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
    mask_entries: usize,
    expected_nodes: &'static [usize],
}

const CASES_QUICK: &[BenchCase] = &[
    BenchCase {
        name: "position_1",
        fen: STARTING_POSITION_FEN,
        mask_entries: 20,
        expected_nodes: &[20, 400, 8902],
    },
    BenchCase {
        name: "position_2",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        mask_entries: 48,
        expected_nodes: &[48, 2039],
    },
    BenchCase {
        name: "position_3",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        mask_entries: 14,
        expected_nodes: &[14, 191, 2812],
    },
];

const CASES_STANDARD: &[BenchCase] = &[
    BenchCase {
        name: "position_1",
        fen: STARTING_POSITION_FEN,
        mask_entries: 20,
        expected_nodes: &[20, 400, 8902, 197_281],
    },
    BenchCase {
        name: "position_2",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        mask_entries: 48,
        expected_nodes: &[48, 2039, 97_862],
    },
    BenchCase {
        name: "position_3",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        mask_entries: 14,
        expected_nodes: &[14, 191, 2812, 43_238],
    },
    BenchCase {
        name: "position_4",
        fen: "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        mask_entries: 6,
        expected_nodes: &[6, 264, 9467],
    },
];

fn suite() -> (&'static str, &'static [BenchCase]) {
    match std::env::var("RULES_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => ("standard", CASES_STANDARD),
        _ => ("quick", CASES_QUICK),
    }
}

fn bench_mask(c: &mut Criterion) {
    let (suite_name, cases) = suite();
    let mut group = c.benchmark_group(format!("mask_{suite_name}"));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    for case in cases {
        let game = GameState::from_fen(case.fen).expect("benchmark FEN should parse");
        assert_eq!(
            enumerate(&game).count(),
            case.mask_entries,
            "mask mismatch for {}",
            case.name
        );

        group.bench_function(BenchmarkId::from_parameter(case.name), |b| {
            b.iter(|| black_box(enumerate(black_box(&game))));
        });
    }

    group.finish();
}

fn bench_perft(c: &mut Criterion) {
    let (suite_name, cases) = suite();
    let mut group = c.benchmark_group(format!("perft_{suite_name}"));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in cases {
        let game = GameState::from_fen(case.fen).expect("benchmark FEN should parse");

        for (depth_idx, &expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            assert_eq!(
                perft(&game, depth).nodes,
                expected_nodes,
                "node mismatch for {} depth {}",
                case.name,
                depth
            );

            group.throughput(Throughput::Elements(expected_nodes as u64));
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{}_d{}", case.name, depth)),
                &expected_nodes,
                |b, &expected| {
                    b.iter(|| {
                        let counts = perft(black_box(&game), black_box(depth));
                        assert_eq!(counts.nodes, expected);
                        black_box(counts.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(legality_benches, bench_mask, bench_perft);
criterion_main!(legality_benches);

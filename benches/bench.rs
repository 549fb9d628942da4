use criterion::{black_box, criterion_group, criterion_main, Criterion};

use npuzzle_solver::{goal_board, parse_board, solve, GoalBlank};

const SIMPLE_INPUT: &str = "
4 1 3
7 2 6
5 8 0";

// one of the two 8-puzzle positions furthest from the goal (31 moves)
const HARDEST_INPUT: &str = "
8 6 7
2 5 4
3 0 1";

const FIFTEEN_INPUT: &str = "
 5  1  3  4
 9  2  7  8
 0  6 11 12
13 10 14 15";

const UNSOLVABLE_INPUT: &str = "
 1  2  3  4
 5  6  7  8
 9 10 11 12
13 15 14  0";

fn criterion_bench(c: &mut Criterion) {
    c.bench_function("simple", |b| {
        let input = parse_board(SIMPLE_INPUT).unwrap();
        let target = goal_board(3, GoalBlank::BottomRight);
        b.iter(|| solve(black_box(&input), black_box(&target)))
    });

    c.bench_function("hardest 8-puzzle", |b| {
        let input = parse_board(HARDEST_INPUT).unwrap();
        let target = goal_board(3, GoalBlank::BottomRight);
        b.iter(|| solve(black_box(&input), black_box(&target)))
    });

    c.bench_function("15-puzzle", |b| {
        let input = parse_board(FIFTEEN_INPUT).unwrap();
        let target = goal_board(4, GoalBlank::BottomRight);
        b.iter(|| solve(black_box(&input), black_box(&target)))
    });

    c.bench_function("unsolvable", |b| {
        let input = parse_board(UNSOLVABLE_INPUT).unwrap();
        let target = goal_board(4, GoalBlank::BottomRight);
        b.iter(|| solve(black_box(&input), black_box(&target)))
    });
}

criterion_group!(benches, criterion_bench);
criterion_main!(benches);

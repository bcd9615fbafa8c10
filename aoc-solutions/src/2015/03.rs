use aoc_harness::{TestCase, case};
use std::collections::HashSet;

fn visited(input: &str, santas: usize) -> usize {
    let mut positions = vec![(0i32, 0i32); santas];
    let mut houses = HashSet::from([(0, 0)]);

    for (i, dir) in input.trim().chars().enumerate() {
        let (x, y) = &mut positions[i % santas];
        match dir {
            '>' => *x += 1,
            '<' => *x -= 1,
            'v' => *y += 1,
            '^' => *y -= 1,
            _ => continue,
        }
        houses.insert((*x, *y));
    }
    houses.len()
}

pub fn part1(input: &str) -> usize {
    visited(input, 1)
}

pub fn part2(input: &str) -> usize {
    visited(input, 2)
}

pub fn tests() -> Vec<TestCase> {
    vec![
        case!(part1(">"), 2),
        case!(part1("^>v<"), 4),
        case!(part1("^v^v^v^v^v"), 2),
        case!(part2("^v"), 3),
        case!(part2("^>v<"), 3),
        case!(part2("^v^v^v^v^v"), 11),
    ]
}

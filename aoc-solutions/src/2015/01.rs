use aoc_harness::{TestCase, case};
use anyhow::{Result, anyhow};

fn steps(input: &str) -> impl Iterator<Item = i64> + '_ {
    input.trim().chars().map(|c| match c {
        '(' => 1,
        ')' => -1,
        _ => 0,
    })
}

pub fn part1(input: &str) -> i64 {
    steps(input).sum()
}

pub fn part2(input: &str) -> Result<usize> {
    steps(input)
        .scan(0, |floor, step| {
            *floor += step;
            Some(*floor)
        })
        .position(|floor| floor < 0)
        .map(|index| index + 1)
        .ok_or_else(|| anyhow!("Santa never enters the basement"))
}

pub fn tests() -> Vec<TestCase> {
    vec![
        case!(part1("(())"), 0),
        case!(part1("()()"), 0),
        case!(part1("((("), 3),
        case!(part1("(()(()("), 3),
        case!(part1("))((((("), 3),
        case!(part1("())"), -1),
        case!(part1("))("), -1),
        case!(part1(")))"), -3),
        case!(part1(")())())"), -3),
        case!(part2(")"), 1),
        case!(part2("()())"), 5),
    ]
}

use aoc_harness::{Answer, TestCase};
use anyhow::{Result, bail};

pub fn part1(_input: &str) -> Result<Answer> {
    bail!("part 1 is not solved yet")
}

pub fn part2(_input: &str) -> Result<Answer> {
    bail!("part 2 is not solved yet")
}

pub fn tests() -> Vec<TestCase> {
    vec![]
}

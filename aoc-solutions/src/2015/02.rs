use aoc_harness::{TestCase, case};
use anyhow::{Context, Result};

fn parse(input: &str) -> Result<Vec<[u64; 3]>> {
    input
        .trim()
        .lines()
        .enumerate()
        .map(|(line_idx, line)| -> Result<[u64; 3]> {
            let dims = line
                .split('x')
                .map(|n| n.trim().parse::<u64>())
                .collect::<Result<Vec<_>, _>>()
                .with_context(|| format!("(line {}) invalid dimension in {:?}", line_idx + 1, line))?;
            let mut dims: [u64; 3] = dims
                .try_into()
                .map_err(|_| anyhow::anyhow!("(line {}) expected LxWxH", line_idx + 1))?;
            dims.sort_unstable();
            Ok(dims)
        })
        .collect()
}

pub fn part1(input: &str) -> Result<u64> {
    Ok(parse(input)?
        .iter()
        .map(|[a, b, c]| 2 * (a * b + a * c + b * c) + a * b)
        .sum())
}

pub fn part2(input: &str) -> Result<u64> {
    Ok(parse(input)?
        .iter()
        .map(|[a, b, c]| 2 * (a + b) + a * b * c)
        .sum())
}

pub fn tests() -> Vec<TestCase> {
    vec![
        case!(part1("2x3x4"), 58),
        case!(part1("1x1x10"), 43),
        case!(part2("2x3x4"), 34),
        case!(part2("1x1x10"), 14),
    ]
}

use anyhow::Context;
use std::path::Path;

/// seeds from a file, one per line. blank lines are skipped
/// and a line holding 0 ends the list early.
pub fn load(path: &Path) -> anyhow::Result<Vec<u32>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read seeds from {}", path.display()))?;
    parse(&text).with_context(|| format!("parse seeds in {}", path.display()))
}

pub fn parse(text: &str) -> anyhow::Result<Vec<u32>> {
    let mut seeds = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let seed = line
            .parse::<u32>()
            .with_context(|| format!("line {}: {:?} is not a seed", i + 1, line))?;
        if seed == 0 {
            break;
        }
        seeds.push(seed);
    }
    Ok(seeds)
}

/// `count` consecutive seeds starting at `first`, at least one
pub fn range(first: u32, count: usize) -> Vec<u32> {
    (0..count.max(1) as u32)
        .map(|i| first.wrapping_add(i))
        .collect()
}

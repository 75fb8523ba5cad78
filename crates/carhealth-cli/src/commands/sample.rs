use anyhow::Context;

use carhealth_core::{Reading, TimestampFormat};

pub fn run(
    count: usize,
    seed: Option<u64>,
    format: TimestampFormat,
    pretty: bool,
) -> anyhow::Result<()> {
    let readings = generate(count, seed, format);
    let json = if pretty {
        serde_json::to_string_pretty(&readings)
    } else {
        serde_json::to_string(&readings)
    }
    .context("failed to encode readings")?;
    println!("{json}");
    Ok(())
}

fn generate(count: usize, seed: Option<u64>, format: TimestampFormat) -> Vec<Reading> {
    let mut generator = super::make_generator(seed, format);
    (0..count).map(|_| generator.generate()).collect()
}

//! Writes a deterministic demo grants CSV for trying out the viewer.
//!
//! Usage: `cargo run --bin generate-sample [output.csv]`

use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Heavy-tailed grant size: a few large grants dominate each pool.
    fn grant_amount(&mut self, scale: f64) -> f64 {
        let u = self.next_f64().max(1e-12);
        (scale * u.powf(-0.6)).round()
    }
}

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample_grants.csv".to_string());

    let mut rng = SimpleRng::new(42);

    let pools: [(&str, usize, f64); 4] = [
        ("retro-round-1", 24, 5_000.0),
        ("retro-round-2", 38, 8_000.0),
        ("builders-2024", 6, 12_000.0),
        ("community-microgrants", 55, 400.0),
    ];

    let funders = ["opencollective", "gitcoin", "optimism-rpgf", "octant"];

    let file = File::create(&path).with_context(|| format!("creating {path}"))?;
    let mut out = BufWriter::new(file);

    writeln!(
        out,
        "grant_pool_name,from_project_name,to_project_name,f0_"
    )?;

    for (pool, count, scale) in pools {
        for i in 0..count {
            let funder = funders[(rng.next_u64() % funders.len() as u64) as usize];
            let amount = rng.grant_amount(scale);
            writeln!(out, "{pool},{funder},project-{pool}-{i:03},{amount}")?;
        }
    }

    // The known upstream artifact row, so the demo exercises the load-time
    // exclusion too.
    writeln!(out, "retro-round-1,opencollective,nativesintech,123456")?;

    out.flush()?;
    println!("Wrote {path}");
    Ok(())
}

use std::path::PathBuf;

use anyhow::{Context, Result};
use natality_dashboard::config::DEFAULT_DATA_FILE;

const STATES: [&str; 8] = [
    "Alabama",
    "Arizona",
    "California",
    "Florida",
    "Illinois",
    "New York",
    "Texas",
    "Washington",
];

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Rough relative population weights, same order as `STATES`.
const STATE_WEIGHTS: [f64; 8] = [0.4, 0.6, 3.2, 1.8, 1.1, 1.7, 3.0, 0.7];

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
}

fn main() -> Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

    let mut rng = SimpleRng::new(42);
    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("creating {}", path.display()))?;

    writer.write_record([
        "State of Residence",
        "Month",
        "Month Code",
        "Year Code",
        "Sex of Infant",
        "Births",
    ])?;

    let mut rows = 0usize;
    let mut suppressed = 0usize;
    for (state, weight) in STATES.iter().zip(STATE_WEIGHTS) {
        for (m, month) in MONTHS.iter().enumerate() {
            for gender in ["F", "M"] {
                // About 1 in 40 cells is suppressed in the published data.
                let births = if rng.next_f64() < 0.025 {
                    suppressed += 1;
                    "Suppressed".to_string()
                } else {
                    let base = 9000.0 * weight;
                    let jitter = 0.9 + 0.2 * rng.next_f64();
                    format!("{:.0}", base * jitter)
                };
                let month_code = (m + 1).to_string();
                writer.write_record([
                    *state,
                    *month,
                    month_code.as_str(),
                    "2025",
                    gender,
                    births.as_str(),
                ])?;
                rows += 1;
            }
        }
    }
    writer.flush().context("flushing CSV")?;

    log::info!("{suppressed} of {rows} births values suppressed");
    println!("Wrote {rows} rows to {}", path.display());
    Ok(())
}

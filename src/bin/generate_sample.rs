use std::fs;
use std::path::Path;

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

    /// Uniform pick from `lo..=hi`.
    fn range(&mut self, lo: u64, hi: u64) -> u64 {
        lo + self.next_u64() % (hi - lo + 1)
    }

    /// True with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

/// Random date in 2023, day capped at 28 to stay valid in every month.
fn random_date(rng: &mut SimpleRng) -> String {
    format!("2023-{:02}-{:02}", rng.range(1, 12), rng.range(1, 28))
}

fn write_orders(out_dir: &Path, rng: &mut SimpleRng) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(out_dir.join("orders.csv")).context("creating orders.csv")?;
    writer.write_record(["orderId", "orderDate", "amount", "status"])?;

    let statuses = ["shipped", "pending", "returned"];
    for id in 1..=60u64 {
        // a few unparsed-upload placeholders and missing amounts
        let date = if rng.chance(0.05) {
            "0000-00-00 00:00:00".to_string()
        } else {
            random_date(rng)
        };
        let amount = if rng.chance(0.05) {
            "na".to_string()
        } else {
            format!("{:.2}", 5.0 + rng.next_f64() * 195.0)
        };
        let status = statuses[(rng.next_u64() % statuses.len() as u64) as usize];
        writer.write_record([id.to_string(), date, amount, status.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_customers(out_dir: &Path, rng: &mut SimpleRng) -> Result<()> {
    // the space in the filename exercises registry-key normalization
    let mut writer = csv::Writer::from_path(out_dir.join("Customer List.csv"))
        .context("creating Customer List.csv")?;
    writer.write_record(["customerId", "name", "signup date", "city"])?;

    let names = ["Alice", "Bob", "Carmen", "Dmitri", "Eve"];
    let cities = ["Brooklyn", "Queens", "Bronx", "na"];
    for id in 1..=25u64 {
        let name = names[(rng.next_u64() % names.len() as u64) as usize];
        let signup = if rng.chance(0.1) {
            "na".to_string()
        } else {
            random_date(rng)
        };
        let city = cities[(rng.next_u64() % cities.len() as u64) as usize];
        writer.write_record([id.to_string(), name.to_string(), signup, city.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let out_dir = Path::new("sample_data");
    fs::create_dir_all(out_dir).context("creating sample_data/")?;

    let mut rng = SimpleRng::new(42);
    write_orders(out_dir, &mut rng)?;
    write_customers(out_dir, &mut rng)?;

    println!("Wrote sample CSVs to {}/", out_dir.display());
    println!("Load them with `rusty-eda sample_data`, run from a sibling directory.");
    Ok(())
}

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

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

const HEADER: [&str; 11] = [
    "work_year",
    "experience_level",
    "employment_type",
    "job_title",
    "salary",
    "salary_currency",
    "salary_in_usd",
    "employee_residence",
    "remote_ratio",
    "company_location",
    "company_size",
];

/// (title, base USD salary)
const TITLES: [(&str, f64); 8] = [
    ("Data Scientist", 130_000.0),
    ("Data Engineer", 125_000.0),
    ("Data Analyst", 95_000.0),
    ("Machine Learning Engineer", 150_000.0),
    ("Research Scientist", 160_000.0),
    ("Analytics Engineer", 115_000.0),
    ("Data Architect", 155_000.0),
    ("Applied Scientist", 165_000.0),
];

/// (level, salary multiplier)
const LEVELS: [(&str, f64); 4] = [("EN", 0.65), ("MI", 0.85), ("SE", 1.1), ("EX", 1.45)];

/// (country, currency, USD per unit)
const LOCATIONS: [(&str, &str, f64); 4] = [
    ("US", "USD", 1.0),
    ("GB", "GBP", 1.25),
    ("DE", "EUR", 1.08),
    ("CA", "CAD", 0.74),
];

const EMPLOYMENT: [&str; 3] = ["FT", "FT", "CT"];
const REMOTE: [&str; 3] = ["0", "50", "100"];
const SIZES: [&str; 3] = ["S", "M", "L"];

/// Rows per year, growing like a real job board.
const YEARS: [(u32, usize); 5] = [
    (2020, 70),
    (2021, 210),
    (2022, 1600),
    (2023, 4200),
    (2024, 6000),
];

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "salaries.csv".to_string());
    let mut rng = SimpleRng::new(42);

    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record(HEADER)?;

    let mut rows = 0usize;
    for (year, count) in YEARS {
        // ~4% yearly growth on top of the base salary.
        let growth = 1.04f64.powi((year - 2020) as i32);

        for _ in 0..count {
            let (title, base) = *rng.pick(&TITLES);
            let (level, multiplier) = *rng.pick(&LEVELS);
            let (country, currency, usd_rate) = *rng.pick(&LOCATIONS);

            let mean = base * multiplier * growth;
            let usd = rng.gauss(mean, mean * 0.15).max(15_000.0).round();
            let local = (usd / usd_rate).round();

            writer.write_record([
                year.to_string().as_str(),
                level,
                *rng.pick(&EMPLOYMENT),
                title,
                local.to_string().as_str(),
                currency,
                usd.to_string().as_str(),
                country,
                *rng.pick(&REMOTE),
                country,
                *rng.pick(&SIZES),
            ])?;
            rows += 1;
        }
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {rows} salary records to {output_path}");
    Ok(())
}

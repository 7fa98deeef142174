use anyhow::{Context, Result};
use serde::Serialize;

/// One output row; column names match the dataset the dashboard was built for.
#[derive(Serialize)]
struct LaunchRow<'a> {
    #[serde(rename = "")]
    index: usize,
    #[serde(rename = "Flight Number")]
    flight_number: usize,
    #[serde(rename = "Launch Site")]
    launch_site: &'a str,
    class: u8,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version")]
    booster_version: String,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: &'a str,
}

/// Deterministic splitmix64 stream so the sample file is reproducible.
struct SampleRng(u64);

impl SampleRng {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)`.
    fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// Boosters in service order: (category, payload ceiling kg, success rate).
const BOOSTERS: [(&str, f64, f64); 5] = [
    ("v1.0", 600.0, 0.2),
    ("v1.1", 4500.0, 0.35),
    ("FT", 9600.0, 0.65),
    ("B4", 7000.0, 0.55),
    ("B5", 9600.0, 0.9),
];

const SITES: [&str; 4] = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];

fn main() -> Result<()> {
    let mut rng = SampleRng(42);
    let output_path = "spacex_launch_dash.csv";
    let mut writer = csv::Writer::from_path(output_path).context("creating output CSV")?;

    let flights_per_booster = 12;
    let mut index = 0;
    for (b, &(category, ceiling, success_rate)) in BOOSTERS.iter().enumerate() {
        for serial in 0..flights_per_booster {
            // The earliest flights all flew from the first site.
            let launch_site = if b == 0 { SITES[0] } else { rng.pick(&SITES) };
            let payload_mass_kg = (rng.unit() * ceiling).round();
            let class = u8::from(rng.unit() < success_rate);

            writer
                .serialize(LaunchRow {
                    index,
                    flight_number: index + 1,
                    launch_site,
                    class,
                    payload_mass_kg,
                    booster_version: format!("F9 {category} B{:04}", 1000 + b * 100 + serial),
                    booster_version_category: category,
                })
                .with_context(|| format!("writing row {index}"))?;
            index += 1;
        }
    }
    writer.flush().context("flushing output CSV")?;

    println!("Wrote {index} launches to {output_path}");
    Ok(())
}

//! Writes `tv_shows_sample.csv`, a synthetic dataset in the layout the
//! dashboard loads (index, title, year, age, rating, RT score, four platform
//! flags, type).

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

    fn below(&mut self, n: usize) -> usize {
        (self.next_f64() * n as f64) as usize % n
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

const ADJECTIVES: [&str; 10] = [
    "Dark", "Silent", "Golden", "Broken", "Hidden", "Little", "Last", "Wild", "Crimson", "Endless",
];
const NOUNS: [&str; 10] = [
    "Kingdom", "Detectives", "Island", "Crown", "Frontier", "Kitchen", "Academy", "Empire", "Road", "Signal",
];
/// Empty string stands for a missing label.
const AGES: [&str; 6] = ["all", "7+", "13+", "16+", "18+", ""];

/// Per-platform (Netflix, Hulu, Prime Video, Disney+) availability odds and
/// mean rating.
const PLATFORMS: [(f64, f64); 4] = [(0.45, 7.2), (0.3, 7.0), (0.4, 6.8), (0.12, 7.4)];

fn main() {
    let mut rng = SimpleRng::new(42);
    let output_path = "tv_shows_sample.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");

    writer
        .write_record([
            "", "Title", "Year", "Age", "IMDb", "Rotten Tomatoes", "Netflix", "Hulu", "Prime Video",
            "Disney+", "type",
        ])
        .expect("Failed to write header");

    let n_shows = 500;
    for id in 0..n_shows {
        let title = format!(
            "The {} {}",
            ADJECTIVES[rng.below(ADJECTIVES.len())],
            NOUNS[rng.below(NOUNS.len())]
        );
        let year = 1960 + (rng.gauss(50.0, 12.0).clamp(0.0, 60.0) as i32);
        let age = AGES[rng.below(AGES.len())];

        let mut flags = [0u8; 4];
        for (flag, (odds, _)) in flags.iter_mut().zip(PLATFORMS) {
            *flag = u8::from(rng.next_f64() < odds);
        }
        if flags.iter().all(|&f| f == 0) {
            flags[rng.below(flags.len())] = 1;
        }

        let mean = flags
            .iter()
            .zip(PLATFORMS)
            .filter(|(&f, _)| f == 1)
            .map(|(_, (_, m))| m)
            .fold(f64::NEG_INFINITY, f64::max);
        let rating = if rng.next_f64() < 0.15 {
            String::new()
        } else {
            format!("{:.1}", rng.gauss(mean, 1.1).clamp(1.0, 10.0))
        };
        let rotten = if rating.is_empty() {
            String::new()
        } else {
            format!("{}%", rng.below(101))
        };

        let mut record = vec![
            id.to_string(),
            title,
            year.to_string(),
            age.to_string(),
            rating,
            rotten,
        ];
        record.extend(flags.iter().map(|f| f.to_string()));
        record.push("1".to_string());
        writer.write_record(&record).expect("Failed to write row");
    }

    writer.flush().expect("Failed to flush output");
    println!("Wrote {n_shows} shows to {output_path}");
}

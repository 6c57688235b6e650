//! Writes a synthetic labeled-review store to `data/reviews.csv` so the
//! dashboard has something to show before the ingest tool has run.

use std::error::Error;

/// Minimal deterministic PRNG (xoshiro256**) so the generated store is
/// reproducible without pulling the full `rand` stack into this bin.
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

    /// Uniform integer in `[0, bound)`.
    fn below(&mut self, bound: u64) -> u64 {
        self.next_u64() % bound
    }

    fn pick<'a>(&mut self, options: &[&'a str]) -> &'a str {
        options[self.below(options.len() as u64) as usize]
    }
}

const POSITIVE_TITLES: [&str; 5] = [
    "Loved this film",
    "A must watch",
    "Underrated gem",
    "Stunning cinematography",
    "Great cast and pacing",
];

const NEGATIVE_TITLES: [&str; 5] = [
    "Huge disappointment",
    "Do not bother",
    "Overhyped and dull",
    "Script was a mess",
    "Painfully slow",
];

const POSITIVE_COMMENTS: [&str; 3] = [
    "The pacing was tight and the ending landed perfectly. Would watch again.",
    "Acting carried the whole thing, every scene felt earned.",
    "Went in with low expectations and was blown away by the third act.",
];

const NEGATIVE_COMMENTS: [&str; 3] = [
    "Two hours I will never get back. The plot falls apart halfway through.",
    "Flat characters and a predictable twist you can see from the trailer.",
    "The editing was so choppy I lost track of who was where.",
];

const TYPES: [&str; 4] = ["Discussion", "Recommendation", "Article", "News"];

/// 2022-01-01 00:00:00 UTC.
const JAN_2022: i64 = 1_640_995_200;

fn main() -> Result<(), Box<dyn Error>> {
    let mut rng = SimpleRng::new(20220101);

    std::fs::create_dir_all("data")?;
    let mut writer = csv::Writer::from_path("data/reviews.csv")?;
    writer.write_record(["created", "title", "comment", "sentiment", "type"])?;

    let mut n_rows = 0;
    for day in 0..28 {
        for _ in 0..(1 + rng.below(4)) {
            let created = JAN_2022
                + day * 86_400
                + (6 + rng.below(18) as i64) * 3_600
                + rng.below(3_600) as i64;

            let negative = rng.below(10) < 4;
            let (title, comment, sentiment) = if negative {
                (
                    rng.pick(&NEGATIVE_TITLES),
                    rng.pick(&NEGATIVE_COMMENTS),
                    "negative",
                )
            } else {
                (
                    rng.pick(&POSITIVE_TITLES),
                    rng.pick(&POSITIVE_COMMENTS),
                    "positive",
                )
            };

            writer.write_record([
                created.to_string().as_str(),
                title,
                comment,
                sentiment,
                rng.pick(&TYPES),
            ])?;
            n_rows += 1;
        }
    }
    writer.flush()?;

    println!("wrote {n_rows} reviews to data/reviews.csv");
    Ok(())
}

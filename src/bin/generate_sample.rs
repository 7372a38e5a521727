use anyhow::{Context, Result};
use serde::Serialize;

/// One row as it appears in the IMDb export. Header names carry stray
/// spaces on purpose, and `Rank` is not a column the loader uses.
#[derive(Serialize)]
struct SampleRow {
    #[serde(rename = "Rank")]
    rank: usize,
    #[serde(rename = "Poster_Link")]
    poster_link: String,
    #[serde(rename = " Series_Title")]
    series_title: String,
    #[serde(rename = "Released_Year ")]
    released_year: String,
    #[serde(rename = "Certificate")]
    certificate: String,
    #[serde(rename = "Runtime")]
    runtime: String,
    #[serde(rename = "Genre")]
    genre: String,
    #[serde(rename = "IMDB_Rating")]
    imdb_rating: String,
    #[serde(rename = "Overview")]
    overview: String,
    #[serde(rename = "Meta_score")]
    meta_score: String,
    #[serde(rename = " Director ")]
    director: String,
    #[serde(rename = "Star1")]
    star1: String,
    #[serde(rename = "Star2")]
    star2: String,
    #[serde(rename = "Star3")]
    star3: String,
    #[serde(rename = "Star4")]
    star4: String,
    #[serde(rename = "No_of_Votes")]
    no_of_votes: u64,
    #[serde(rename = "Gross")]
    gross: String,
}

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

    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.below(items.len() as u64) as usize]
    }
}

/// `28341469` → `"$28,341,469"`.
fn dollars(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("${out}")
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample_movies.csv".to_string());
    let mut rng = SimpleRng::new(42);

    let genres = [
        "Action", "Adventure", "Animation", "Comedy", "Crime", "Drama", "Fantasy", "Horror",
        "Mystery", "Romance", "Sci-Fi", "Thriller", "Western",
    ];
    let certificates = ["U", "UA", "A", "PG", "PG-13", "R", "G"];
    let directors = [
        "Frank Darabont",
        "Francis Ford Coppola",
        "Christopher Nolan",
        "Akira Kurosawa",
        "Sergio Leone",
        "Hayao Miyazaki",
        "Kathryn Bigelow",
        "Agnès Varda",
    ];
    let actors = [
        "Tim Robbins",
        "Morgan Freeman",
        "Toshiro Mifune",
        "Clint Eastwood",
        "Liv Ullmann",
        "Giulietta Masina",
        "Denzel Washington",
        "Frances McDormand",
        "Song Kang-ho",
        "Tilda Swinton",
    ];

    let mut wtr = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;

    let n_rows = 60;
    for rank in 1..=n_rows {
        let year = 1920 + rng.below(104);
        let n_genres = 1 + rng.below(3) as usize;
        let mut row_genres: Vec<&str> = Vec::with_capacity(n_genres);
        while row_genres.len() < n_genres {
            let g = rng.pick(&genres);
            if !row_genres.contains(&g) {
                row_genres.push(g);
            }
        }
        let rating = 7.5 + rng.below(19) as f64 / 10.0;
        let gross = rng.below(500_000_000);

        let mut row = SampleRow {
            rank,
            poster_link: format!("https://example.org/posters/{rank}.jpg"),
            series_title: format!("Sample Movie {rank}"),
            released_year: year.to_string(),
            certificate: rng.pick(&certificates).to_string(),
            runtime: format!("{} min", 80 + rng.below(120)),
            genre: row_genres.join(", "),
            imdb_rating: format!("{rating:.1}"),
            overview: format!("An invented story number {rank}."),
            meta_score: (50 + rng.below(50)).to_string(),
            director: rng.pick(&directors).to_string(),
            star1: rng.pick(&actors).to_string(),
            star2: rng.pick(&actors).to_string(),
            star3: rng.pick(&actors).to_string(),
            star4: rng.pick(&actors).to_string(),
            no_of_votes: 25_000 + rng.below(2_000_000),
            gross: if rank % 2 == 0 {
                dollars(gross)
            } else {
                // Plain thousands separators, as in the real export.
                dollars(gross).trim_start_matches('$').to_string()
            },
        };

        // A few rows exercise the cleaning rules.
        match rank {
            7 => row.released_year = "PG".to_string(),
            13 => row.meta_score = String::new(),
            21 => row.gross = "unknown".to_string(),
            _ => {}
        }

        wtr.serialize(&row)
            .with_context(|| format!("writing row {rank}"))?;
    }
    wtr.flush().context("flushing CSV")?;

    println!("Wrote {n_rows} movies to {output_path}");
    Ok(())
}

use std::path::Path;

use rusty_reel::data::{
    filter_movies, filtered_indices, load_csv_str, load_file, Choice, Decade, FilterCriteria,
    MovieDataset,
};

const SHAWSHANK: &str = "\
Poster_Link,Series_Title,Released_Year,Certificate,Runtime,Genre,IMDB_Rating,Overview,Meta_score,Director,Star1,Star2,Star3,Star4,No_of_Votes,Gross
https://m.media-amazon.com/images/M/shawshank.jpg,The Shawshank Redemption,1994,R,142 min,Drama,9.3,Two imprisoned men bond.,80,Frank Darabont,Tim Robbins,Morgan Freeman,Bob Gunton,William Sadler,2343110,\"$28,341,469\"
";

fn shawshank_only() -> MovieDataset {
    load_csv_str(SHAWSHANK).unwrap()
}

fn fixture() -> MovieDataset {
    load_file(Path::new("tests/fixtures/movies.csv")).unwrap()
}

fn criteria(genre: &str, decade: &str, min_rating: f64, certificate: &str, director: &str) -> FilterCriteria {
    FilterCriteria {
        genre: genre.to_string(),
        decade: if decade == "Any" {
            Choice::Any
        } else {
            Choice::Only(decade.parse::<Decade>().unwrap())
        },
        min_rating,
        certificate: if certificate == "Any" {
            Choice::Any
        } else {
            Choice::Only(certificate.to_string())
        },
        director_query: director.to_string(),
    }
}

fn titles(ds: &MovieDataset, c: &FilterCriteria) -> Vec<String> {
    filter_movies(ds, c).iter().map(|m| m.title.clone()).collect()
}

#[test]
fn drama_any_decade_returns_the_row() {
    let ds = shawshank_only();
    let out = filter_movies(&ds, &criteria("Drama", "Any", 9.0, "Any", ""));
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].title, "The Shawshank Redemption");
}

#[test]
fn comedy_returns_nothing() {
    let ds = shawshank_only();
    assert!(filter_movies(&ds, &criteria("Comedy", "Any", 9.0, "Any", "")).is_empty());
}

#[test]
fn nineties_lowercase_director_returns_the_row() {
    let ds = shawshank_only();
    let out = filter_movies(&ds, &criteria("Drama", "1990s", 9.0, "Any", "darabont"));
    assert_eq!(out.len(), 1);
}

#[test]
fn certificate_filter_on_single_row() {
    let ds = shawshank_only();
    assert_eq!(filter_movies(&ds, &criteria("Drama", "Any", 0.0, "R", "")).len(), 1);
    assert!(filter_movies(&ds, &criteria("Drama", "Any", 0.0, "PG", "")).is_empty());
}

#[test]
fn director_substring_keeps_source_order() {
    let ds = fixture();
    assert_eq!(
        titles(&ds, &criteria("Drama", "Any", 0.0, "Any", "nolan")),
        vec!["The Dark Knight", "The Prestige"]
    );
}

#[test]
fn decade_bucket_covers_ten_years() {
    let ds = fixture();
    assert_eq!(
        titles(&ds, &criteria("Drama", "1990s", 0.0, "Any", "")),
        vec!["The Shawshank Redemption", "Léon"]
    );
    assert_eq!(
        titles(&ds, &criteria("Drama", "2000s", 8.5, "UA", "")),
        vec!["The Dark Knight", "The Prestige"]
    );
}

#[test]
fn unknown_year_only_matches_zero_bucket() {
    let ds = fixture();
    assert_eq!(
        titles(&ds, &criteria("Adventure", "00s", 0.0, "Any", "")),
        vec!["Apollo 13"]
    );
    assert!(titles(&ds, &criteria("Adventure", "1990s", 0.0, "Any", ""))
        .iter()
        .all(|t| t != "Apollo 13"));
}

#[test]
fn tightening_never_grows_the_result() {
    let ds = fixture();
    for genre in ds.genre_options() {
        let loose = criteria(&genre, "Any", 0.0, "Any", "");
        let base = filter_movies(&ds, &loose).len();

        for rating in [7.0, 8.5, 9.0, 9.5] {
            let mut tighter = loose.clone();
            tighter.min_rating = rating;
            assert!(filter_movies(&ds, &tighter).len() <= base);
        }

        for decade in ds.decade_options() {
            let mut tighter = loose.clone();
            tighter.decade = decade;
            assert!(filter_movies(&ds, &tighter).len() <= base);
        }

        for query in ["a", "Nolan", "zzz"] {
            let mut tighter = loose.clone();
            tighter.director_query = query.to_string();
            assert!(filter_movies(&ds, &tighter).len() <= base);
        }
    }
}

#[test]
fn results_preserve_dataset_order() {
    let ds = fixture();
    let c = criteria("Crime", "Any", 8.0, "Any", "");
    let idx = filtered_indices(&ds, &c);
    assert!(idx.windows(2).all(|w| w[0] < w[1]));

    let movies = filter_movies(&ds, &c);
    assert_eq!(movies.len(), idx.len());
    for (movie, &i) in movies.iter().zip(&idx) {
        assert_eq!(*movie, &ds.movies()[i]);
    }
}

#[test]
fn impossible_criteria_yield_empty_result() {
    let ds = fixture();
    assert!(filter_movies(&ds, &criteria("Drama", "Any", 10.0, "Any", "")).is_empty());
    assert!(filter_movies(&ds, &criteria("", "Any", 0.0, "Any", "")).is_empty());
}

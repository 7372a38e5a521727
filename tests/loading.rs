use std::path::Path;

use rusty_reel::data::{load_csv_str, load_file, Choice, DataLoadError, MovieDataset};

fn fixture() -> MovieDataset {
    load_file(Path::new("tests/fixtures/movies.csv")).unwrap()
}

#[test]
fn fixture_drops_incomplete_rows() {
    let ds = fixture();
    assert_eq!(ds.len(), 9);
    assert_eq!(ds.dropped_rows(), 2);
    assert!(ds.movies().iter().all(|m| m.title != "Drishyam"));
    assert!(ds.movies().iter().all(|m| m.title != "Grave of the Fireflies"));
}

#[test]
fn every_loaded_row_is_complete_and_in_range() {
    let ds = fixture();
    for m in ds.movies() {
        assert!(!m.poster_url.is_empty());
        assert!(!m.title.is_empty());
        assert!(!m.certificate.is_empty());
        assert!(!m.runtime.is_empty());
        assert!(!m.genres.is_empty());
        assert!(!m.overview.is_empty());
        assert!(!m.director.is_empty());
        assert!(m.stars.iter().all(|s| !s.is_empty()));
        assert!((0.0..=10.0).contains(&m.imdb_rating), "{}", m.title);
    }
}

#[test]
fn currency_gross_is_cleaned() {
    let ds = fixture();
    let shawshank = &ds.movies()[0];
    assert_eq!(shawshank.title, "The Shawshank Redemption");
    assert_eq!(shawshank.gross, 28_341_469);
    assert_eq!(ds.movies()[1].gross, 134_966_411);
}

#[test]
fn malformed_year_is_kept_as_zero() {
    let ds = fixture();
    let apollo = ds
        .movies()
        .iter()
        .find(|m| m.title == "Apollo 13")
        .unwrap();
    assert_eq!(apollo.released_year, 0);
    assert_eq!(apollo.genres, vec!["Adventure", "Drama", "History"]);
    assert_eq!(apollo.decade().to_string(), "00s");
}

#[test]
fn loading_is_deterministic() {
    let text = std::fs::read_to_string("tests/fixtures/movies.csv").unwrap();
    let first = load_csv_str(&text).unwrap();
    let second = load_csv_str(&text).unwrap();
    assert_eq!(first.len(), second.len());
    assert_eq!(first.movies(), second.movies());
}

#[test]
fn option_lists() {
    let ds = fixture();

    let genres = ds.genre_options();
    assert_eq!(genres.first().map(String::as_str), Some("Action"));
    assert!(genres.windows(2).all(|w| w[0] < w[1]));
    assert!(genres.contains(&"Sci-Fi".to_string()));

    let decades: Vec<String> = ds.decade_options().iter().map(|d| d.to_string()).collect();
    assert_eq!(
        decades,
        vec!["Any", "00s", "1950s", "1960s", "1970s", "1990s", "2000s"]
    );

    assert_eq!(
        ds.certificate_options(),
        vec![
            Choice::Any,
            Choice::Only("A".to_string()),
            Choice::Only("U".to_string()),
            Choice::Only("UA".to_string()),
        ]
    );
}

#[test]
fn missing_columns_abort_the_load() {
    let input = "Poster_Link,Series_Title,Released_Year,Certificate,Runtime,Genre,IMDB_Rating,Overview,Meta_score,Director,Star1,Star2,Star3,Star4\n";
    let err = load_csv_str(input).unwrap_err();
    assert!(matches!(err, DataLoadError::MissingColumns { .. }));
    let msg = err.to_string();
    assert!(msg.contains("No_of_Votes, Gross"), "{msg}");
}

#[test]
fn unreadable_file_names_the_path() {
    let err = load_file(Path::new("tests/fixtures/no_such_file.csv")).unwrap_err();
    assert!(format!("{err:#}").contains("no_such_file.csv"));
}

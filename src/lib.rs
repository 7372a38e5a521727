//! Load the IMDb top movies table, clean it, and filter it by genre,
//! decade, rating, certificate and director.

pub mod data;

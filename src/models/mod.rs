pub mod error;
pub mod ergast;
pub mod race;
pub mod season;
pub mod standings;

pub mod proxy;
pub mod race;
pub mod seasons;

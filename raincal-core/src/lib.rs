pub mod calendar;
pub mod date_range;
pub mod error;
pub mod intensity;
pub mod location;
pub mod open_meteo;
pub mod sample;
pub mod summary;

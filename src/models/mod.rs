pub mod city;
pub mod filters;
pub mod trip;

pub use city::City;
pub use filters::{Day, FilterSpec, Month};
pub use trip::TripRecord;

mod city_limits;
mod persistence;
mod place_district_and_improvement;
mod toggle_river;

pub use persistence::*;

pub mod city;
pub mod municipality;
pub mod output;
pub mod point;
pub mod price;
pub mod resolution;
pub mod score;
pub mod tax;
pub mod travel_time;

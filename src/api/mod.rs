// Start of file: /src/api/mod.rs

/*
* HTTP endpoints grouped by feature, each exposing its own router.
*/

pub mod company;
pub mod echo;

// End of file: /src/api/mod.rs

// Start of file: /src/models/mod.rs

/*
* Domain types returned by the API.
*/

pub mod company;

pub use company::{CompanyRecord, CompanyStatus};

// End of file: /src/models/mod.rs

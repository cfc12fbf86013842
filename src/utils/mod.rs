// Start of file: /src/utils/mod.rs

/*
    * Re-exports for the utility modules: error handling,
    * the handler response type and JSON helpers.
*/

pub mod error_handler;
pub mod json;
pub mod response_handler;

// End of file: /src/utils/mod.rs

/*
* Company lookup endpoint: latest published company record.
*/

pub mod handler;
pub mod routes;

pub use routes::company_routes;

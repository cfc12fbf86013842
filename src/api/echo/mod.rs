/*
* Placeholder endpoint answering GET, POST and CORS preflight on /api.
*/

pub mod handler;
pub mod routes;

pub use routes::echo_routes;

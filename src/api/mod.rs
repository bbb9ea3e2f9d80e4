//! HTTP API module for the hello endpoint.

pub mod handlers;
pub mod routes;

pub use handlers::{HelloResponse, HELLO_MESSAGE, HELLO_PATH};
pub use routes::{create_router, hello_router};

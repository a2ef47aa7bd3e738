pub mod cli_args;
pub mod error;
pub mod extractor;
mod middleware;
pub mod openapi;
pub mod route;
pub mod server;
pub mod state;

//! API Module
//!
//! HTTP handlers, response assembly and routing for the file server.
//!
//! # Endpoints
//! - `GET /d20` - Roll a twenty-sided die
//! - `GET /date` - Server local time
//! - `GET /<path>` - Serve a file from the document root, through the cache
//! - anything else - The 404 page

pub mod handlers;
pub mod response;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;

//! Cross-cutting HTTP middleware: CORS policy and security headers.
//!
//! Both layers are already part of the stack `create_router` builds;
//! they are exported separately for apps that assemble their own.

pub mod cors;
pub mod security;

pub use cors::create_cors_layer;
pub use security::security_headers;

pub mod config;
pub mod dataset;
pub mod error;
pub mod observability;
pub mod routes;
pub mod server;

pub use config::Config;
pub use routes::{ProxyState, UpstreamState, proxy_router, upstream_router};

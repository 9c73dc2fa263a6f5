pub use web_config::{BackendConfig, CookieConfig, ServerConfig, WebConfig};

mod web_config;

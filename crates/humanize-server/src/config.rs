use std::time::Duration;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "humanize-server", about = "Text humanization API server")]
pub struct ServerConfig {
    /// Bind address
    #[arg(long, env = "HUMANIZE_BIND", default_value = "0.0.0.0")]
    pub bind: String,

    /// Listen port
    #[arg(long, env = "HUMANIZE_PORT", default_value = "3720")]
    pub port: u16,

    /// Credential for the chat-completion rewrite API.
    /// When absent, rewrite requests fail fast with a configuration error.
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    /// Credential for the detection API.
    /// When absent, detection runs in mock mode with synthetic scores.
    #[arg(long, env = "GPTZERO_API_KEY", hide_env_values = true)]
    pub gptzero_api_key: Option<String>,

    /// Base URL of the chat-completion API
    #[arg(
        long,
        env = "HUMANIZE_OPENAI_URL",
        default_value = "https://api.openai.com"
    )]
    pub openai_url: String,

    /// Base URL of the detection API
    #[arg(
        long,
        env = "HUMANIZE_GPTZERO_URL",
        default_value = "https://api.gptzero.me"
    )]
    pub gptzero_url: String,

    /// Model identifier sent with every rewrite call
    #[arg(long, env = "HUMANIZE_REWRITE_MODEL", default_value = "gpt-4.1")]
    pub rewrite_model: String,

    /// Timeout for each outbound upstream call (seconds)
    #[arg(long, env = "HUMANIZE_UPSTREAM_TIMEOUT", default_value = "30")]
    pub upstream_timeout: u64,
}

impl ServerConfig {
    /// Bounded timeout applied to every outbound upstream request.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout)
    }
}

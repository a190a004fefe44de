use anyhow::Result;
use clap_serde_derive::ClapSerde;
use serde::Deserialize;

#[derive(ClapSerde, Deserialize, Debug)]
pub struct Config {
    /// The address the listener binds to
    #[arg(short, long, env, default_value = "0.0.0.0")]
    pub address: String,

    /// The port the listener binds to
    #[arg(short, long, env, default_value = "8080")]
    pub port: u16,

    /// AWS region the Bedrock runtime is invoked in
    #[arg(long, env, default_value = "us-east-1")]
    pub region: String,

    /// Model that writes the blog posts
    #[arg(long, env, default_value = "us.amazon.nova-micro-v1:0")]
    pub model_id: String,

    /// Identifier of the guardrail bound to every model invocation
    #[arg(long, env, default_value = "")]
    pub guardrail_identifier: String,

    /// Version of the bound guardrail
    #[arg(long, env, default_value = "DRAFT")]
    pub guardrail_version: String,

    /// OTLP endpoint traces and metrics are exported to, console only when empty
    #[arg(long, env, default_value = "")]
    pub otlp_endpoint: String,
}

impl Config {
    pub fn from_toml(path: &str) -> Result<Self> {
        let str = std::fs::read_to_string(path)?;
        let config = toml::from_str(&str)?;
        Ok(config)
    }
}

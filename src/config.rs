// src/config.rs

//! Manages client configuration: defaults and loading from a TOML file.

use crate::core::protocol::DecodeHint;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::time::Duration;

/// The connection-default decoding applied when a command is issued with
/// `DecodeHint::Inherit`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ReplyDecoding {
    /// Hand bulk payloads to the caller as raw bytes.
    #[default]
    Raw,
    /// Decode bulk payloads as UTF-8 text.
    Utf8,
}

impl ReplyDecoding {
    pub fn as_hint(self) -> DecodeHint {
        match self {
            ReplyDecoding::Raw => DecodeHint::Raw,
            ReplyDecoding::Utf8 => DecodeHint::Utf8,
        }
    }
}

/// Client connection configuration.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// How long to wait for the TCP connect before giving up.
    #[serde(with = "humantime_serde", default = "default_connect_timeout")]
    pub connect_timeout: Duration,
    #[serde(default)]
    pub decode: ReplyDecoding,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    6379
}
fn default_connect_timeout() -> Duration {
    Duration::from_secs(10)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            connect_timeout: default_connect_timeout(),
            decode: ReplyDecoding::default(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file.
    pub fn from_file(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at '{path}'"))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse TOML from '{path}'"))?;
        Ok(config)
    }
}

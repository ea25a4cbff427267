//! Server configuration from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::Context;

/// Runtime configuration for the HTTP server
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// `BIND_ADDR` sets the interface (default all interfaces) and `PORT`
    /// the port (default 3000).
    pub fn from_env() -> anyhow::Result<Self> {
        let host: IpAddr = match std::env::var("BIND_ADDR") {
            Ok(value) => value.parse().context("BIND_ADDR is not a valid IP address")?,
            Err(_) => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let port: u16 = match std::env::var("PORT") {
            Ok(value) => value.parse().context("PORT is not a valid port number")?,
            Err(_) => 3000,
        };

        Ok(Self {
            bind_addr: SocketAddr::new(host, port),
        })
    }
}

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Gateway connection configuration.
//!
//! This module provides configuration options for the gateway client.

use std::time::Duration;

/// Configuration for a gateway connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Gateway host name (e.g., "pilot-payflowpro.paypal.com").
    pub host: String,
    /// Gateway port.
    pub port: u16,
    /// Overall request timeout.
    pub timeout: Duration,
    /// Optional proxy to route the connection through.
    pub proxy: Option<ProxyConfig>,
}

impl GatewayConfig {
    /// Creates a configuration for the given host with default settings.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: 443,
            timeout: Duration::from_secs(45),
            proxy: None,
        }
    }

    /// Sets the gateway port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the proxy configuration.
    #[must_use]
    pub fn with_proxy(mut self, proxy: ProxyConfig) -> Self {
        self.proxy = Some(proxy);
        self
    }

    /// Returns the timeout in milliseconds.
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout.as_millis() as u64
    }
}

/// Proxy settings for the gateway connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    /// Proxy host name.
    pub host: String,
    /// Proxy port.
    pub port: u16,
    /// Optional proxy user name.
    pub user: Option<String>,
    /// Optional proxy password.
    pub password: Option<String>,
}

impl ProxyConfig {
    /// Creates a proxy configuration without credentials.
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            user: None,
            password: None,
        }
    }

    /// Sets the proxy credentials.
    #[must_use]
    pub fn with_credentials(mut self, user: impl Into<String>, password: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self.password = Some(password.into());
        self
    }
}

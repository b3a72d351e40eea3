//! Candidate hosts, liveness probing, and failover resolution.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Liveness probe capability and TCP implementation.
pub mod probe;
/// First-reachable host selection.
pub mod resolver;

/// Address of the preferred service host.
pub const PRIMARY_ADDRESS: &str = "robot.hrdlog.net";
/// Address of the fallback service host.
pub const SECONDARY_ADDRESS: &str = "www.hrdlog.net";

/// URL scheme used to reach a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// Plain HTTP.
    Http,
    /// TLS-secured HTTP.
    #[default]
    Https,
}

impl Scheme {
    /// Scheme token as written in a URL.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }

    /// Well-known TCP port for the scheme.
    pub fn default_port(self) -> u16 {
        match self {
            Self::Http => 80,
            Self::Https => 443,
        }
    }
}

/// One candidate server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Host {
    /// DNS name or IP literal.
    pub address: String,
    /// Scheme used for both probing and posting.
    pub scheme: Scheme,
    /// Port override; the scheme's well-known port when `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

impl Host {
    /// Creates a host on the scheme's well-known port.
    pub fn new(address: impl Into<String>, scheme: Scheme) -> Self {
        Self {
            address: address.into(),
            scheme,
            port: None,
        }
    }

    /// Returns a copy using an explicit port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Port probed and connected to.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or_else(|| self.scheme.default_port())
    }

    /// Absolute URL for `path` on this host.
    pub fn url(&self, path: &str) -> String {
        match self.port {
            Some(port) => format!("{}://{}:{}{}", self.scheme.as_str(), self.address, port, path),
            None => format!("{}://{}{}", self.scheme.as_str(), self.address, path),
        }
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}:{}", self.scheme.as_str(), self.address, self.port())
    }
}

/// Named service hosts, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum KnownHost {
    /// `robot.hrdlog.net`.
    Primary,
    /// `www.hrdlog.net`.
    Secondary,
}

impl KnownHost {
    /// Fixed network address of the named host.
    pub fn address(self) -> &'static str {
        match self {
            Self::Primary => PRIMARY_ADDRESS,
            Self::Secondary => SECONDARY_ADDRESS,
        }
    }

    /// Host entry for this name over `scheme`.
    pub fn host(self, scheme: Scheme) -> Host {
        Host::new(self.address(), scheme)
    }
}

/// Returned when a host policy would have no candidates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("host policy needs at least one host")]
pub struct EmptyHostPolicy;

/// Ordered, non-empty list of candidate hosts. Earlier entries win.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Host>", into = "Vec<Host>")]
pub struct HostPolicy {
    hosts: Vec<Host>,
}

impl HostPolicy {
    /// Policy with exactly one host.
    pub fn single(host: Host) -> Self {
        Self { hosts: vec![host] }
    }

    /// Policy over an explicit priority-ordered list.
    pub fn ordered(hosts: Vec<Host>) -> Result<Self, EmptyHostPolicy> {
        if hosts.is_empty() {
            return Err(EmptyHostPolicy);
        }
        Ok(Self { hosts })
    }

    /// Policy over named hosts; primary always precedes secondary.
    pub fn known(names: &[KnownHost], scheme: Scheme) -> Result<Self, EmptyHostPolicy> {
        let mut names = names.to_vec();
        names.sort();
        names.dedup();
        Self::ordered(names.into_iter().map(|n| n.host(scheme)).collect())
    }

    /// Both service hosts over `scheme`.
    pub fn hrdlog(scheme: Scheme) -> Self {
        Self {
            hosts: vec![KnownHost::Primary.host(scheme), KnownHost::Secondary.host(scheme)],
        }
    }

    /// Candidates in probe order.
    pub fn hosts(&self) -> &[Host] {
        &self.hosts
    }
}

impl Default for HostPolicy {
    fn default() -> Self {
        Self::hrdlog(Scheme::Https)
    }
}

impl TryFrom<Vec<Host>> for HostPolicy {
    type Error = EmptyHostPolicy;

    fn try_from(value: Vec<Host>) -> Result<Self, Self::Error> {
        Self::ordered(value)
    }
}

impl From<HostPolicy> for Vec<Host> {
    fn from(value: HostPolicy) -> Self {
        value.hosts
    }
}

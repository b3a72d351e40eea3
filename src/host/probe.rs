//! Liveness probing.

use std::{io, time::Duration};

use async_trait::async_trait;
use tokio::net::TcpStream;

use super::Host;

/// Answers whether a host responds within a deadline.
///
/// Any `Err` is read as "unreachable" by the resolver; implementations do not
/// need to classify DNS failures versus timeouts.
#[async_trait]
pub trait Prober: Send + Sync {
    /// Probes `host`, giving up after `timeout`.
    async fn probe(&self, host: &Host, timeout: Duration) -> io::Result<()>;
}

/// Probes by opening (and immediately dropping) a TCP connection to the
/// host's HTTP port.
#[derive(Debug, Clone, Copy, Default)]
pub struct TcpProber;

#[async_trait]
impl Prober for TcpProber {
    async fn probe(&self, host: &Host, timeout: Duration) -> io::Result<()> {
        let connect = TcpStream::connect((host.address.as_str(), host.port()));
        match tokio::time::timeout(timeout, connect).await {
            Ok(stream) => stream.map(drop),
            Err(_) => Err(io::Error::new(io::ErrorKind::TimedOut, "probe timed out")),
        }
    }
}

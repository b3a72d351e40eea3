//! Sequential failover across the configured hosts.

use std::{sync::Arc, time::Duration};

use tracing::{debug, info, warn};

use super::{Host, HostPolicy, probe::Prober};

/// Picks the first host of a [`HostPolicy`] that answers its probe.
///
/// Nothing is cached: every call probes again from the top of the list, so a
/// recovered primary is preferred as soon as it answers.
#[derive(Clone)]
pub struct HostResolver {
    policy: HostPolicy,
    prober: Arc<dyn Prober>,
    timeout: Duration,
}

impl HostResolver {
    /// Creates a resolver probing each candidate for at most `timeout`.
    pub fn new(policy: HostPolicy, prober: Arc<dyn Prober>, timeout: Duration) -> Self {
        Self {
            policy,
            prober,
            timeout,
        }
    }

    /// Configured candidates.
    pub fn policy(&self) -> &HostPolicy {
        &self.policy
    }

    /// True when at least one candidate answers.
    pub async fn is_reachable(&self) -> bool {
        self.resolve().await.is_some()
    }

    /// First answering candidate in priority order, probing one at a time.
    pub async fn resolve(&self) -> Option<Host> {
        for host in self.policy.hosts() {
            match self.prober.probe(host, self.timeout).await {
                Ok(()) => {
                    info!(%host, "host reachable");
                    return Some(host.clone());
                }
                Err(err) => debug!(%host, error = %err, "probe failed"),
            }
        }
        warn!(candidates = self.policy.hosts().len(), "no host reachable");
        None
    }
}

#[cfg(test)]
mod tests {
    use std::{io, sync::Mutex};

    use async_trait::async_trait;

    use super::*;
    use crate::host::{KnownHost, Scheme};

    struct ScriptedProber {
        up: Vec<String>,
        seen: Mutex<Vec<String>>,
    }

    impl ScriptedProber {
        fn new(up: &[&str]) -> Arc<Self> {
            Arc::new(Self {
                up: up.iter().map(|s| s.to_string()).collect(),
                seen: Mutex::new(Vec::new()),
            })
        }

        fn seen(&self) -> Vec<String> {
            self.seen.lock().expect("lock").clone()
        }
    }

    #[async_trait]
    impl Prober for ScriptedProber {
        async fn probe(&self, host: &Host, _timeout: Duration) -> io::Result<()> {
            self.seen.lock().expect("lock").push(host.address.clone());
            if self.up.contains(&host.address) {
                Ok(())
            } else {
                Err(io::Error::new(io::ErrorKind::TimedOut, "down"))
            }
        }
    }

    fn resolver(prober: Arc<ScriptedProber>) -> HostResolver {
        HostResolver::new(
            HostPolicy::hrdlog(Scheme::Https),
            prober,
            Duration::from_secs(5),
        )
    }

    #[tokio::test]
    async fn primary_short_circuits_secondary() {
        let prober = ScriptedProber::new(&["robot.hrdlog.net", "www.hrdlog.net"]);
        let host = resolver(Arc::clone(&prober)).resolve().await;
        assert_eq!(host, Some(KnownHost::Primary.host(Scheme::Https)));
        assert_eq!(prober.seen(), vec!["robot.hrdlog.net"]);
    }

    #[tokio::test]
    async fn falls_over_to_secondary() {
        let prober = ScriptedProber::new(&["www.hrdlog.net"]);
        let host = resolver(Arc::clone(&prober)).resolve().await;
        assert_eq!(host, Some(KnownHost::Secondary.host(Scheme::Https)));
        assert_eq!(prober.seen(), vec!["robot.hrdlog.net", "www.hrdlog.net"]);
    }

    #[tokio::test]
    async fn exhaustion_yields_none() {
        let prober = ScriptedProber::new(&[]);
        let r = resolver(Arc::clone(&prober));
        assert_eq!(r.resolve().await, None);
        assert!(!r.is_reachable().await);
    }

    #[tokio::test]
    async fn every_call_probes_again() {
        let prober = ScriptedProber::new(&["robot.hrdlog.net"]);
        let r = resolver(Arc::clone(&prober));
        assert!(r.is_reachable().await);
        assert!(r.is_reachable().await);
        assert_eq!(prober.seen().len(), 2);
    }
}

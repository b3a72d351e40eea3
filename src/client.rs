//! Protocol client: resolve a host, post one form, decode the reply.

use std::{sync::Arc, time::Duration};

use tracing::{debug, warn};

use crate::{
    config::ClientConfig,
    error::{ClientError, Result, TransportError},
    host::{
        Host,
        probe::{Prober, TcpProber},
        resolver::HostResolver,
    },
    request::{FormRequest, OnAirStatus},
    response::{decode_new_entry, decode_on_air},
    transport::{HttpTransport, ReqwestTransport},
    types::{Command, Session, SubmissionResult},
};

/// Client for the QSO upload and on-air endpoints.
///
/// Holds only read-only state, so clones and concurrent calls are
/// independent. Each operation probes for a live host, sends a single POST,
/// and never retries.
#[derive(Clone)]
pub struct ProtocolClient {
    session: Session,
    resolver: HostResolver,
    transport: Arc<dyn HttpTransport>,
    request_timeout: Duration,
}

impl ProtocolClient {
    /// Creates a client using TCP liveness probes and a `reqwest` transport.
    pub fn new(session: Session, config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(config.user_agent.as_deref())?;
        Ok(Self::with_parts(
            session,
            config,
            Arc::new(transport),
            Arc::new(TcpProber),
        ))
    }

    /// Creates a client over caller-supplied collaborators.
    pub fn with_parts(
        session: Session,
        config: ClientConfig,
        transport: Arc<dyn HttpTransport>,
        prober: Arc<dyn Prober>,
    ) -> Self {
        let request_timeout = config.request_timeout();
        let probe_timeout = config.probe_timeout();
        let resolver = HostResolver::new(config.hosts, prober, probe_timeout);
        Self {
            session,
            resolver,
            transport,
            request_timeout,
        }
    }

    /// Session identity sent with every request.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// True when at least one configured host answers its probe.
    pub async fn is_reachable(&self) -> bool {
        self.resolver.is_reachable().await
    }

    /// First configured host that answers its probe.
    pub async fn resolve_host(&self) -> Option<Host> {
        self.resolver.resolve().await
    }

    /// Submits a QSO insert, delete, or update.
    ///
    /// `record` is required for `Insert`/`Update` and `key` for
    /// `Delete`/`Update`; a missing one fails with
    /// [`ClientError::Contract`] before any network activity. Server-side
    /// rejections are returned in the [`SubmissionResult`].
    pub async fn submit_qso(
        &self,
        command: Command,
        record: Option<&str>,
        key: Option<&str>,
    ) -> Result<SubmissionResult> {
        let req = FormRequest::new_entry(&self.session, command, record, key)?;
        let body = self.post(&req).await?;
        Ok(decode_new_entry(&body, command))
    }

    /// Inserts a new ADIF record.
    pub async fn insert_qso(&self, record: &str) -> Result<SubmissionResult> {
        self.submit_qso(Command::Insert, Some(record), None).await
    }

    /// Deletes the QSO identified by the ADIF `key` (call, date, start time).
    pub async fn delete_qso(&self, key: &str) -> Result<SubmissionResult> {
        self.submit_qso(Command::Delete, None, Some(key)).await
    }

    /// Replaces the QSO identified by `key` with `record`.
    pub async fn update_qso(&self, key: &str, record: &str) -> Result<SubmissionResult> {
        self.submit_qso(Command::Update, Some(record), Some(key)).await
    }

    /// Publishes frequency, mode, and rig as the live on-air status.
    pub async fn push_on_air(&self, frequency_hz: u64, mode: &str, rig: &str) -> Result<bool> {
        self.push_on_air_status(&OnAirStatus::new(frequency_hz, mode, rig))
            .await
    }

    /// Publishes an on-air status including any optional fields.
    pub async fn push_on_air_status(&self, status: &OnAirStatus) -> Result<bool> {
        let req = FormRequest::on_air(&self.session, status);
        let body = self.post(&req).await?;
        Ok(decode_on_air(&body))
    }

    async fn post(&self, req: &FormRequest) -> Result<String> {
        let host = self
            .resolver
            .resolve()
            .await
            .ok_or(ClientError::Connectivity)?;
        let url = host.url(req.path);
        debug!(%url, fields = req.fields.len(), "posting form");

        let response = self
            .transport
            .post_form(&url, &req.fields, self.request_timeout)
            .await?;
        if !response.is_success() {
            warn!(%url, status = response.status, "server rejected request");
            return Err(TransportError::Status(response.status).into());
        }
        Ok(response.body)
    }
}

//! Form payload construction for each endpoint.

use serde::{Deserialize, Serialize};

use crate::{
    error::ContractError,
    types::{Command, Session},
};

/// Path of the QSO submission endpoint.
pub const NEW_ENTRY_PATH: &str = "/NewEntry.aspx";
/// Path of the on-air status endpoint.
pub const ON_AIR_PATH: &str = "/OnAir.aspx";

/// Form-encoded POST body plus its target path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRequest {
    /// Endpoint path, appended to the resolved host.
    pub path: &'static str,
    /// Field pairs in insertion order.
    pub fields: Vec<(String, String)>,
}

impl FormRequest {
    fn new(path: &'static str, session: &Session) -> Self {
        let mut req = Self {
            path,
            fields: Vec::with_capacity(8),
        };
        req.push("Callsign", &session.callsign);
        req.push("Code", &session.upload_code);
        req.push("App", &session.app_name);
        req
    }

    fn push(&mut self, name: &str, value: impl Into<String>) {
        self.fields.push((name.to_string(), value.into()));
    }

    /// Value of the first field called `name`.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Builds a `NewEntry` submission, enforcing the command's required fields.
    ///
    /// Empty strings count as missing.
    pub fn new_entry(
        session: &Session,
        command: Command,
        record: Option<&str>,
        key: Option<&str>,
    ) -> Result<Self, ContractError> {
        let record = record.filter(|s| !s.is_empty());
        let key = key.filter(|s| !s.is_empty());

        if command.needs_record() && record.is_none() {
            return Err(ContractError::MissingRecord(command));
        }
        if command.needs_key() && key.is_none() {
            return Err(ContractError::MissingKey(command));
        }

        let mut req = Self::new(NEW_ENTRY_PATH, session);
        if let Some(cmd) = command.wire_name() {
            req.push("Cmd", cmd);
        }
        if let Some(key) = key.filter(|_| command.needs_key()) {
            req.push("ADIFKey", key);
        }
        if let Some(record) = record.filter(|_| command.needs_record()) {
            req.push("ADIFData", record);
        }
        Ok(req)
    }

    /// Builds an `OnAir` status push.
    pub fn on_air(session: &Session, status: &OnAirStatus) -> Self {
        let mut req = Self::new(ON_AIR_PATH, session);
        req.push("Frequency", status.frequency_hz.to_string());
        req.push("Mode", &status.mode);
        req.push("Radio", &status.rig);
        if let Some(v) = status.azimuth {
            req.push("Azimuth", v.to_string());
        }
        if let Some(v) = status.latitude {
            req.push("Lat", v.to_string());
        }
        if let Some(v) = status.longitude {
            req.push("Long", v.to_string());
        }
        if let Some(v) = &status.status {
            req.push("Status", v);
        }
        if let Some(v) = &status.station {
            req.push("Station", v);
        }
        req
    }
}

/// Live on-air status for the `OnAir` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OnAirStatus {
    /// Dial frequency in Hz.
    pub frequency_hz: u64,
    /// Transceiver mode, e.g. `USB`.
    pub mode: String,
    /// Transceiver name.
    pub rig: String,
    /// Antenna azimuth in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azimuth: Option<f64>,
    /// Station latitude in decimal degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Station longitude in decimal degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Free text shown in the service's public chat.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Station label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub station: Option<String>,
}

impl OnAirStatus {
    /// Status with only the mandatory fields set.
    pub fn new(frequency_hz: u64, mode: impl Into<String>, rig: impl Into<String>) -> Self {
        Self {
            frequency_hz,
            mode: mode.into(),
            rig: rig.into(),
            ..Self::default()
        }
    }
}

//! Client for the HRDLog.net QSO upload and on-air status service.
//!
//! # Examples
//!
//! Decoding a reply without touching the network:
//! ```
//! use hrdlog::{
//!     response::decode_new_entry,
//!     types::{Command, ResponseStatus},
//! };
//!
//! let body = r#"<HRDLog xmlns="http://xml.hrdlog.com"><NewEntry><insert>1</insert></NewEntry></HRDLog>"#;
//! let result = decode_new_entry(body, Command::Insert);
//! assert_eq!(result.status, ResponseStatus::Ok);
//! ```
//!
//! Submitting a QSO and pushing on-air status:
//! ```no_run
//! use hrdlog::{client::ProtocolClient, config::ClientConfig, types::Session};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let session = Session::new("TEST", "0000000000", "my-logger");
//! let client = ProtocolClient::new(session, ClientConfig::default()).expect("client");
//! let result = client
//!     .insert_qso("<call:4>TEST <qso_date:8:d>20090113 <time_on:6>210237 <EOR>")
//!     .await
//!     .expect("submit");
//! println!("{:?}", result.status);
//! let on_air = client.push_on_air(7_100_000, "USB", "TESTING").await.expect("on air");
//! assert!(on_air);
//! # }
//! ```
#![deny(missing_docs)]

/// Protocol client entry point.
pub mod client;
/// Host policy and timeouts.
pub mod config;
/// Error taxonomy.
pub mod error;
/// Candidate hosts and failover.
pub mod host;
/// Form payload builders.
pub mod request;
/// XML reply decoders.
pub mod response;
/// HTTP transport capability.
pub mod transport;
/// Session, command, and outcome types.
pub mod types;

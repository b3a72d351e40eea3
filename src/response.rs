//! Decoding of the service's XML reply envelopes.
//!
//! Replies look like
//!
//! ```xml
//! <HRDLog xmlns="http://xml.hrdlog.com">
//!   <NewEntry><insert>1</insert></NewEntry>
//! </HRDLog>
//! ```
//!
//! with the operation element (`NewEntry` or `OnAir`) directly under the root
//! and holding either a success child or an `error` child. Anything else
//! decodes to a failed outcome rather than an error.

use roxmltree::{Document, Node};
use tracing::debug;

use crate::types::{Command, ResponseStatus, SubmissionResult};

/// Namespace of every element in a reply.
pub const NAMESPACE: &str = "http://xml.hrdlog.com";

const NEW_ENTRY: &str = "NewEntry";
const ON_AIR: &str = "OnAir";
const ERROR: &str = "error";
const UNKNOWN_USER: &str = "Unknown user";

fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|n| n.is_element() && n.has_tag_name((NAMESPACE, name)))
}

fn text_of(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

/// Decodes a `NewEntry` reply for `command`.
///
/// A success child whose text is not an integer, or is zero, means the record
/// was already on file.
pub fn decode_new_entry(body: &str, command: Command) -> SubmissionResult {
    let result = match Document::parse(body) {
        Ok(doc) => match child(doc.root_element(), NEW_ENTRY) {
            Some(entry) => interpret_entry(entry, command),
            None => SubmissionResult::bare(ResponseStatus::Error),
        },
        Err(err) => {
            debug!(error = %err, "malformed NewEntry reply");
            SubmissionResult::bare(ResponseStatus::Error)
        }
    };
    debug!(?command, status = ?result.status, message = ?result.message, "decoded NewEntry");
    result
}

fn interpret_entry(entry: Node<'_, '_>, command: Command) -> SubmissionResult {
    let success = child(entry, command.reply_element());
    let error = child(entry, ERROR);

    match (success, error) {
        (Some(success), None) => {
            let text = text_of(success).trim().to_string();
            let status = match text.parse::<i32>() {
                Ok(0) | Err(_) => ResponseStatus::Dupe,
                Ok(_) => ResponseStatus::Ok,
            };
            SubmissionResult {
                status,
                message: non_empty(text),
            }
        }
        (_, Some(error)) => {
            let text = text_of(error);
            let status = if text == UNKNOWN_USER {
                ResponseStatus::UnknownUser
            } else {
                ResponseStatus::Error
            };
            SubmissionResult {
                status,
                message: non_empty(text),
            }
        }
        (None, None) => SubmissionResult::bare(ResponseStatus::Error),
    }
}

/// Decodes an `OnAir` reply: true only for an `insert` child with no `error`.
pub fn decode_on_air(body: &str) -> bool {
    let Ok(doc) = Document::parse(body) else {
        debug!("malformed OnAir reply");
        return false;
    };
    let accepted = child(doc.root_element(), ON_AIR).is_some_and(|entry| {
        child(entry, Command::Insert.reply_element()).is_some() && child(entry, ERROR).is_none()
    });
    debug!(accepted, "decoded OnAir");
    accepted
}

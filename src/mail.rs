//! Mail-transport interface.
//!
//! The SMTP implementation is an external collaborator; this crate only
//! defines the contract it must satisfy. A transport wrapped in
//! [`with_retry`](crate::core::with_retry) is assumed to either fully fail
//! before handing the message to the target system or to target a system
//! that tolerates duplicates — the wrapper does not verify single delivery.

use std::future::Future;
use std::pin::Pin;

use serde::Serialize;

use crate::core::BriefError;

/// The outcome of handing a rendered newsletter to the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendReceipt {
    pub success: bool,
    /// Transport-assigned message identifier, when one exists.
    pub message_id: Option<String>,
    /// Addresses the message was accepted for.
    pub recipients: Vec<String>,
    /// Unix timestamp (seconds) of the send.
    pub sent_at: i64,
}

/// A capability interface for anything that can deliver the rendered
/// newsletter HTML.
pub trait MailTransport: Send + Sync {
    fn send<'a>(
        &'a self,
        html: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<SendReceipt, BriefError>> + Send + 'a>>;
}

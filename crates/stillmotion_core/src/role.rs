//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Sender of a message.
///
/// System instructions travel in [`GenerateRequest::system`](crate::GenerateRequest),
/// so only the two conversational roles exist here.
///
/// ```
/// use stillmotion_core::Role;
///
/// assert_eq!(format!("{}", Role::User), "user");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Messages from the caller
    #[display("user")]
    User,
    /// Messages from the model
    #[display("assistant")]
    Assistant,
}

use serde::{Deserialize, Serialize};

/// One-shot notification for the operator, e.g. feedback on an RC
/// stick command. A notification is displayed for exactly one blink
/// pattern window and is consumed by being displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Notification {
    /// A requested action was carried out.
    Ok,

    /// A requested action was rejected or failed.
    NotOk,

    /// Something needs the operator's attention.
    DrawAttention,
}

use serde::{Deserialize, Serialize};

/// JSON body posted to the form relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Address the relay forwards the message to.
    pub to: String,
}

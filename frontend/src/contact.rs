use gloo_timers::future::TimeoutFuture;
use log::info;
use serde::Serialize;

use crate::config;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

impl ContactFields {
    /// Enough to enable the send button. Not a validation pass.
    pub fn is_ready(&self) -> bool {
        !self.name.trim().is_empty()
            && self.email.contains('@')
            && !self.message.trim().is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Sending,
    Sent,
}

/// Hand the enquiry off. There is no backend yet, so this logs the payload
/// and resolves after a fixed delay.
pub async fn submit(fields: ContactFields) {
    let payload = serde_json::to_string(&fields).unwrap_or_default();
    info!("Submitting contact request: {}", payload);
    TimeoutFuture::new(config::SUBMIT_DELAY_MS).await;
    info!("Contact request from {} accepted", fields.name);
}

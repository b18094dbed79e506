use serde::{Deserialize, Serialize};
use crate::ssl::enums::notification_policy::NotificationPolicy;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ReloaderConfig {
    /// Attempts at re-adding a watch after the file was replaced.
    pub resubscribe_attempts: u32,
    /// Pause between two re-subscribe attempts.
    pub resubscribe_delay_ms: u64,
    pub notification_policy: NotificationPolicy,
    /// Capacity of the reload notification channel.
    pub notification_buffer: usize
}

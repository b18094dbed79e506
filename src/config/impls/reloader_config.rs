use std::time::Duration;
use crate::config::structs::reloader_config::ReloaderConfig;
use crate::ssl::enums::notification_policy::NotificationPolicy;

impl Default for ReloaderConfig {
    fn default() -> Self {
        ReloaderConfig {
            resubscribe_attempts: 10,
            resubscribe_delay_ms: 100,
            notification_policy: NotificationPolicy::drop_when_full,
            notification_buffer: 16
        }
    }
}

impl ReloaderConfig {
    pub fn resubscribe_delay(&self) -> Duration {
        Duration::from_millis(self.resubscribe_delay_ms)
    }
}

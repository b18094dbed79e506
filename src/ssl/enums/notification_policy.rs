use serde::{Deserialize, Serialize};

#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, Hash, Eq, PartialEq)]
pub enum NotificationPolicy {
    /// `try_send`; a full channel drops the signal, reloads never stall.
    #[default]
    drop_when_full,
    /// Wait for channel capacity. Still interrupted by a stop request.
    wait,
}

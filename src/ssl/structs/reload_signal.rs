use crate::ssl::structs::certificate_bundle::CertificateBundle;
use crate::ssl::structs::reload_event::ReloadEvent;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ReloadSignal {
    pub bundle: Arc<CertificateBundle>,
    pub event: ReloadEvent,
}

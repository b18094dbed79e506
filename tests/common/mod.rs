#![allow(dead_code)]
use async_trait::async_trait;
use parking_lot::Mutex;
use rustls::client::danger::{HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier};
use rustls::crypto::CryptoProvider;
use rustls::pki_types::{CertificateDer, ServerName, UnixTime};
use rustls::{
    ClientConfig, ClientConnection, DigitallySignedStruct, ProtocolVersion, ServerConfig, ServerConnection, SignatureScheme,
    SupportedProtocolVersion,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tempfile::TempDir;
use tls_hotreload::config::structs::reloader_config::ReloaderConfig;
use tls_hotreload::ssl::enums::watch_event_kind::WatchEventKind;
use tls_hotreload::ssl::enums::watcher_error::WatcherError;
use tls_hotreload::ssl::ssl::generate_self_signed;
use tls_hotreload::ssl::structs::certificate_bundle::CertificateBundle;
use tls_hotreload::ssl::structs::certificate_paths::CertificatePaths;
use tls_hotreload::ssl::structs::watch_event::WatchEvent;
use tls_hotreload::ssl::traits::file_watcher::FileWatcher;
use tokio::sync::mpsc;

pub fn pem_pair(days: u64) -> (String, String) {
    generate_self_signed(vec!["localhost".to_string()], days).unwrap()
}

pub fn create_test_bundle(days: u64) -> Arc<CertificateBundle> {
    let (cert, key) = pem_pair(days);
    Arc::new(CertificateBundle::from_pem(cert.as_bytes(), key.as_bytes()).unwrap())
}

pub fn create_test_reloader_config() -> ReloaderConfig {
    ReloaderConfig {
        resubscribe_attempts: 3,
        resubscribe_delay_ms: 10,
        ..ReloaderConfig::default()
    }
}

/// Certificate and key files inside a private temporary directory.
pub struct CertFixture {
    pub dir: TempDir,
    pub cert_path: PathBuf,
    pub key_path: PathBuf,
}

impl CertFixture {
    pub fn new(days: u64) -> CertFixture {
        let dir = TempDir::new().unwrap();
        let cert_path = dir.path().join("tls.crt");
        let key_path = dir.path().join("tls.key");
        let fixture = CertFixture { dir, cert_path, key_path };
        fixture.write_pair(days);
        fixture
    }

    pub fn paths(&self) -> CertificatePaths {
        CertificatePaths::new(self.cert_path.to_str().unwrap(), self.key_path.to_str().unwrap())
    }

    /// Overwrites both files in place, key first.
    pub fn write_pair(&self, days: u64) {
        let (cert, key) = pem_pair(days);
        std::fs::write(&self.key_path, key).unwrap();
        std::fs::write(&self.cert_path, cert).unwrap();
    }

    /// Replaces both files through a rename, the way orchestrators publish secrets.
    pub fn replace_pair(&self, days: u64) {
        let (cert, key) = pem_pair(days);
        self.replace_file(&self.key_path, key.as_bytes());
        self.replace_file(&self.cert_path, cert.as_bytes());
    }

    pub fn replace_file(&self, target: &Path, data: &[u8]) {
        let staging = self.dir.path().join(".staging");
        std::fs::write(&staging, data).unwrap();
        std::fs::rename(&staging, target).unwrap();
    }
}

/// What the fake watcher was asked to do, shared with the test.
#[derive(Default)]
pub struct FakeWatcherState {
    pub watched: Mutex<Vec<PathBuf>>,
    pub unwatched: Mutex<Vec<PathBuf>>,
    pub resubscribed: Mutex<Vec<PathBuf>>,
    /// Number of upcoming `watch` calls that fail.
    pub watch_failures: AtomicUsize,
    /// Number of times the reload loop asked for the next event.
    pub polls: AtomicUsize,
}

impl FakeWatcherState {
    pub fn polls(&self) -> usize {
        self.polls.load(Ordering::SeqCst)
    }
}

pub struct FakeFileWatcher {
    pub events: mpsc::UnboundedReceiver<Result<WatchEvent, WatcherError>>,
    pub state: Arc<FakeWatcherState>,
}

pub struct FakeWatcherHandle {
    pub tx: mpsc::UnboundedSender<Result<WatchEvent, WatcherError>>,
    pub state: Arc<FakeWatcherState>,
}

impl FakeWatcherHandle {
    pub fn emit(&self, kind: WatchEventKind, path: &Path) {
        self.tx.send(Ok(WatchEvent::new(kind, path))).unwrap();
    }

    /// Waits until the reload loop has fully handled everything sent so far.
    pub async fn wait_for_polls(&self, polls: usize) -> bool {
        let state = self.state.clone();
        wait_until(Duration::from_secs(5), move || state.polls() >= polls).await
    }
}

pub fn create_fake_watcher() -> (FakeFileWatcher, FakeWatcherHandle) {
    let (tx, events) = mpsc::unbounded_channel();
    let state = Arc::new(FakeWatcherState::default());
    (
        FakeFileWatcher { events, state: state.clone() },
        FakeWatcherHandle { tx, state },
    )
}

#[async_trait]
impl FileWatcher for FakeFileWatcher {
    fn watch(&mut self, path: &Path) -> Result<(), WatcherError> {
        let failures = self.state.watch_failures.load(Ordering::SeqCst);
        if failures > 0 {
            self.state.watch_failures.store(failures - 1, Ordering::SeqCst);
            return Err(WatcherError::Watch {
                path: path.display().to_string(),
                reason: "No such file or directory".to_string(),
            });
        }
        self.state.watched.lock().push(path.to_path_buf());
        Ok(())
    }

    fn unwatch(&mut self, path: &Path) -> Result<(), WatcherError> {
        self.state.unwatched.lock().push(path.to_path_buf());
        Ok(())
    }

    fn resubscribe(&mut self, path: &Path) -> Result<(), WatcherError> {
        self.state.resubscribed.lock().push(path.to_path_buf());
        let _ = self.unwatch(path);
        self.watch(path)
    }

    async fn next_event(&mut self) -> Option<Result<WatchEvent, WatcherError>> {
        self.state.polls.fetch_add(1, Ordering::SeqCst);
        self.events.recv().await
    }
}

pub async fn wait_until(timeout: Duration, condition: impl Fn() -> bool) -> bool {
    let deadline = tokio::time::Instant::now() + timeout;
    loop {
        if condition() {
            return true;
        }
        if tokio::time::Instant::now() >= deadline {
            return false;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

#[derive(Debug)]
struct AcceptAnyServerCert(Arc<CryptoProvider>);

impl ServerCertVerifier for AcceptAnyServerCert {
    fn verify_server_cert(
        &self,
        _end_entity: &CertificateDer<'_>,
        _intermediates: &[CertificateDer<'_>],
        _server_name: &ServerName<'_>,
        _ocsp_response: &[u8],
        _now: UnixTime,
    ) -> Result<ServerCertVerified, rustls::Error> {
        Ok(ServerCertVerified::assertion())
    }

    fn verify_tls12_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        rustls::crypto::verify_tls12_signature(message, cert, dss, &self.0.signature_verification_algorithms)
    }

    fn verify_tls13_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        rustls::crypto::verify_tls13_signature(message, cert, dss, &self.0.signature_verification_algorithms)
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        self.0.signature_verification_algorithms.supported_schemes()
    }
}

fn client_to_server(client: &mut ClientConnection, server: &mut ServerConnection) {
    let mut buffer = Vec::new();
    while client.wants_write() {
        client.write_tls(&mut buffer).unwrap();
    }
    let mut reader = buffer.as_slice();
    while !reader.is_empty() {
        server.read_tls(&mut reader).unwrap();
        server.process_new_packets().unwrap();
    }
}

fn server_to_client(server: &mut ServerConnection, client: &mut ClientConnection) {
    let mut buffer = Vec::new();
    while server.wants_write() {
        server.write_tls(&mut buffer).unwrap();
    }
    let mut reader = buffer.as_slice();
    while !reader.is_empty() {
        client.read_tls(&mut reader).unwrap();
        client.process_new_packets().unwrap();
    }
}

/// Runs a full TLS handshake in memory and returns the chain the client was shown.
pub fn handshake(server_config: Arc<ServerConfig>) -> Vec<CertificateDer<'static>> {
    handshake_with_versions(server_config, rustls::DEFAULT_VERSIONS).0
}

/// Same as `handshake` with the client limited to `versions`; also returns the
/// negotiated protocol version.
pub fn handshake_with_versions(
    server_config: Arc<ServerConfig>,
    versions: &[&'static SupportedProtocolVersion],
) -> (Vec<CertificateDer<'static>>, ProtocolVersion) {
    let provider = Arc::new(rustls::crypto::ring::default_provider());
    let client_config = ClientConfig::builder_with_provider(provider.clone())
        .with_protocol_versions(versions)
        .unwrap()
        .dangerous()
        .with_custom_certificate_verifier(Arc::new(AcceptAnyServerCert(provider)))
        .with_no_client_auth();
    let mut client = ClientConnection::new(
        Arc::new(client_config),
        ServerName::try_from("localhost").unwrap(),
    )
    .unwrap();
    let mut server = ServerConnection::new(server_config).unwrap();

    let mut rounds = 0;
    while client.is_handshaking() || server.is_handshaking() {
        client_to_server(&mut client, &mut server);
        server_to_client(&mut server, &mut client);
        rounds += 1;
        assert!(rounds < 10, "handshake did not complete");
    }

    let chain = client
        .peer_certificates()
        .unwrap()
        .iter()
        .map(|cert| cert.clone().into_owned())
        .collect();
    (chain, client.protocol_version().unwrap())
}

/// Validity window of a DER certificate in whole days.
pub fn validity_days(cert: &CertificateDer<'_>) -> i64 {
    let (_, parsed) = x509_parser::parse_x509_certificate(cert.as_ref()).unwrap();
    let validity = parsed.validity();
    (validity.not_after.timestamp() - validity.not_before.timestamp()) / 86_400
}

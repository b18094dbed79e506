mod common;

use std::sync::Arc;
use std::time::Duration;
use tls_hotreload::config::structs::reloader_config::ReloaderConfig;
use tls_hotreload::ssl::enums::watch_event_kind::WatchEventKind;
use tls_hotreload::ssl::structs::certificate_paths::CertificatePaths;
use tls_hotreload::ssl::structs::certificate_reloader::CertificateReloader;
use tls_hotreload::ssl::structs::reload_signal::ReloadSignal;
use tokio::sync::mpsc;

async fn wait_for_validity(reloader: &CertificateReloader, days: i64) -> bool {
    let store = reloader.store();
    common::wait_until(Duration::from_secs(5), move || {
        store.get().validity() == chrono::TimeDelta::days(days)
    })
    .await
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_rewritten_files_are_served_to_new_handshakes() {
    let fixture = common::CertFixture::new(360);
    let (tx, mut rx) = mpsc::channel::<ReloadSignal>(16);
    let reloader = CertificateReloader::start(fixture.paths(), common::create_test_reloader_config(), Some(tx)).unwrap();
    let server_config = Arc::new(reloader.server_config().unwrap());

    let chain = common::handshake(server_config.clone());
    assert_eq!(common::validity_days(&chain[0]), 360);

    tokio::time::sleep(Duration::from_millis(100)).await;
    fixture.write_pair(350);
    assert!(wait_for_validity(&reloader, 350).await);

    let chain = common::handshake(server_config);
    assert_eq!(common::validity_days(&chain[0]), 350);

    let signal = tokio::time::timeout(Duration::from_secs(5), rx.recv()).await.unwrap().unwrap();
    assert!(signal.bundle.certified_key.keys_match().is_ok());

    reloader.stop();
    reloader.stopped().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_renamed_files_are_picked_up_repeatedly() {
    let fixture = common::CertFixture::new(360);
    let reloader = CertificateReloader::start(fixture.paths(), common::create_test_reloader_config(), None).unwrap();

    tokio::time::sleep(Duration::from_millis(100)).await;
    fixture.replace_pair(350);
    assert!(wait_for_validity(&reloader, 350).await);

    // the watch has to survive the first replacement
    tokio::time::sleep(Duration::from_millis(100)).await;
    fixture.replace_pair(340);
    assert!(wait_for_validity(&reloader, 340).await);

    reloader.stop();
    reloader.stopped().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_removed_and_recreated_certificate() {
    let fixture = common::CertFixture::new(360);
    let (tx, mut rx) = mpsc::channel::<ReloadSignal>(16);
    let reloader = CertificateReloader::start(fixture.paths(), ReloaderConfig::default(), Some(tx)).unwrap();
    let initial = reloader.get_certificate();

    tokio::time::sleep(Duration::from_millis(100)).await;
    let (cert, key) = common::pem_pair(350);
    std::fs::remove_file(&fixture.cert_path).unwrap();
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(Arc::ptr_eq(&initial, &reloader.get_certificate()));

    fixture.replace_file(&fixture.key_path, key.as_bytes());
    fixture.replace_file(&fixture.cert_path, cert.as_bytes());
    assert!(wait_for_validity(&reloader, 350).await);

    let mut saw_removal = false;
    while let Ok(signal) = rx.try_recv() {
        saw_removal |= signal.event.kind == WatchEventKind::Removed;
    }
    assert!(saw_removal);

    // and the recreated file is watched again
    tokio::time::sleep(Duration::from_millis(100)).await;
    fixture.write_pair(340);
    assert!(wait_for_validity(&reloader, 340).await);

    reloader.stop();
    reloader.stopped().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_broken_rewrite_keeps_serving_previous_pair() {
    let fixture = common::CertFixture::new(360);
    let reloader = CertificateReloader::start(fixture.paths(), common::create_test_reloader_config(), None).unwrap();
    let initial = reloader.get_certificate();

    tokio::time::sleep(Duration::from_millis(100)).await;
    std::fs::write(&fixture.cert_path, "garbage").unwrap();
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert!(Arc::ptr_eq(&initial, &reloader.get_certificate()));
    assert!(reloader.is_running());

    fixture.write_pair(350);
    assert!(wait_for_validity(&reloader, 350).await);

    reloader.stop();
    reloader.stopped().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_stopped_reloader_ignores_changes() {
    let fixture = common::CertFixture::new(360);
    let reloader = CertificateReloader::start(fixture.paths(), common::create_test_reloader_config(), None).unwrap();

    reloader.stop();
    let stopped = tokio::time::timeout(Duration::from_secs(1), reloader.stopped()).await;
    assert!(stopped.is_ok());
    assert!(!reloader.is_running());

    fixture.write_pair(350);
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(reloader.get_certificate().validity(), chrono::TimeDelta::days(360));
}

/// Secret volume layout: `tls.crt -> ..data/tls.crt`, `..data -> ..<version>`.
#[cfg(unix)]
struct ProjectedVolume {
    dir: tempfile::TempDir,
    version: std::cell::Cell<u32>,
}

#[cfg(unix)]
impl ProjectedVolume {
    fn new(days: u64) -> ProjectedVolume {
        use std::os::unix::fs::symlink;

        let volume = ProjectedVolume { dir: tempfile::TempDir::new().unwrap(), version: std::cell::Cell::new(0) };
        volume.publish(days);
        symlink("..data/tls.crt", volume.dir.path().join("tls.crt")).unwrap();
        symlink("..data/tls.key", volume.dir.path().join("tls.key")).unwrap();
        volume
    }

    fn paths(&self) -> CertificatePaths {
        CertificatePaths::new(
            self.dir.path().join("tls.crt").to_str().unwrap(),
            self.dir.path().join("tls.key").to_str().unwrap(),
        )
    }

    /// Writes a new version directory, repoints `..data` with a rename and
    /// deletes the previous version.
    fn publish(&self, days: u64) {
        use std::os::unix::fs::symlink;

        let previous = self.version.get();
        let next = previous + 1;
        let version_dir = format!("..v{next}");
        let (cert, key) = common::pem_pair(days);
        std::fs::create_dir(self.dir.path().join(&version_dir)).unwrap();
        std::fs::write(self.dir.path().join(&version_dir).join("tls.crt"), cert).unwrap();
        std::fs::write(self.dir.path().join(&version_dir).join("tls.key"), key).unwrap();

        let staging = self.dir.path().join("..data_tmp");
        symlink(&version_dir, &staging).unwrap();
        std::fs::rename(&staging, self.dir.path().join("..data")).unwrap();
        if previous > 0 {
            std::fs::remove_dir_all(self.dir.path().join(format!("..v{previous}"))).unwrap();
        }
        self.version.set(next);
    }
}

#[cfg(unix)]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_projected_volume_symlink_swaps_are_picked_up() {
    let volume = ProjectedVolume::new(360);
    let reloader = CertificateReloader::start(volume.paths(), ReloaderConfig::default(), None).unwrap();
    let server_config = Arc::new(reloader.server_config().unwrap());
    assert_eq!(reloader.get_certificate().validity(), chrono::TimeDelta::days(360));

    for days in [350i64, 340, 330] {
        tokio::time::sleep(Duration::from_millis(100)).await;
        volume.publish(days as u64);
        let store = reloader.store();
        let picked_up = common::wait_until(Duration::from_secs(2), move || {
            store.get().validity() == chrono::TimeDelta::days(days)
        })
        .await;
        assert!(picked_up, "swap to {days} days was not picked up");
        assert_eq!(common::validity_days(&common::handshake(server_config.clone())[0]), days);
    }

    reloader.stop();
    reloader.stopped().await;
}

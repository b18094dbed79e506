use std::fs;
use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use clap::Parser;
use futures_util::future::try_join_all;
use log::{error, info, warn};
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use tls_hotreload::common::common::setup_logging;
use tls_hotreload::config::structs::configuration::Configuration;
use tls_hotreload::http::http::https_service;
use tls_hotreload::ssl::ssl::generate_self_signed;
use tls_hotreload::ssl::structs::certificate_paths::CertificatePaths;
use tls_hotreload::ssl::structs::certificate_reloader::CertificateReloader;
use tls_hotreload::ssl::structs::reload_signal::ReloadSignal;
use tls_hotreload::structs::Cli;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    if args.create_selfsigned {
        setup_logging(&Configuration::init());
        cert_gen(&args);
    }

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    setup_logging(&config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let tokio_shutdown = Shutdown::new().expect("shutdown creation works on first call");
            let (reload_tx, mut reload_rx) = tokio::sync::mpsc::channel::<ReloadSignal>(config.reloader.notification_buffer);

            let mut reloaders = Vec::new();
            let mut https_futures = Vec::new();

            for https_server_object in &config.https_server {
                if !https_server_object.enabled {
                    continue;
                }
                let address: SocketAddr = match https_server_object.bind_address.parse() {
                    Ok(address) => address,
                    Err(e) => {
                        error!("[HTTPS] Invalid bind address {}: {}", https_server_object.bind_address, e);
                        exit(1);
                    }
                };

                let paths = CertificatePaths::new(&https_server_object.ssl_cert, &https_server_object.ssl_key);
                let reloader = match CertificateReloader::start(paths, config.reloader.clone(), Some(reload_tx.clone())) {
                    Ok(reloader) => Arc::new(reloader),
                    Err(e) => {
                        error!("[HTTPS {}] {}", address, e);
                        exit(1);
                    }
                };

                let (handle, future) = https_service(address, &reloader, https_server_object)?;
                https_futures.push((handle, future));
                reloaders.push(reloader);
            }
            drop(reload_tx);

            if reloaders.is_empty() {
                warn!("[BOOT] No HTTPS server enabled, nothing to do");
                return Ok(());
            }

            let observer_handler = tokio_shutdown.clone();
            info!("[BOOT] Starting thread for certificate reload notifications...");
            tokio::spawn(async move {
                loop {
                    tokio::select! {
                        signal = reload_rx.recv() => {
                            match signal {
                                Some(signal) => {
                                    info!(
                                        "[CERTIFICATE] {} is now serving {} (valid until {}) after {}",
                                        signal.bundle.cert_path,
                                        signal.bundle.fingerprint,
                                        signal.bundle.not_after.to_rfc3339(),
                                        signal.event
                                    );
                                }
                                None => {
                                    info!("[BOOT] All certificate watchers are gone, stopping notifications thread...");
                                    return;
                                }
                            }
                        }
                        _ = observer_handler.handle() => {
                            info!("[BOOT] Shutting down thread for certificate reload notifications...");
                            return;
                        }
                    }
                }
            });

            let (handles, futures): (Vec<_>, Vec<_>) = https_futures.into_iter().unzip();
            tokio::spawn(async move {
                if let Err(e) = try_join_all(futures).await {
                    error!("[HTTPS] Server stopped with an error: {}", e);
                }
            });

            tokio_shutdown.handle().await;
            info!("Shutdown request received, shutting down...");

            for reloader in &reloaders {
                reloader.stop();
            }
            for handle in &handles {
                handle.stop(true).await;
            }
            for reloader in &reloaders {
                reloader.stopped().await;
            }

            info!("Server shutting down completed");
            Ok(())
        })
}

fn cert_gen(args: &Cli)
{
    info!("[CERTGEN] Requesting to generate a self-signed key and certificate file");

    let mut subject_alt_names = vec![String::from("localhost")];
    if args.selfsigned_domain != "localhost" {
        subject_alt_names.push(args.selfsigned_domain.clone());
    }

    let (cert, key) = match generate_self_signed(subject_alt_names, args.selfsigned_days) {
        Ok(pair) => pair,
        Err(error) => {
            error!("[CERTGEN] {}", error);
            exit(1)
        }
    };

    if let Err(error) = fs::write(&args.selfsigned_keyfile, key) {
        error!("[CERTGEN] The key file {} could not be generated: {}", args.selfsigned_keyfile, error);
        exit(1)
    }
    info!("[CERTGEN] The key file {} has been generated", args.selfsigned_keyfile);

    if let Err(error) = fs::write(&args.selfsigned_certfile, cert) {
        error!("[CERTGEN] The cert file {} could not be generated: {}", args.selfsigned_certfile, error);
        exit(1)
    }
    info!("[CERTGEN] The cert file {} has been generated", args.selfsigned_certfile);

    info!(
        "[CERTGEN] The files {} and {} have been generated for {} days, use them only for development reasons",
        args.selfsigned_keyfile, args.selfsigned_certfile, args.selfsigned_days
    );
    exit(0)
}

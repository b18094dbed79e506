use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path of the configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,

    /// Create config file if not exists or is broken.
    #[arg(long)]
    pub create_config: bool,

    /// Create a self-signed key and certificate, then exit.
    #[arg(long)]
    pub create_selfsigned: bool,

    /// Additional domain for the self-signed certificate, next to localhost.
    #[arg(long, default_value = "localhost")]
    pub selfsigned_domain: String,

    /// Output file of the self-signed private key.
    #[arg(long, default_value = "key.pem")]
    pub selfsigned_keyfile: String,

    /// Output file of the self-signed certificate.
    #[arg(long, default_value = "cert.pem")]
    pub selfsigned_certfile: String,

    /// Validity of the self-signed certificate in days.
    #[arg(long, default_value_t = 365)]
    pub selfsigned_days: u64,
}

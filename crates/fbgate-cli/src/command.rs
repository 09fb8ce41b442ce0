use clap::{Args, Parser, Subcommand};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use url::Url;

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub subcommand: Subcommands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Subcommands {
    Run(SubcommandRun),
}

#[derive(Args, Debug, Clone)]
pub struct SubcommandRun {
    #[arg(short, long = "config", env = "FBGATE_CONFIG_FILE")]
    pub configfile: Option<PathBuf>,

    #[arg(
        short,
        long = "log-filter",
        env = "FBGATE_LOG_FILTER",
        default_value_t = String::from("info")
    )]
    pub log_filter: String,

    #[arg(long = "addr", env = "FBGATE_SERVER_ADDR", default_value_t = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 9090))]
    pub addr: SocketAddr,

    #[arg(long = "facebook-app-id", env = "FBGATE_FACEBOOK_APP_ID")]
    pub app_id: Option<String>,

    #[arg(long = "facebook-app-secret", env = "FBGATE_FACEBOOK_APP_SECRET")]
    pub app_secret: Option<String>,

    #[arg(long = "login-uri", env = "FBGATE_LOGIN_URI")]
    pub login_uri: Option<String>,

    #[arg(long = "redirect-uri", env = "FBGATE_REDIRECT_URI")]
    pub redirect_uri: Option<String>,

    #[arg(long = "graph-url", env = "FBGATE_GRAPH_URL")]
    pub graph_url: Option<Url>,

    #[arg(long = "graph-timeout", env = "FBGATE_GRAPH_TIMEOUT_SECS")]
    pub graph_timeout_secs: Option<u64>,

    #[arg(long = "registered-users", env = "FBGATE_REGISTERED_USERS", value_delimiter = ',', num_args = 1..)]
    pub registered_users: Option<Vec<String>>,
}

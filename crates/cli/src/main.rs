use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use tracing::info;
use xmpp_srv_check_api::AppState;
use xmpp_srv_check_domain::{CliOverrides, Config};

mod bootstrap;
mod di;
mod output;
mod server;

#[derive(Parser)]
#[command(name = "xmpp-srv-check")]
#[command(version)]
#[command(about = "Checks XMPP DNS SRV records against a domain's authoritative name servers")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Overall timeout per DNS query in milliseconds
    #[arg(long, value_name = "MS", global = true)]
    timeout_ms: Option<u64>,

    /// Longest a single name server may take before the next is tried
    #[arg(long, value_name = "MS", global = true)]
    server_timeout_ms: Option<u64>,

    /// Bootstrap name server (repeatable); defaults to /etc/resolv.conf
    #[arg(long = "bootstrap", value_name = "IP", global = true)]
    bootstrap_servers: Vec<String>,

    /// Query the bootstrap servers when authority cannot be determined
    #[arg(long, global = true)]
    authority_fallback: bool,

    /// Request ledger path
    #[arg(long, value_name = "FILE", global = true)]
    ledger: Option<String>,

    /// Do not record requested hostnames
    #[arg(long, global = true)]
    no_ledger: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Look up and annotate the XMPP SRV records of a domain
    Check {
        hostname: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Serve the lookup over HTTP
    Serve {
        /// Web server port
        #[arg(short = 'w', long)]
        web_port: Option<u16>,

        /// Bind address
        #[arg(short = 'b', long)]
        bind: Option<String>,
    },
    /// Write the default configuration to a file
    InitConfig { path: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Command::InitConfig { path } = &cli.command {
        Config::default().save(path)?;
        println!("Wrote default configuration to {}", path);
        return Ok(());
    }

    let (web_port, bind_address) = match &cli.command {
        Command::Serve { web_port, bind } => (*web_port, bind.clone()),
        _ => (None, None),
    };

    let cli_overrides = CliOverrides {
        web_port,
        bind_address,
        query_timeout_ms: cli.timeout_ms,
        server_timeout_ms: cli.server_timeout_ms,
        bootstrap_servers: cli.bootstrap_servers.clone(),
        authority_fallback: cli.authority_fallback,
        ledger_path: cli.ledger.clone(),
        no_ledger: cli.no_ledger,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    let services = di::Services::new(&config)?;

    match cli.command {
        Command::Check { hostname, json } => {
            let report = services.check_xmpp_dns.execute(&hostname).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", output::render_text(&report));
            }
        }
        Command::Serve { .. } => {
            info!("Starting xmpp-srv-check v{}", env!("CARGO_PKG_VERSION"));

            let web_addr: SocketAddr =
                format!("{}:{}", config.server.bind_address, config.server.web_port).parse()?;
            let app_state = AppState {
                check_xmpp_dns: services.check_xmpp_dns,
            };

            server::start_web_server(web_addr, app_state).await?;
            info!("Server shutdown complete");
        }
        Command::InitConfig { .. } => {}
    }

    Ok(())
}

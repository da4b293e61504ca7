use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Command-line arguments, with environment-variable fallbacks.
///
/// Values are resolved in the usual order: explicit flag, then environment
/// (including anything loaded from `.env`), then the built-in default.
#[derive(Debug, Parser)]
#[command(name = "snipvault-server", about = "HTTP snippet store over a sharded blob layout")]
pub struct CliArgs {
    /// Address to bind the HTTP listener to.
    #[arg(long, env = "SNIPVAULT_ADDR", default_value = "0.0.0.0:3000")]
    pub addr: String,

    /// Root directory of the snippet blob store.
    #[arg(long, env = "SNIPVAULT_DATA_DIR", default_value = "./data/snippets")]
    pub data_dir: PathBuf,

    /// Maximum accepted snippet payload size, in bytes.
    #[arg(long, env = "SNIPVAULT_MAX_SNIPPET_BYTES", default_value_t = 512 * 1024)]
    pub max_snippet_bytes: usize,
}

/// Validated server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub data_dir: PathBuf,
    pub max_snippet_bytes: usize,
}

impl TryFrom<CliArgs> for ServerConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let addr: SocketAddr = args
            .addr
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid listen address {:?}: {e}", args.addr))?;
        anyhow::ensure!(
            args.max_snippet_bytes > 0,
            "maximum snippet size must be nonzero"
        );
        Ok(Self {
            addr,
            data_dir: args.data_dir,
            max_snippet_bytes: args.max_snippet_bytes,
        })
    }
}

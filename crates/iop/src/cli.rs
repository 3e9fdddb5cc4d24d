use clap::{Parser, Subcommand};
use iop_config::constants;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "iop", version, about = "Hostnames for apps deployed with iop")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the generated app.iop.run domain for one app
    Generate {
        #[arg(long)]
        project: String,

        #[arg(long)]
        app: String,

        /// Server IP address or hostname
        #[arg(long)]
        host: String,
    },

    /// Print the hosts every app in iop.toml will be served on
    Resolve {
        #[arg(long, env = constants::CONFIG_PATH_ENV, default_value = constants::DEFAULT_CONFIG_FILE)]
        config: PathBuf,

        /// Emit JSON instead of one line per host
        #[arg(long)]
        json: bool,
    },
}

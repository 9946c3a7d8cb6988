//! Command-line configuration

use clap::Parser;

pub const DEFAULT_BIND_ADDRESS: &str = "localhost:8773";

/// USSD WhoIs gateway callback server
#[derive(Parser, Debug)]
#[command(name = "ussd-whois")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Interface and port to bind the server to, e.g. localhost:8080
    #[arg(short = 'b', long = "bind", default_value = DEFAULT_BIND_ADDRESS)]
    pub bind: String,
}

impl Cli {
    /// Bind address, falling back to the default when given an empty value
    pub fn bind_address(&self) -> &str {
        let bind = self.bind.trim();
        if bind.is_empty() {
            DEFAULT_BIND_ADDRESS
        } else {
            bind
        }
    }
}

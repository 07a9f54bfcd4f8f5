use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;

/// A GraphQL endpoint over an in-memory shelf of books and authors
#[derive(Parser, Debug)]
#[command(name = "bookshelf", version)]
pub struct Cli {
    /// Address to listen on
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value_t = 5000)]
    pub port: u16,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the schema in SDL and exit
    #[arg(long)]
    pub print_schema: bool,
}

impl Cli {
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

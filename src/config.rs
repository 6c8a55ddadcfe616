//! Command line and environment configuration of the `conduit` binary.
//!
//! Every option falls back to an environment variable; the binary loads a
//! `.env` file first, so either source works.

use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;

#[derive(Parser, Debug)]
#[command(version, about = "Conduit blogging backend")]
pub struct Cli {
    #[arg(
        global = true,
        short = 'u',
        long,
        env = "DATABASE_URL",
        help = "Database URL",
        hide_env_values = true
    )]
    pub database_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, PartialEq, Eq, Debug)]
pub enum Command {
    #[command(about = "Run pending migrations, then serve the API")]
    Serve(ServeArgs),
    #[command(about = "Manage the database schema")]
    Migrate {
        #[command(subcommand)]
        command: MigrateCommand,
    },
}

#[derive(Args, PartialEq, Eq, Debug)]
pub struct ServeArgs {
    #[arg(long, env = "HOST", default_value = "127.0.0.1", help = "Address to bind")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 3000, help = "Port to bind")]
    pub port: u16,

    #[arg(
        long,
        env = "JWT_SECRET",
        help = "Secret used to sign access tokens",
        hide_env_values = true
    )]
    pub jwt_secret: String,

    #[arg(
        long,
        env = "TOKEN_TTL_HOURS",
        default_value_t = 720,
        help = "Lifetime of an access token, in hours"
    )]
    pub token_ttl_hours: i64,
}

impl ServeArgs {
    /// `host:port` as a socket address
    pub fn addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

#[derive(Subcommand, PartialEq, Eq, Debug)]
pub enum MigrateCommand {
    #[command(about = "Apply pending migrations")]
    Up {
        #[arg(short, long, help = "Number of pending migrations to apply")]
        num: Option<u32>,
    },
    #[command(about = "Rollback applied migrations")]
    Down {
        #[arg(short, long, default_value = "1", help = "Number of applied migrations to rollback")]
        num: u32,
    },
    #[command(about = "Drop all tables from the database, then reapply all migrations")]
    Fresh,
    #[command(about = "Check the status of all migrations")]
    Status,
}

use anyhow::Context as _;
use clap::Parser;
use conduit::{
    api::{self, AppState},
    auth::TokenKeys,
    config::{Cli, Command, MigrateCommand, ServeArgs},
};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;
use tracing_subscriber::{prelude::*, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "conduit=info,tower_http=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let filter_layer =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))?;
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let url = cli
        .database_url
        .context("Environment variable 'DATABASE_URL' not set")?;
    let db = connect(url).await?;

    match cli.command {
        Command::Serve(args) => serve(db, args).await,
        Command::Migrate { command } => migrate(&db, command).await,
    }
}

async fn connect(url: String) -> anyhow::Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(url);
    options.sqlx_logging_level(tracing::log::LevelFilter::Debug);
    Database::connect(options)
        .await
        .context("Fail to acquire database connection")
}

async fn serve(db: DatabaseConnection, args: ServeArgs) -> anyhow::Result<()> {
    Migrator::up(&db, None).await?;

    let keys = TokenKeys::new(
        args.jwt_secret.as_bytes(),
        chrono::Duration::hours(args.token_ttl_hours),
    );
    let app = api::router(AppState::new(db, keys));

    let addr = args.addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Fail to bind {addr}"))?;
    info!(%addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn migrate(db: &DatabaseConnection, command: MigrateCommand) -> anyhow::Result<()> {
    match command {
        MigrateCommand::Up { num } => Migrator::up(db, num).await?,
        MigrateCommand::Down { num } => Migrator::down(db, Some(num)).await?,
        MigrateCommand::Fresh => Migrator::fresh(db).await?,
        MigrateCommand::Status => Migrator::status(db).await?,
    }
    Ok(())
}

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use landfall_core::{DEFAULT_HTTP_PORT, DEFAULT_PAGE_SIZE, DatastoreConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "landfall", version)]
#[command(about = "Paginated query service for historical storm-landfall records", long_about = None)]
struct Cli {
    /// SQLite database file [default: <data dir>/landfall/storms.db]
    #[arg(long, global = true)]
    db: Option<PathBuf>,
    /// PostgreSQL connection URL; takes precedence over --db
    #[arg(long, global = true, env = "DATABASE_URL", hide_env_values = true)]
    database_url: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        #[arg(short, long, default_value_t = DEFAULT_HTTP_PORT)]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Print one page of storms as JSON
    Query {
        /// Optional search term (integer terms also match year, duration and landfall wind)
        search: Option<String>,
        #[arg(short = 'n', long, default_value_t = 0)]
        page: u32,
        #[arg(short = 's', long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: u32,
        /// Strict, Liberal or Any
        #[arg(short, long, default_value = "Any")]
        category: String,
        /// id, name, maxWindSpeed, landfallDate or windSpeedAtLandfall
        #[arg(long, default_value = "name")]
        sort: String,
        #[arg(long)]
        descending: bool,
    },
    /// Print every storm, sorted by name, as JSON
    All,
    /// Bulk-load storms from a JSON array file
    Import { file: PathBuf },
}

fn default_db_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("landfall")
        .join("storms.db")
}

impl Cli {
    fn datastore_config(&self) -> DatastoreConfig {
        match &self.database_url {
            Some(url) => DatastoreConfig::postgres(url.clone()),
            None => DatastoreConfig::sqlite(self.db.clone().unwrap_or_else(default_db_path)),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let datastore = cli.datastore_config();

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(&datastore, port, host).await?,
        Commands::Query { search, page, page_size, category, sort, descending } => {
            let params = landfall_core::QueryParams {
                page_number: page,
                page_size,
                landfall_category: category,
                sort_column: sort,
                ascending: !descending,
                search_term: search.unwrap_or_default(),
            };
            commands::query::run_query(&datastore, &params).await?;
        },
        Commands::All => commands::query::run_all(&datastore).await?,
        Commands::Import { file } => commands::import::run(&datastore, &file).await?,
    }

    Ok(())
}

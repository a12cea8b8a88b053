use anyhow::Context;
use clap::{Parser, Subcommand};
use shaker_api::{AppState, RestApi};
use shaker_core::Catalog;
use shaker_similarity::{
    DistanceWeights, ExplorerQuery, MatchResponse, RankOptions, Ranker, DEFAULT_TWIST_LIMIT,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Cocktail twist finder and flavor explorer
#[derive(Parser, Debug)]
#[command(name = "shaker")]
#[command(about = "Find cocktail twists and explore by taste", long_about = None)]
struct Args {
    /// Path to the cocktail catalog (JSON)
    #[arg(short, long, default_value = "./data/cocktails.json")]
    catalog: PathBuf,

    /// JSON file overriding the distance weights
    #[arg(short, long)]
    weights: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the REST API
    Serve {
        /// HTTP API port
        #[arg(long, default_value_t = 8080)]
        http_port: u16,
    },
    /// Print the closest twists of a cocktail as JSON
    Twists {
        /// Cocktail name, in any catalog language
        name: String,

        /// Maximum number of twists
        #[arg(short, long, default_value_t = DEFAULT_TWIST_LIMIT)]
        limit: usize,

        /// Include full catalog entries in the output
        #[arg(long)]
        include_cocktail: bool,
    },
    /// Rank the catalog against taste preferences and print JSON
    Explore(ExploreArgs),
}

#[derive(clap::Args, Debug)]
struct ExploreArgs {
    #[arg(long, default_value_t = 0.0)]
    body: f64,
    #[arg(long, default_value_t = 0.0)]
    complexity: f64,
    #[arg(long, default_value_t = 0.0)]
    sourness: f64,
    #[arg(long, default_value_t = 0.0)]
    sweetness: f64,

    /// Only rank non-alcoholic drinks near the top
    #[arg(long)]
    mocktail: bool,

    /// Preferred bubbles (true/false); unset means no preference
    #[arg(long)]
    bubbles: Option<bool>,

    /// Base spirit to include (repeatable)
    #[arg(long = "spirit")]
    base_spirits: Vec<String>,

    /// Liqueur to include (repeatable)
    #[arg(long = "liqueur")]
    liqueurs: Vec<String>,

    /// Other ingredient to include (repeatable)
    #[arg(long = "ingredient")]
    ingredients: Vec<String>,

    /// Flavor descriptor to include (repeatable)
    #[arg(long = "descriptor")]
    descriptors: Vec<String>,

    /// Maximum number of results
    #[arg(short, long)]
    limit: Option<usize>,

    /// Drop results farther than this distance
    #[arg(long)]
    max_distance: Option<f64>,

    /// Include full catalog entries in the output
    #[arg(long)]
    include_cocktail: bool,
}

impl ExploreArgs {
    fn to_query(&self) -> ExplorerQuery {
        ExplorerQuery {
            body: self.body,
            complexity: self.complexity,
            sourness: self.sourness,
            sweetness: self.sweetness,
            booziness: if self.mocktail { Some(0.0) } else { None },
            bubbles: self.bubbles,
            base_spirits: self.base_spirits.clone(),
            liqueurs: self.liqueurs.clone(),
            ingredients: self.ingredients.clone(),
            descriptors: self.descriptors.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Shaker v{}", env!("CARGO_PKG_VERSION"));
    info!("Catalog: {:?}", args.catalog);

    let weights = match &args.weights {
        Some(path) => load_weights(path)?,
        None => DistanceWeights::default(),
    };
    let catalog = Catalog::load(&args.catalog)
        .with_context(|| format!("failed to load catalog from {:?}", args.catalog))?;
    let ranker = Ranker::with_weights(weights);

    match args.command {
        Command::Serve { http_port } => serve(catalog, ranker, http_port).await,
        Command::Twists {
            name,
            limit,
            include_cocktail,
        } => {
            let reference = catalog.get(&name)?;
            let cocktails = catalog.cocktails();
            let candidates = cocktails
                .iter()
                .filter(|c| !c.name.same_identity(&reference.name))
                .count();
            let ranked = ranker.rank(cocktails, reference, &RankOptions::top(limit));
            print_json(&MatchResponse::from_ranked(ranked, candidates, include_cocktail))
        }
        Command::Explore(explore) => {
            let options = RankOptions {
                limit: explore.limit,
                max_distance: explore.max_distance,
            };
            let cocktails = catalog.cocktails();
            let ranked = ranker.explore(cocktails, &explore.to_query(), &options);
            print_json(&MatchResponse::from_ranked(
                ranked,
                cocktails.len(),
                explore.include_cocktail,
            ))
        }
    }
}

fn load_weights(path: &Path) -> anyhow::Result<DistanceWeights> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read weights from {:?}", path))?;
    let weights = DistanceWeights::from_json_str(&json)?;
    info!("Loaded distance weights from {:?}", path);
    Ok(weights)
}

fn print_json(response: &MatchResponse) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(response)?);
    Ok(())
}

async fn serve(catalog: Catalog, ranker: Ranker, http_port: u16) -> anyhow::Result<()> {
    let state = Arc::new(AppState::new(catalog, ranker));

    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(state, http_port).await {
                error!("HTTP server error: {}", e);
            }
        })
    });

    info!("Shaker started successfully");
    info!("HTTP API: http://localhost:{}/", http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}

use clap::Parser;
use rankx_core::{Catalog, UserProfile};
use rankx_engine::RecommendationEngine;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// A TOPSIS multi-criteria recommendation engine
#[derive(Parser, Debug)]
#[command(name = "rankx")]
#[command(about = "Recommend a subscription plan from preference scores", long_about = None)]
struct Args {
    /// Path to a catalog JSON file (uses the built-in plan catalog if omitted)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Quick recommendation preset: beginner, intermediate, advanced,
    /// budget_conscious, or time_limited
    #[arg(long, conflicts_with_all = [
        "budget_priority", "intensity_preference", "time_availability",
        "variety_importance", "support_need", "convenience_need",
    ])]
    preset: Option<String>,

    /// Budget priority, 1-10
    #[arg(long)]
    budget_priority: Option<u8>,

    /// Intensity preference, 1-10
    #[arg(long)]
    intensity_preference: Option<u8>,

    /// Time availability, 1-10
    #[arg(long)]
    time_availability: Option<u8>,

    /// Variety importance, 1-10
    #[arg(long)]
    variety_importance: Option<u8>,

    /// Support need, 1-10
    #[arg(long)]
    support_need: Option<u8>,

    /// Convenience need, 1-10
    #[arg(long)]
    convenience_need: Option<u8>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn profile(&self) -> UserProfile {
        let neutral = UserProfile::default();
        UserProfile {
            budget_priority: self.budget_priority.unwrap_or(neutral.budget_priority),
            intensity_preference: self
                .intensity_preference
                .unwrap_or(neutral.intensity_preference),
            time_availability: self.time_availability.unwrap_or(neutral.time_availability),
            variety_importance: self
                .variety_importance
                .unwrap_or(neutral.variety_importance),
            support_need: self.support_need.unwrap_or(neutral.support_need),
            convenience_need: self.convenience_need.unwrap_or(neutral.convenience_need),
        }
    }
}

fn main() -> anyhow::Result<()> {
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

    info!("Starting rankx v{}", env!("CARGO_PKG_VERSION"));

    let catalog = match &args.catalog {
        Some(path) => {
            info!("Loading catalog from {:?}", path);
            Catalog::from_file(path)?
        }
        None => Catalog::default_plans(),
    };
    info!("Catalog loaded: {} candidates", catalog.len());

    let engine = RecommendationEngine::new(catalog);

    let result = match &args.preset {
        Some(preset) => {
            info!("Quick recommendation for preset '{}'", preset);
            engine.recommend_quick(preset)?
        }
        None => {
            let profile = args.profile();
            info!("Detailed recommendation for profile {:?}", profile);
            engine.recommend_detailed(&profile)?
        }
    };

    info!(
        "Recommended: {} (score {:.4})",
        result.recommended.candidate.name, result.recommended.topsis_score
    );

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

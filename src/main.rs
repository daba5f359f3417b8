use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::info;

use marginalia_io::{EntityReader, load_tree, save_tree};
use marginalia_tree::{
    Feature, FeatureRegistry, TreeBuilder, classify, export, import, score_all,
};

#[derive(Parser)]
#[command(name = "marginalia")]
#[command(about = "Decision-tree classification of source-code comments")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose (debug-level) logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(long, global = true)]
    quiet: bool,
}

/// Which attributes the feature registry is wired to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FeatureSet {
    /// Structural attributes for comment-category classification
    Category,
    /// Positional-delta attributes for comment-target classification
    Target,
}

#[derive(Subcommand)]
enum Command {
    /// Induce a decision tree from labeled comment records
    Train {
        /// Path to the input records CSV
        #[arg(long)]
        data: PathBuf,

        /// Name of the label column
        #[arg(long, default_value = "key")]
        label: String,

        /// Feature set to register
        #[arg(long, value_enum, default_value_t = FeatureSet::Category)]
        feature_set: FeatureSet,

        /// Minimum entity count required to keep splitting
        #[arg(long, default_value_t = 10)]
        min_entities: usize,

        /// Minimum label entropy required to keep splitting
        #[arg(long, default_value_t = 0.10)]
        min_entropy: f64,

        /// Output path for the tree JSON
        #[arg(long)]
        output: PathBuf,
    },

    /// Score a saved tree against labeled comment records
    Evaluate {
        /// Path to the input records CSV
        #[arg(long)]
        data: PathBuf,

        /// Path to the tree JSON produced by `train`
        #[arg(long)]
        tree: PathBuf,

        /// Name of the label column
        #[arg(long, default_value = "key")]
        label: String,

        /// Feature set the tree was trained with
        #[arg(long, value_enum, default_value_t = FeatureSet::Category)]
        feature_set: FeatureSet,
    },

    /// Predict labels for comment records with a saved tree
    Predict {
        /// Path to the input records CSV
        #[arg(long)]
        data: PathBuf,

        /// Path to the tree JSON produced by `train`
        #[arg(long)]
        tree: PathBuf,

        /// Name of the label column
        #[arg(long, default_value = "key")]
        label: String,

        /// Feature set the tree was trained with
        #[arg(long, value_enum, default_value_t = FeatureSet::Category)]
        feature_set: FeatureSet,
    },
}

// --- JSON stdout output structs ---

#[derive(Serialize)]
struct TrainOutput {
    n_entities: usize,
    n_labels: usize,
    n_nodes: usize,
    n_leaves: usize,
    depth: usize,
    output: PathBuf,
}

#[derive(Serialize)]
struct EvaluateOutput {
    n_entities: usize,
    accuracy: f64,
    correct: usize,
    labels: Vec<marginalia_tree::LabelMetrics>,
}

#[derive(Serialize)]
struct PredictOutput {
    n_entities: usize,
    predictions: Vec<String>,
}

/// Features over structural comment attributes (type, neighbors,
/// code-likeness, part-of-speech tags).
fn category_features() -> FeatureRegistry {
    let mut reg = FeatureRegistry::new();
    reg.register(Feature::Discrete { attr: "type".into() });
    for attr in ["parentTypes", "leftTypes"] {
        reg.register(Feature::DiscreteIndexed { attr: attr.into(), index: 0 });
        reg.register(Feature::MembershipIndexed { attr: attr.into(), limit: 1 });
        reg.register(Feature::Membership { attr: attr.into() });
    }
    reg.register(Feature::Discrete { attr: "codeLike".into() });
    reg.register(Feature::Discrete { attr: "empty".into() });
    reg.register(Feature::DiscreteIndexed { attr: "posTags".into(), index: 0 });
    reg.register(Feature::MembershipIndexed { attr: "posTags".into(), limit: 1 });
    reg.register(Feature::Membership { attr: "posTags".into() });
    reg
}

/// Features over positional deltas and the right-hand context, for
/// predicting which code a comment refers to.
fn target_features() -> FeatureRegistry {
    let mut reg = FeatureRegistry::new();
    for attr in ["deltaLine", "deltaCols", "deltaLeft", "deltaRight"] {
        reg.register(Feature::Quantitative { attr: attr.into() });
    }
    reg.register(Feature::DiscreteIndexed { attr: "rightTypes".into(), index: 0 });
    reg.register(Feature::MembershipIndexed { attr: "rightTypes".into(), limit: 1 });
    reg.register(Feature::Membership { attr: "rightTypes".into() });
    reg.register(Feature::MembershipIndexed { attr: "words".into(), limit: 1 });
    reg
}

fn registry_for(feature_set: FeatureSet) -> FeatureRegistry {
    match feature_set {
        FeatureSet::Category => category_features(),
        FeatureSet::Target => target_features(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match (cli.verbose, cli.quiet) {
        (true, _) => "debug",
        (_, true) => "error",
        _ => "info",
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Train {
            data,
            label,
            feature_set,
            min_entities,
            min_entropy,
            output,
        } => {
            let entities = EntityReader::new(&data, label)
                .read()
                .context("failed to read records CSV")?;

            let builder = TreeBuilder::new(registry_for(feature_set))
                .with_min_entities(min_entities)
                .with_min_entropy(min_entropy);
            let tree = builder
                .build(&entities)
                .context("training failed")?
                .context(
                    "training produced no tree: the dataset is below the stopping \
                     thresholds or no registered feature discriminates",
                )?;
            info!(
                n_nodes = tree.n_nodes(),
                depth = tree.depth(),
                "tree induced"
            );

            let exported = export(&tree);
            save_tree(&output, &exported).context("failed to save tree")?;

            let labels: std::collections::BTreeSet<&str> =
                entities.iter().map(|e| e.label().as_str()).collect();
            let summary = TrainOutput {
                n_entities: entities.len(),
                n_labels: labels.len(),
                n_nodes: tree.n_nodes(),
                n_leaves: tree.n_leaves(),
                depth: tree.depth(),
                output,
            };
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }

        Command::Evaluate {
            data,
            tree,
            label,
            feature_set,
        } => {
            let entities = EntityReader::new(&data, label)
                .read()
                .context("failed to read records CSV")?;

            let registry = registry_for(feature_set);
            let tree_data = load_tree(&tree).context("failed to load tree file")?;
            let tree = import(&registry, &tree_data).context("failed to import tree")?;
            info!(n_nodes = tree.n_nodes(), "tree loaded");

            let evaluation = score_all(&tree, &entities).context("scoring failed")?;
            eprintln!("{evaluation}");

            let summary = EvaluateOutput {
                n_entities: evaluation.n_entities,
                accuracy: evaluation.accuracy,
                correct: evaluation.correct,
                labels: evaluation.per_label,
            };
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }

        Command::Predict {
            data,
            tree,
            label,
            feature_set,
        } => {
            let entities = EntityReader::new(&data, label)
                .read()
                .context("failed to read records CSV")?;

            let registry = registry_for(feature_set);
            let tree_data = load_tree(&tree).context("failed to load tree file")?;
            let tree = import(&registry, &tree_data).context("failed to import tree")?;

            let predictions: Vec<String> = entities
                .iter()
                .map(|e| classify(&tree, e).as_str().to_string())
                .collect();

            let summary = PredictOutput {
                n_entities: entities.len(),
                predictions,
            };
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}

/// Perilous Gen — prints random spell and magic item names.
///
/// Usage: perilous_gen [--tables <dir>] [--seed <n>] <spells|items|build> [-n <count>]
use clap::{Parser, Subcommand};
use perilous_gen::core::store::TableStore;
use perilous_gen::schema::item::{GeneralItemType, ItemCategory};
use perilous_gen::schema::spell::SpellCategory;
use perilous_gen::{GeneratorConfig, GeneratorError, MagicItemGenerator, SpellGenerator};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(
    name = "perilous_gen",
    about = "Random spell and magic item names from weighted dice tables",
    version
)]
struct Cli {
    /// Directory holding the raw .txt tables
    #[arg(short, long, global = true)]
    tables: Option<PathBuf>,

    /// RON file with generator settings
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Seed for reproducible output
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Always build from the raw tables and leave no cache behind
    #[arg(long, global = true)]
    no_cache: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate spell names
    Spells {
        /// How many names to print
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },

    /// Generate magic item names
    Items {
        /// How many names to print
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Only this item type (scroll, potion, garb, jewelry, wand, weapon, armor, misc)
        #[arg(long = "type")]
        item_type: Option<GeneralItemType>,
    },

    /// Rebuild every table cache from its raw source
    Build,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::load_from_ron(path).unwrap_or_else(|e| {
            eprintln!("Error reading config '{}': {}", path.display(), e);
            process::exit(1);
        }),
        None => GeneratorConfig::default(),
    };
    if let Some(dir) = cli.tables {
        config = config.with_tables_dir(dir);
    }
    if cli.no_cache {
        config = config.with_cache(false);
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let result = match cli.command {
        Commands::Spells { count } => print_spells(&config, count, &mut rng),
        Commands::Items { count, item_type } => print_items(&config, count, item_type, &mut rng),
        Commands::Build => rebuild(&config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn print_spells(config: &GeneratorConfig, count: usize, rng: &mut StdRng) -> Result<(), GeneratorError> {
    let generator = SpellGenerator::from_config(config)?;
    for _ in 0..count {
        println!("{}", generator.generate_name(rng)?);
    }
    Ok(())
}

fn print_items(
    config: &GeneratorConfig,
    count: usize,
    item_type: Option<GeneralItemType>,
    rng: &mut StdRng,
) -> Result<(), GeneratorError> {
    let generator = MagicItemGenerator::from_config(config)?;
    for _ in 0..count {
        let name = match item_type {
            Some(t) => generator.generate_name_of_type(t, rng)?,
            None => generator.generate_name(rng)?,
        };
        println!("{}", name);
    }
    Ok(())
}

fn rebuild(config: &GeneratorConfig) -> Result<(), GeneratorError> {
    let store = TableStore::from_config(config);
    store.rebuild::<SpellCategory>(&config.spell_tables)?;
    store.rebuild::<ItemCategory>(&config.item_tables)?;
    store.rebuild::<GeneralItemType>(&config.item_type_tables)?;
    println!("Rebuilt table caches in '{}'", store.dir().display());
    Ok(())
}

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use seplist_config::{Config, SeparatorStyle};
use seplist_syntax::ast::{AnyList, AstNode, SourceFile};
use seplist_syntax::edit::EditOptions;
use seplist_syntax::make::ListFormat;
use seplist_syntax::{SeparatorKind, TrailingRepair};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "seplist")]
#[command(about = "Inspect and extend the separated lists in a source file")]
#[command(version)]
struct Cli {
    /// Config file to use instead of ~/.config/seplist/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every argument, parameter and variant list in FILE
    Lists { file: PathBuf },

    /// Insert ITEMS into one list of FILE and print the edited source
    Insert {
        file: PathBuf,

        /// Which list, as numbered by `seplist lists`
        #[arg(long)]
        list: usize,

        /// Element position to insert at
        #[arg(long)]
        index: usize,

        /// Do not add a trailing separator when appending
        #[arg(long)]
        no_repair: bool,

        /// Items to insert. With none, an append only repairs the trailing
        /// separator (see `repair_empty_append`)
        #[arg(num_args = 0..)]
        items: Vec<String>,
    },

    /// Print the effective config as TOML
    Config {
        /// Also save it to the config file, creating the file if needed
        #[arg(long)]
        write: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let must_exist = !matches!(cli.command, Commands::Config { .. });
    let config = load_config(cli.config.as_deref(), must_exist)?;

    match cli.command {
        Commands::Lists { file } => {
            let source = read_source(&file)?;
            print!("{}", describe_lists(&source)?);
        }
        Commands::Insert {
            file,
            list,
            index,
            no_repair,
            items,
        } => {
            let source = read_source(&file)?;
            let options = edit_options(&config, no_repair);
            let edited = insert(&source, list, index, &items, &options)
                .with_context(|| format!("Failed to edit {}", file.display()))?;
            print!("{edited}");
        }
        Commands::Config { write } => {
            print!("{}", config.to_toml()?);
            if write {
                let path = write_config(&config, cli.config.as_deref())?;
                log::info!("Config saved to {}", path.display());
            }
        }
    }

    Ok(())
}

/// A missing file means defaults, except for an explicit `--config` when
/// `must_exist` is set.
fn load_config(explicit: Option<&Path>, must_exist: bool) -> Result<Config> {
    let config = match explicit {
        Some(path) => {
            let path = Config::expand_path(path);
            match Config::load_from_path(&path)? {
                Some(config) => config,
                None if must_exist => bail!("Config file {} does not exist", path.display()),
                None => Config::default(),
            }
        }
        None => {
            log::debug!("Config path: {}", Config::config_path().display());
            Config::load()?.unwrap_or_default()
        }
    };
    log::debug!("{config:?}");
    Ok(config)
}

fn write_config(config: &Config, explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => {
            let path = Config::expand_path(path);
            config.save_to_path(&path)?;
            Ok(path)
        }
        None => {
            config.save()?;
            Ok(Config::config_path())
        }
    }
}

fn read_source(file: &Path) -> Result<String> {
    std::fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))
}

fn edit_options(config: &Config, no_repair: bool) -> EditOptions {
    let repair = if no_repair {
        None
    } else if config.repair_empty_append {
        Some(TrailingRepair::Always)
    } else {
        Some(TrailingRepair::NonEmptyItems)
    };
    EditOptions {
        separator: config.separator.map(|style| match style {
            SeparatorStyle::Comma => SeparatorKind::Comma,
            SeparatorStyle::Semicolon => SeparatorKind::Semicolon,
        }),
        repair,
        format: ListFormat {
            space_after_separator: config.space_after_separator,
        },
    }
}

fn parse(source: &str) -> SourceFile {
    let file = SourceFile::parse(source);
    if file.has_errors() {
        log::warn!("source has syntax errors; ERROR nodes are left as they are");
    }
    file
}

fn describe_lists(source: &str) -> Result<String> {
    let mut out = String::new();
    for (number, list) in parse(source).list_nodes().iter().enumerate() {
        out.push_str(&describe(number, list)?);
        out.push('\n');
    }
    Ok(out)
}

fn describe(number: usize, list: &AnyList) -> Result<String> {
    let (len, trailing) = list.shape()?;
    let plural = if len == 1 { "" } else { "s" };
    let trailing = if trailing { ", trailing separator" } else { "" };
    Ok(format!(
        "{number}: {:?} at {:?}, {len} element{plural}{trailing}",
        list.kind(),
        list.syntax().text_range(),
    ))
}

fn insert(
    source: &str,
    list: usize,
    index: usize,
    items: &[String],
    options: &EditOptions,
) -> Result<String> {
    let lists = parse(source).list_nodes();
    let Some(target) = lists.get(list) else {
        bail!("No list {list}: the file has {} lists", lists.len());
    };
    log::info!("Inserting {} items into list {list} at {index}", items.len());
    let root = target.insert_items(index, items, options)?;
    Ok(root.to_string())
}

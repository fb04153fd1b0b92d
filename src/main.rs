use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use xivapi::config::{get_config_path, ClientConfig};
use xivapi::output;
use xivapi::progress::with_spinner;
use xivapi::query::{parse_condition, Field, Prefix, SearchQuery};
use xivapi::{AssetFormat, Language, XivApi};

#[derive(Parser)]
#[command(name = "xivapi")]
#[command(about = "Query FFXIV game data from XIVAPI")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Language for field data (ja, en, de, fr)
    #[arg(long, global = true)]
    language: Option<Language>,

    /// Game version key or name (e.g. latest, 7.0)
    #[arg(long, global = true)]
    game_version: Option<String>,

    /// Schema specifier (e.g. exdschema@2)
    #[arg(long, global = true)]
    schema: Option<String>,

    /// Print responses as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log requests and responses to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List game versions
    Versions,
    /// List sheet names
    Sheets,
    /// Fetch rows from a sheet
    Rows {
        sheet: String,

        /// Maximum number of rows
        #[arg(short, long)]
        limit: Option<u32>,

        /// Return rows after this row ID
        #[arg(long)]
        after: Option<String>,

        /// Only these row IDs (comma-separated)
        #[arg(long, value_delimiter = ',')]
        rows: Vec<u32>,

        #[command(flatten)]
        filter: FieldArgs,
    },
    /// Fetch a single row
    Row {
        sheet: String,
        /// Row ID, `row` or `row:subrow`
        row: String,

        #[command(flatten)]
        filter: FieldArgs,
    },
    /// Search sheets with conditions like `Name~Potion` or `LevelItem>=50`
    Search {
        /// Sheets to search (comma-separated)
        #[arg(long, value_delimiter = ',')]
        sheets: Vec<String>,

        /// Condition every result must match (repeatable)
        #[arg(long = "must", value_name = "CONDITION")]
        must: Vec<String>,

        /// Condition no result may match (repeatable)
        #[arg(long = "must-not", value_name = "CONDITION")]
        must_not: Vec<String>,

        /// Optional condition that raises relevance (repeatable)
        #[arg(long = "should", value_name = "CONDITION")]
        should: Vec<String>,

        /// Raw query text appended after the built conditions
        #[arg(long)]
        raw: Option<String>,

        /// Cursor from a previous page
        #[arg(long)]
        cursor: Option<String>,

        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<u32>,

        #[command(flatten)]
        filter: FieldArgs,
    },
    /// Download a game asset as an image
    Asset {
        /// Game path, e.g. ui/icon/051000/051474_hr1.tex
        path: String,

        #[arg(long, default_value = "png")]
        format: AssetFormat,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Download a composed map image
    Map {
        territory: String,
        index: String,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Show the config file path and the effective config
    Config {
        /// Write the stored config merged with global flags back to the config file
        #[arg(long)]
        save: bool,
    },
}

#[derive(Args)]
struct FieldArgs {
    /// Fields to return (comma-separated)
    #[arg(long)]
    fields: Option<String>,

    /// Transient fields to return (comma-separated)
    #[arg(long)]
    transient: Option<String>,
}

impl FieldArgs {
    fn fields(&self) -> Vec<Field> {
        self.fields.as_deref().map(Field::list).unwrap_or_default()
    }

    fn transient(&self) -> Vec<Field> {
        self.transient.as_deref().map(Field::list).unwrap_or_default()
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // File contents plus flags; the env override only reaches the client
    let mut stored = ClientConfig::load_from(&get_config_path()?)?;
    if let Some(language) = cli.language {
        stored.language = Some(language);
    }
    if let Some(version) = &cli.game_version {
        stored.game_version = Some(version.clone());
    }
    if let Some(schema) = &cli.schema {
        stored.schema = Some(schema.clone());
    }

    let api = XivApi::with_config(stored.clone().with_env())
        .context("Failed to create HTTP client")?;
    let spin = !cli.json && std::io::stderr().is_terminal();
    let mut out = output::stdout(std::io::stdout().is_terminal());

    match cli.command {
        Commands::Versions => {
            let response = with_spinner("Fetching versions", spin, || api.version().list())?;
            if cli.json {
                output::print_json(&mut out, &response)?;
            } else {
                output::print_versions(&mut out, &response)?;
            }
        }
        Commands::Sheets => {
            let response = with_spinner("Fetching sheets", spin, || api.sheet_index().list())?;
            if cli.json {
                output::print_json(&mut out, &response)?;
            } else {
                output::print_sheets(&mut out, &response)?;
            }
        }
        Commands::Rows {
            sheet,
            limit,
            after,
            rows,
            filter,
        } => {
            let mut request = api
                .sheet(sheet.as_str())
                .fields(filter.fields())
                .transient(filter.transient());
            if let Some(limit) = limit {
                request = request.limit(limit);
            }
            if let Some(after) = after {
                request = request.after(after);
            }
            if !rows.is_empty() {
                request = request.rows(&rows);
            }

            let response = with_spinner("Fetching rows", spin, || request.get())?;
            if cli.json {
                output::print_json(&mut out, &response)?;
            } else {
                output::print_rows(&mut out, &sheet, &response)?;
            }
        }
        Commands::Row { sheet, row, filter } => {
            let request = api
                .sheet(sheet.as_str())
                .row(&row)
                .fields(filter.fields())
                .transient(filter.transient());

            let response = with_spinner("Fetching row", spin, || request.get())?;
            if cli.json {
                output::print_json(&mut out, &response)?;
            } else {
                output::print_row(&mut out, &sheet, &response)?;
            }
        }
        Commands::Search {
            sheets,
            must,
            must_not,
            should,
            raw,
            cursor,
            limit,
            filter,
        } => {
            let mut request = api
                .search()
                .fields(filter.fields())
                .transient(filter.transient());

            if let Some(cursor) = cursor {
                request = request.cursor(cursor);
            } else {
                let query = build_query(&must, &must_not, &should, raw.as_deref())?;
                if query.is_empty() {
                    anyhow::bail!("search needs at least one condition, --raw query or --cursor");
                }
                request = request.query(query);
                if !sheets.is_empty() {
                    request = request.sheets(sheets);
                }
            }
            if let Some(limit) = limit {
                request = request.limit(limit);
            }

            let response = with_spinner("Searching", spin, || request.get())?;
            if cli.json {
                output::print_json(&mut out, &response)?;
            } else {
                output::print_search_results(&mut out, &response)?;
            }
        }
        Commands::Asset {
            path,
            format,
            output,
        } => {
            let bytes = with_spinner("Downloading asset", spin, || api.asset(path, format).get())?;
            write_file(&output, &bytes)?;
        }
        Commands::Map {
            territory,
            index,
            output,
        } => {
            let bytes = with_spinner("Downloading map", spin, || api.map(territory, index).get())?;
            write_file(&output, &bytes)?;
        }
        Commands::Config { save } => {
            show_config(&stored, api.config(), save)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("xivapi=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Conditions in flag order: musts, then must-nots, then optionals, then raw text
fn build_query(
    must: &[String],
    must_not: &[String],
    should: &[String],
    raw: Option<&str>,
) -> Result<SearchQuery> {
    let groups = [
        (must, Prefix::Must),
        (must_not, Prefix::MustNot),
        (should, Prefix::Optional),
    ];

    let mut query = SearchQuery::new();
    for (conditions, prefix) in groups {
        for text in conditions {
            let condition = parse_condition(text)
                .with_context(|| format!("Invalid condition '{}'", text))?;
            query = condition.apply(query, prefix);
        }
    }

    if let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) {
        query = query.add_clause(raw);
    }
    Ok(query)
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

fn show_config(stored: &ClientConfig, effective: &ClientConfig, save: bool) -> Result<()> {
    let path = get_config_path()?;
    if save {
        stored.save_to(&path)?;
        println!("Saved config to {}", path.display());
        output::print_json(&mut std::io::stdout(), stored)?;
    } else {
        println!("Config file: {}", path.display());
        output::print_json(&mut std::io::stdout(), effective)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_build_query_orders_by_prefix() {
        let query = build_query(
            &strings(&["Name~Potion"]),
            &strings(&["IsUntradable=true"]),
            &strings(&["LevelItem>=50"]),
            Some("+Rarity=1"),
        )
        .unwrap();
        assert_eq!(
            query.build(),
            "+Name~\"Potion\" -IsUntradable=true LevelItem>=50 +Rarity=1"
        );
    }

    #[test]
    fn test_build_query_rejects_bad_condition() {
        let err = build_query(&strings(&["Name!=Potion"]), &[], &[], None).unwrap_err();
        assert!(err.to_string().contains("Invalid condition 'Name!=Potion'"));
    }

    #[test]
    fn test_cli_parses_search() {
        let cli = Cli::try_parse_from([
            "xivapi", "search", "--sheets", "Item,Action", "--must", "Name~Potion", "--json",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Search { sheets, must, .. } => {
                assert_eq!(sheets, vec!["Item", "Action"]);
                assert_eq!(must, vec!["Name~Potion"]);
            }
            _ => panic!("expected search"),
        }
    }
}

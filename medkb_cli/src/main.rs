use clap::{Parser, Subcommand};
use medkb_core::crossref::resolve;
use medkb_core::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "medkb")]
#[command(about = "Read-only medical knowledge base", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the directory of JSON store files
    #[arg(long, global = true)]
    store_dir: Option<PathBuf>,

    /// Do not publish the built-in stores
    #[arg(long, global = true)]
    no_builtin: bool,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List published stores
    Stores,

    /// Case-insensitive substring search within a store
    Search {
        store: String,

        /// Query text; several words are searched as one phrase
        #[arg(num_args = 0..)]
        query: Vec<String>,
    },

    /// List entries in any of the given categories (all entries if none)
    Filter {
        store: String,

        #[arg(short, long = "category")]
        categories: Vec<String>,
    },

    /// Count entries, optionally in one category
    Count {
        store: String,

        #[arg(short, long)]
        category: Option<String>,
    },

    /// List categories present in a store
    Categories {
        store: String,

        /// Show the full taxonomy, including empty categories
        #[arg(long)]
        all: bool,
    },

    /// Show one entry
    Show {
        store: String,

        id: String,

        /// Explanation level for tiered entries (1-5)
        #[arg(short, long)]
        level: Option<u8>,
    },

    /// Show cross-references from and to an entry
    Related { store: String, id: String },

    /// Check every cross-reference for a resolvable, typed target
    Lint,

    /// Export a store to CSV or JSON
    Export {
        store: String,

        #[arg(long)]
        out: PathBuf,

        #[arg(long, default_value = "csv")]
        format: ExportFormat,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        medkb_core::logging::init_with_level("debug");
    } else {
        medkb_core::logging::init();
    }

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let store_dir = cli
        .store_dir
        .clone()
        .unwrap_or_else(|| config.data.store_dir.clone());
    let include_builtin = config.data.load_builtin && !cli.no_builtin;
    // `lint` reports findings itself
    let lint_on_load =
        config.validation.lint_cross_references && !matches!(cli.command, Commands::Lint);

    let library = assemble_library(&store_dir, include_builtin, lint_on_load)?;

    match cli.command {
        Commands::Stores => cmd_stores(&library),
        Commands::Search { store, query } => cmd_search(&library, &store, &query.join(" ")),
        Commands::Filter { store, categories } => cmd_filter(&library, &store, &categories),
        Commands::Count { store, category } => cmd_count(&library, &store, category.as_deref()),
        Commands::Categories { store, all } => cmd_categories(&library, &store, all),
        Commands::Show { store, id, level } => cmd_show(&library, &store, &id, level, &config),
        Commands::Related { store, id } => cmd_related(&library, &store, &id),
        Commands::Lint => cmd_lint(&library),
        Commands::Export { store, out, format } => cmd_export(&library, &store, &out, format),
    }
}

fn assemble_library(store_dir: &Path, include_builtin: bool, lint: bool) -> Result<Library> {
    let mut library = if include_builtin {
        builtin_library()?.clone()
    } else {
        Library::new()
    };

    for store in load_store_dir(store_dir)? {
        library.add(store)?;
    }
    tracing::debug!(
        "Library has {} store(s), {} entries",
        library.stores().len(),
        library.entry_count()
    );

    if lint {
        let graph = CrossReferenceGraph::from_library(&library);
        let findings = graph.dangling(&library);
        if !findings.is_empty() {
            tracing::warn!("{} cross-reference lint finding(s)", findings.len());
        }
    }

    Ok(library)
}

fn cmd_stores(library: &Library) -> Result<()> {
    if library.is_empty() {
        println!("No stores loaded.");
        return Ok(());
    }

    for store in library.stores() {
        println!(
            "{:<20} {:<9} {:>4} entries",
            store.name(),
            store.schema(),
            store.len()
        );
    }
    Ok(())
}

fn print_entries(entries: &[EntryRef<'_>]) {
    for entry in entries {
        println!("  {:<40} {} [{}]", entry.id(), entry.name(), entry.category());
    }
}

fn cmd_search(library: &Library, store_name: &str, query: &str) -> Result<()> {
    let store = library.require_store(store_name)?;
    let results = store.search(query);

    if results.is_empty() {
        println!("No entries match '{}' in {}.", query.trim(), store.name());
        return Ok(());
    }

    println!("{} result(s) in {}:", results.len(), store.name());
    print_entries(&results);
    Ok(())
}

fn cmd_filter(library: &Library, store_name: &str, categories: &[String]) -> Result<()> {
    let store = library.require_store(store_name)?;

    for category in categories {
        if !store.taxonomy().contains(category) {
            eprintln!("Unknown category: {}", category);
        }
    }

    let categories: Vec<&str> = categories.iter().map(String::as_str).collect();
    let results = store.filter_by_category(&categories);

    if results.is_empty() {
        println!("No entries in the requested categories.");
        return Ok(());
    }

    println!("{} entries in {}:", results.len(), store.name());
    print_entries(&results);
    Ok(())
}

fn cmd_count(library: &Library, store_name: &str, category: Option<&str>) -> Result<()> {
    let store = library.require_store(store_name)?;
    println!("{}", store.count(category));
    Ok(())
}

fn cmd_categories(library: &Library, store_name: &str, all: bool) -> Result<()> {
    let store = library.require_store(store_name)?;

    if all {
        for category in store.taxonomy().categories() {
            println!("{:<28} {:>4}", category, store.count(Some(category.as_str())));
        }
    } else {
        for category in store.categories() {
            println!("{:<28} {:>4}", category, store.count(Some(category)));
        }
    }
    Ok(())
}

fn cmd_show(
    library: &Library,
    store_name: &str,
    id: &str,
    level: Option<u8>,
    config: &Config,
) -> Result<()> {
    let store = library.require_store(store_name)?;
    let requested = level.map(LevelNumber::new).transpose()?;

    match store.get_by_id(id) {
        None => println!("No entry '{}' in {}.", id, store.name()),
        Some(EntryRef::Clinical(entry)) => display_clinical(entry),
        Some(EntryRef::Tiered(entry)) => {
            let level = requested.unwrap_or(config.display.default_level);
            display_tiered(entry, level);
        }
    }
    Ok(())
}

fn print_list(heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!();
    println!("  {}:", heading);
    for item in items {
        println!("    • {}", item);
    }
}

fn display_clinical(entry: &ClinicalEntry) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  {}", entry.name);
    println!("╰─────────────────────────────────────────╯");
    println!();
    if let Some(ref name_es) = entry.name_es {
        println!("  Español:   {}", name_es);
    }
    println!("  Category:  {}", entry.category);
    if let Some(ref code) = entry.icd11 {
        println!("  ICD-11:    {}", code);
    }
    println!();
    println!("  {}", entry.description);

    if let Some(ref text) = entry.pathophysiology {
        println!();
        println!("  Pathophysiology:");
        println!("    {}", text);
    }

    print_list("Clinical features", &entry.clinical_features);
    print_list("Diagnostics", &entry.diagnostics);
    print_list("Treatments", &entry.treatments);
    print_list("Complications", &entry.complications);

    if let Some(ref text) = entry.patient_explanation {
        println!();
        println!("  For patients:");
        println!("    {}", text);
    }

    print_list("Red flags", &entry.red_flags);

    for (key, value) in &entry.fields {
        match value {
            FieldValue::Text(text) => {
                println!();
                println!("  {}:", key);
                println!("    {}", text);
            }
            FieldValue::List(items) => print_list(key, items),
        }
    }

    println!();
}

fn display_tiered(entry: &TieredEntry, level: LevelNumber) {
    let available = entry
        .available_levels()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    println!("\n╭─────────────────────────────────────────╮");
    println!("│  {}", entry.name);
    println!("╰─────────────────────────────────────────╯");
    println!();
    if let Some(ref name_es) = entry.name_es {
        println!("  Español:   {}", name_es);
    }
    println!("  Type:      {}", entry.entry_type);
    if !entry.alternate_names.is_empty() {
        println!("  Also:      {}", entry.alternate_names.join(", "));
    }
    println!("  Levels:    {}", available);
    println!();

    let Some(content) = entry.level(level) else {
        println!(
            "  Level {} ({}) is not available for {}.",
            level,
            level.audience().label(),
            entry.name
        );
        println!("  Available levels: {}", available);
        println!();
        return;
    };

    println!("  Level {} · {}", level, content.audience().label());
    println!();
    println!("  {}", content.summary);
    println!();
    println!("  {}", content.explanation);

    if !content.key_terms.is_empty() {
        println!();
        println!("  Key terms:");
        for term in &content.key_terms {
            println!("    • {}: {}", term.term, term.definition);
        }
    }

    print_list("Analogies", &content.analogies);
    print_list("Examples", &content.examples);

    if let Some(ref notes) = content.clinical_notes {
        println!();
        println!("  Clinical notes:");
        println!("    {}", notes);
    }

    print_list("Counseling points", &content.patient_counseling_points);
    println!();
}

fn cmd_related(library: &Library, store_name: &str, id: &str) -> Result<()> {
    let store = library.require_store(store_name)?;
    let Some(entry) = store.get_by_id(id) else {
        println!("No entry '{}' in {}.", id, store.name());
        return Ok(());
    };

    println!("Outgoing:");
    if entry.cross_references().is_empty() {
        println!("  (none)");
    }
    for reference in entry.cross_references() {
        match resolve(library, reference) {
            Some(target) => println!(
                "  → {:<9} {} ({}/{})",
                reference.relationship,
                reference.label,
                target.store.name(),
                target.entry.id()
            ),
            None => println!(
                "  → {:<9} {} ({}, not found)",
                reference.relationship, reference.label, reference.target_id
            ),
        }
    }

    let graph = CrossReferenceGraph::from_library(library);
    let incoming = graph.incoming(store.name(), id);

    println!("Incoming:");
    if incoming.is_empty() {
        println!("  (none)");
    }
    for edge in incoming {
        println!(
            "  ← {:<9} {}/{}",
            edge.reference.relationship, edge.store, edge.source_id
        );
    }
    Ok(())
}

fn cmd_lint(library: &Library) -> Result<()> {
    let graph = CrossReferenceGraph::from_library(library);
    let findings = graph.dangling(library);

    if findings.is_empty() {
        println!("✓ No dangling cross-references ({} checked)", graph.len());
        return Ok(());
    }

    for finding in &findings {
        println!("  {}", finding);
    }
    Err(Error::Other(format!(
        "{} cross-reference problem(s) in {} edges",
        findings.len(),
        graph.len()
    )))
}

fn cmd_export(library: &Library, store_name: &str, out: &Path, format: ExportFormat) -> Result<()> {
    let store = library.require_store(store_name)?;
    medkb_core::export::export(store, out, format)?;

    println!("✓ Exported {} entries from {}", store.len(), store.name());
    println!("  File: {}", out.display());
    Ok(())
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use plotfinder::{
    classify, parse_deep_link_state, smart_search_limited, BurialRecord, Config, Dataset,
    IndexCache, QueryIntent, SearchOptions, SectionFilter, TourCatalog, TourNames,
};

mod cli;
use cli::display::{
    intent_badge, or_dash, pad_right, row, section_bot, section_mid, section_top, themed,
    timing_ms, tour_label, truncate, BOLD, CYAN, GRAY, WHITE, YELLOW,
};
use cli::{Cli, Commands};

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays pipeable. `RUST_LOG` overrides the default.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("plotfinder=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::resolve(cli.config.as_deref())?;

    match cli.command {
        Commands::Search {
            query,
            dataset,
            limit,
            no_index,
            json,
        } => {
            let path = dataset_path(dataset, &config)?;
            run_search(&path, &query, limit.unwrap_or(config.limit), no_index, json, &config)
        }
        Commands::Explain { query, no_tours } => {
            run_explain(&query, !no_tours);
            Ok(())
        }
        Commands::Link { url, json } => run_link(&url, json, &config),
        Commands::Sections {
            dataset,
            section,
            lot,
            tier,
        } => {
            let path = dataset_path(dataset, &config)?;
            let filter = match (lot, tier) {
                (Some(lot), _) => Some(SectionFilter::Lot(lot)),
                (None, Some(tier)) => Some(SectionFilter::Tier(tier)),
                (None, None) => None,
            };
            run_sections(&path, section.as_deref(), filter.as_ref(), &config)
        }
        Commands::Inspect { dataset } => {
            let path = dataset_path(dataset, &config)?;
            run_inspect(&path, &config)
        }
    }
}

fn dataset_path(flag: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    match flag.or_else(|| config.dataset.clone()) {
        Some(path) => Ok(path),
        None => bail!("no dataset given: pass --dataset or set \"dataset\" in the config"),
    }
}

fn load_dataset(path: &Path) -> Result<Dataset> {
    Dataset::load(path).with_context(|| format!("loading dataset {}", path.display()))
}

// ═══════════════════════════════════════════════════════════════════════════
// SEARCH
// ═══════════════════════════════════════════════════════════════════════════

fn run_search(
    path: &Path,
    query: &str,
    limit: usize,
    no_index: bool,
    json: bool,
    config: &Config,
) -> Result<()> {
    let dataset = load_dataset(path)?;
    let tours = config.tour_catalog();

    let mut cache = IndexCache::new();
    let mut options = SearchOptions::new().with_tours(&tours);
    if !no_index {
        options = options.with_index(cache.get_or_rebuild(
            dataset.version(),
            dataset.records(),
            Some(&tours),
        ));
    }

    let start = Instant::now();
    let results = smart_search_limited(dataset.records(), query, &options, limit);
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    let intent = classify(query, true);
    section_top("SEARCH");
    row(&format!(
        " {} {}  {}  {}",
        intent_badge(intent.kind()),
        themed(WHITE, &[BOLD], &format!("{:?}", intent.term())),
        themed(GRAY, &[], &format!("{} of {} records", results.len(), dataset.len())),
        timing_ms(elapsed_ms),
    ));

    if results.is_empty() {
        row(&themed(GRAY, &[], " no matching burials"));
    } else {
        section_mid("RESULTS");
        row(&themed(
            GRAY,
            &[BOLD],
            &format!(
                " {}{}{}{}{}{}",
                pad_right("NAME", 24),
                pad_right("SECTION", 9),
                pad_right("LOT", 5),
                pad_right("GRAVE", 7),
                pad_right("DATES", 18),
                "TOUR"
            ),
        ));
        for record in &results {
            row(&result_row(record, &tours));
        }
    }
    section_bot();
    Ok(())
}

fn result_row(record: &BurialRecord, tours: &TourCatalog) -> String {
    let dates = match (record.birth(), record.death()) {
        ("", "") => String::new(),
        (birth, death) => format!("{}-{}", birth, death),
    };
    let tour = match record.tour_key.as_deref().and_then(|key| tours.get(key)) {
        Some(info) => tour_label(&truncate(&info.name, 16), &info.color),
        None => or_dash(""),
    };
    format!(
        " {}{}{}{}{}{}",
        pad_right(&truncate(&record.display_name(), 23), 24),
        pad_right(&or_dash(record.section()), 9),
        pad_right(&or_dash(record.lot()), 5),
        pad_right(&or_dash(record.grave()), 7),
        pad_right(&truncate(&dates, 17), 18),
        tour
    )
}

// ═══════════════════════════════════════════════════════════════════════════
// EXPLAIN / LINK
// ═══════════════════════════════════════════════════════════════════════════

fn run_explain(query: &str, tours_enabled: bool) {
    let intent = classify(query, tours_enabled);
    let plan = match &intent {
        QueryIntent::Empty => "no search; returns nothing",
        QueryIntent::Year(_) => "year index, else substring scan of birth and death dates",
        QueryIntent::Section(_) => "section index, else exact section scan",
        QueryIntent::Lot(_) => "lot index, else exact lot scan",
        QueryIntent::Tour(_) => "tour-token index narrowed by tour-name substring",
        QueryIntent::Number(_) => "union of section, lot and year indexes, else OR scan",
        QueryIntent::Text(_) => "smallest label-token pool, filtered by label or tour substring",
    };

    section_top("QUERY");
    row(&format!(" {:<10}{}", "input", themed(WHITE, &[], &format!("{:?}", query))));
    row(&format!(" {:<10}{}", "intent", intent_badge(intent.kind())));
    row(&format!(" {:<10}{}", "term", themed(YELLOW, &[], &format!("{:?}", intent.term()))));
    row(&format!(" {:<10}{}", "plan", truncate(plan, 68)));
    section_bot();
}

fn run_link(url: &str, json: bool, config: &Config) -> Result<()> {
    let query = link_query(url);
    let tours = config.tour_catalog();
    let state = parse_deep_link_state(query, &tours.names());

    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
        return Ok(());
    }

    let view = match (state.show_burials_view, state.show_tours_view) {
        (true, _) => "burials",
        (_, true) => "tours",
        _ => "none",
    };
    section_top("DEEP LINK");
    row(&format!(" {:<10}{}", "view", themed(CYAN, &[BOLD], view)));
    row(&format!(" {:<10}{}", "query", or_dash(&truncate(&state.query, 68))));
    row(&format!(" {:<10}{}", "section", or_dash(&truncate(&state.section, 68))));
    let tour = match &state.selected_tour_name {
        Some(name) => {
            let color = tours
                .iter()
                .find(|info| &info.name == name)
                .map(|info| info.color.as_str())
                .unwrap_or("");
            tour_label(name, color)
        }
        None if !state.raw_tour.is_empty() => themed(
            GRAY,
            &[],
            &format!("no tour matches {:?}", truncate(&state.raw_tour, 40)),
        ),
        None => or_dash(""),
    };
    row(&format!(" {:<10}{}", "tour", tour));
    section_bot();
    Ok(())
}

/// The query-string part of a URL, without any `#fragment`.
fn link_query(url: &str) -> &str {
    let without_fragment = url.split_once('#').map_or(url, |(before, _)| before);
    match without_fragment.split_once('?') {
        Some((_, query)) => query,
        None => without_fragment,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SECTIONS / INSPECT
// ═══════════════════════════════════════════════════════════════════════════

fn run_sections(
    path: &Path,
    section: Option<&str>,
    filter: Option<&SectionFilter>,
    config: &Config,
) -> Result<()> {
    let dataset = load_dataset(path)?;

    let Some(section) = section else {
        let sections = dataset.unique_sections();
        section_top(&format!("SECTIONS ({})", sections.len()));
        for chunk in sections.chunks(10) {
            let line: String = chunk.iter().map(|s| pad_right(s, 7)).collect();
            row(&format!(" {}", line));
        }
        section_bot();
        return Ok(());
    };

    let tours = config.tour_catalog();
    let records = dataset.section_filter(section, filter);
    let label = match filter {
        None => format!("SECTION {}", section),
        Some(SectionFilter::Lot(lot)) => format!("SECTION {} · LOT {}", section, lot),
        Some(SectionFilter::Tier(tier)) => format!("SECTION {} · TIER {}", section, tier),
    };
    section_top(&format!("{} ({})", label, records.len()));
    if records.is_empty() {
        row(&themed(GRAY, &[], " no burials"));
    }
    for record in records {
        row(&result_row(record, &tours));
    }
    section_bot();
    Ok(())
}

fn run_inspect(path: &Path, config: &Config) -> Result<()> {
    let dataset = load_dataset(path)?;
    let tours = config.tour_catalog();

    let start = Instant::now();
    let mut cache = IndexCache::new();
    let stats = cache
        .get_or_rebuild(dataset.version(), dataset.records(), Some(&tours))
        .stats();
    let build_ms = start.elapsed().as_secs_f64() * 1000.0;

    let mut per_tour: BTreeMap<String, usize> = BTreeMap::new();
    for record in dataset.records() {
        let name = tours.tour_name(record);
        if !name.is_empty() {
            *per_tour.entry(name).or_default() += 1;
        }
    }

    section_top("DATASET");
    row(&format!(" {:<14}{}", "file", truncate(&path.display().to_string(), 64)));
    row(&format!(" {:<14}{:08x}", "version", dataset.version()));
    row(&format!(" {:<14}{}", "records", dataset.len()));
    row(&format!(" {:<14}{}", "sections", dataset.unique_sections().len()));
    section_mid("INDEX");
    row(&format!(" {:<14}{}", "section keys", stats.sections));
    row(&format!(" {:<14}{}", "lot keys", stats.lots));
    row(&format!(" {:<14}{}", "years", stats.years));
    row(&format!(" {:<14}{}", "label tokens", stats.tokens));
    row(&format!(" {:<14}{}", "tour tokens", stats.tour_tokens));
    row(&format!(" {:<14}{}", "build time", timing_ms(build_ms)));
    section_mid("TOURS");
    for info in tours.iter() {
        let count = per_tour.get(&info.name).copied().unwrap_or(0);
        row(&format!(
            " {}{}",
            pad_right(&tour_label(&truncate(&info.name, 50), &info.color), 56),
            count
        ));
    }
    section_bot();
    Ok(())
}

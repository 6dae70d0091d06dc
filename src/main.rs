use anyhow::{Context, Result};
use catalog_filter::cli::{self, Commands, FilterArg, OutputFormat, SourceArgs};
use catalog_filter::config::{load_config, load_config_from, FilterConfig};
use catalog_filter::engine::{
    prepare_view, CatalogAction, CatalogLoad, CatalogState, PreparedView, UrlSync,
};
use catalog_filter::load_items;
use catalog_filter::url_state::MemoryUrlPort;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = cli::parse_args();
    initialize_tracing(cli.verbosity);

    match cli.command {
        Commands::View {
            source,
            keyword,
            sort,
            view,
            filters,
            format,
        } => {
            let mut overrides = Vec::new();
            overrides.extend(keyword.map(CatalogAction::SetKeyword));
            overrides.extend(sort.map(|s| CatalogAction::SetSort(s.into())));
            overrides.extend(view.map(|v| CatalogAction::SetView(v.into())));
            overrides.extend(filters.into_iter().map(filter_action));

            let session = run_session(&source, &overrides)?;
            match format {
                OutputFormat::Json => print_json(&session)?,
                OutputFormat::Terminal => print_items(&session),
            }
        }
        Commands::Options { source, format } => {
            let session = run_session(&source, &[])?;
            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&session.view.groups)?)
                }
                OutputFormat::Terminal => print_options(&session.view),
            }
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout only carries output.
fn initialize_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[derive(Debug, Serialize)]
struct Session {
    /// Canonical query string for the resulting state
    query: String,
    view: PreparedView,
}

/// Loads config and catalog, replays the query plus overrides, and
/// prepares the view.
fn run_session(source: &SourceArgs, overrides: &[CatalogAction]) -> Result<Session> {
    let config = resolve_config(source)?;
    let items = load_items(&source.catalog)?;

    let mut sync = UrlSync::new(MemoryUrlPort::new(source.query.as_str()), &config);
    let state = CatalogState::from_decoded(&sync.initial_state(), &config);
    let state = sync.dispatch(
        &state,
        &CatalogAction::CatalogRefreshed(items.clone()),
        &config,
    );

    let state = overrides.iter().fold(state, |state, action| {
        warn_unknown_filter(&state, action);
        sync.dispatch(&state, action, &config)
    });
    sync.publish(&state);

    let view = prepare_view(&CatalogLoad::Loaded(items), &state, &config);
    Ok(Session {
        query: sync.port().query().to_string(),
        view,
    })
}

fn resolve_config(source: &SourceArgs) -> Result<FilterConfig> {
    let config = match &source.config {
        Some(path) => load_config_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => load_config(),
    };
    Ok(config
        .with_environment_overrides()
        .with_count_policy(source.count_policy.map(Into::into)))
}

fn filter_action(filter: FilterArg) -> CatalogAction {
    CatalogAction::SetFilter {
        dimension: filter.dimension,
        value: filter.value,
        active: true,
    }
}

fn warn_unknown_filter(state: &CatalogState, action: &CatalogAction) {
    if let CatalogAction::SetFilter {
        dimension, value, ..
    } = action
    {
        if state.catalog.option(*dimension, value).is_none() {
            tracing::warn!("No {} option {:?} in this catalog", dimension, value);
        }
    }
}

fn print_json(session: &Session) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(session)?);
    Ok(())
}

fn print_items(session: &Session) {
    let view = &session.view;
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Name",
            "Display Name",
            "Provider",
            "Capability Level",
            "Categories",
        ]);

    for item in &view.items {
        table.add_row(vec![
            item.name.as_str(),
            item.display_name.as_str(),
            item.provider.as_deref().unwrap_or(""),
            item.maturity.as_str(),
            item.categories.as_deref().unwrap_or(""),
        ]);
    }

    println!("{table}");
    println!(
        "Showing {} of {} items ({} view, {})",
        view.summary.visible_items,
        view.summary.total_items,
        view.view,
        view.sort.display_name()
    );
    if !view.active_filters.is_empty() {
        let chips: Vec<String> = view
            .active_filters
            .iter()
            .map(|chip| format!("{}: {}", chip.dimension, chip.label))
            .collect();
        println!("Active filters: {}", chips.join(", "));
    }
    println!("Query: ?{}", session.query);
}

fn print_options(view: &PreparedView) {
    for group in &view.groups {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_header(vec![group.label.as_str(), "Count", "Active"]);
        for option in &group.options {
            table.add_row(vec![
                option.label.clone(),
                option.count.to_string(),
                if option.active { "yes" } else { "" }.to_string(),
            ]);
        }
        println!("{table}");
    }
}

use std::path::{Path, PathBuf};

use crate::io::config_io::read_config;
use crate::io::item_io::load_items;
use crate::model::config::SummitConfig;
use crate::model::item::all_ids;
use crate::model::timeframe::Timeframe;
use crate::ops::project::{Tab, project};
use crate::ops::sort::sort_for_tab;
use crate::ui::coordinator::WidgetCoordinator;
use crate::ui::expansion::ExpansionStore;
use crate::ui::rows::build_rows;

use super::commands::{Cli, Commands, ToggleArgs, ViewArgs, WindowArgs};
use super::output::{ViewJson, format_row_line, row_to_json};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let dir = match &cli.dir {
        Some(d) => std::fs::canonicalize(d)
            .map_err(|e| format!("cannot resolve -C path '{}': {}", d, e))?,
        None => std::env::current_dir()?,
    };
    let config = read_config(&dir)?;

    match cli.command {
        // No subcommand → default view
        None => cmd_view(&dir, &config, ViewArgs::default(), json),
        Some(Commands::View(args)) => cmd_view(&dir, &config, args, json),
        Some(Commands::Toggle(args)) => cmd_toggle(&dir, &config, args),
        Some(Commands::Expand) => cmd_set_all(&dir, &config, true),
        Some(Commands::Collapse) => cmd_set_all(&dir, &config, false),
        Some(Commands::Tabs) => {
            for tab in Tab::ALL {
                println!("{}", tab);
            }
            Ok(())
        }
    }
}

fn state_path(dir: &Path, config: &SummitConfig) -> PathBuf {
    dir.join(&config.state.file)
}

fn window_from_args(args: &WindowArgs) -> Timeframe {
    Timeframe::new(args.from.as_deref(), args.to.as_deref())
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_view(
    dir: &Path,
    config: &SummitConfig,
    args: ViewArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let tab: Tab = args
        .tab
        .as_deref()
        .unwrap_or(&config.view.default_tab)
        .parse()?;
    let window = window_from_args(&args.window);

    let items = load_items(&dir.join(&config.items.file))?;
    let mut store = ExpansionStore::load(&state_path(dir, config), &config.state.namespace);
    let ids = all_ids(&items);
    store.seed(ids.iter().map(String::as_str));

    let projected = sort_for_tab(&project(&items, tab, &window), tab);
    // A read-only view has no open editor; every row may offer its own
    let coordinator = WidgetCoordinator::new();
    let rows = build_rows(&projected, &store, &coordinator);

    if json {
        let view = ViewJson {
            tab: tab.to_string(),
            rows: rows.iter().map(row_to_json).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        if rows.is_empty() {
            println!("(no items on the {} tab)", tab);
        }
        for row in &rows {
            println!("{}", format_row_line(row));
        }
    }
    Ok(())
}

fn cmd_toggle(
    dir: &Path,
    config: &SummitConfig,
    args: ToggleArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let items = load_items(&dir.join(&config.items.file))?;
    if !all_ids(&items).contains(&args.id) {
        return Err(format!("no item with id {}", args.id).into());
    }
    let mut store = ExpansionStore::load(&state_path(dir, config), &config.state.namespace);
    store.toggle(&args.id);
    let state = if store.is_expanded(&args.id) {
        "expanded"
    } else {
        "collapsed"
    };
    println!("{} {}", state, args.id);
    Ok(())
}

fn cmd_set_all(
    dir: &Path,
    config: &SummitConfig,
    expanded: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let items = load_items(&dir.join(&config.items.file))?;
    let ids = all_ids(&items);
    let mut store = ExpansionStore::load(&state_path(dir, config), &config.state.namespace);
    if expanded {
        store.expand_all(ids.iter().map(String::as_str));
        println!("expanded {} items", ids.len());
    } else {
        store.collapse_all(ids.iter().map(String::as_str));
        println!("collapsed {} items", ids.len());
    }
    Ok(())
}

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::model::category::Category;
use crate::ops::filter;
use crate::ops::store::{StoreError, TaskStore};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let dir = match cli.data_dir {
        Some(ref d) => PathBuf::from(d),
        None => std::env::current_dir()?,
    };
    let mut store = open_store(&dir);

    match cli.command {
        Commands::Add(args) => cmd_add(&mut store, args),
        Commands::List(args) => cmd_list(&store, args, json),
        Commands::Edit(args) => cmd_edit(&mut store, args),
        Commands::Done(args) => cmd_done(&mut store, args),
        Commands::Rm(args) => cmd_rm(&mut store, args),
        Commands::Up(args) => cmd_up(&mut store, args),
        Commands::Down(args) => cmd_down(&mut store, args),
        Commands::Mv(args) => cmd_mv(&mut store, args),
        Commands::Completed => cmd_completed(&store, json),
        Commands::Labels => cmd_labels(&store, json),
    }
}

/// Load the store, falling back to an empty one (with a warning) when the
/// data file cannot be read. The app stays usable either way.
fn open_store(dir: &Path) -> TaskStore {
    match TaskStore::load(dir) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("warning: {} (starting from an empty store)", e);
            TaskStore::empty(dir)
        }
    }
}

fn parse_due_arg(due: Option<&str>) -> Result<Option<NaiveDate>, String> {
    due.map(parse_due).transpose()
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn cmd_add(store: &mut TaskStore, args: AddArgs) -> Result<(), Box<dyn std::error::Error>> {
    let category = parse_category(&args.category)?;
    let due = parse_due_arg(args.due.as_deref())?;
    let task = store.create(category, &args.name, &args.desc, due, &args.labels)?;
    println!("added {} to {} (priority {})", task.id, category.key(), task.priority);
    Ok(())
}

fn cmd_edit(store: &mut TaskStore, args: EditArgs) -> Result<(), Box<dyn std::error::Error>> {
    let due = parse_due_arg(args.due.as_deref())?;
    match store.edit(&args.id, &args.name, &args.desc, due, &args.labels) {
        Ok(()) => {
            println!("updated {}", args.id);
            Ok(())
        }
        Err(StoreError::NotFound(id)) => {
            println!("no active task {}", id);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn cmd_done(store: &mut TaskStore, args: TargetArgs) -> Result<(), Box<dyn std::error::Error>> {
    let category = parse_category(&args.category)?;
    if !store.tasks(category).iter().any(|t| t.id == args.id) {
        println!("no task {} in {}", args.id, category.key());
        return Ok(());
    }
    store.complete(category, &args.id)?;
    println!("completed {}", args.id);
    Ok(())
}

fn cmd_rm(store: &mut TaskStore, args: RmArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.category == "completed" {
        if !store.completed().iter().any(|t| t.id == args.id) {
            println!("no completed task {}", args.id);
            return Ok(());
        }
        store.delete_completed(&args.id)?;
        println!("deleted {} from completed", args.id);
        return Ok(());
    }

    let category = parse_category(&args.category)?;
    if !store.tasks(category).iter().any(|t| t.id == args.id) {
        println!("no task {} in {}", args.id, category.key());
        return Ok(());
    }
    store.delete(category, &args.id)?;
    println!("deleted {}", args.id);
    Ok(())
}

fn cmd_up(store: &mut TaskStore, args: TargetArgs) -> Result<(), Box<dyn std::error::Error>> {
    let category = parse_category(&args.category)?;
    if store.move_up(category, &args.id)? {
        println!("moved {} up", args.id);
    } else {
        println!("nothing to move");
    }
    Ok(())
}

fn cmd_down(store: &mut TaskStore, args: TargetArgs) -> Result<(), Box<dyn std::error::Error>> {
    let category = parse_category(&args.category)?;
    if store.move_down(category, &args.id)? {
        println!("moved {} down", args.id);
    } else {
        println!("nothing to move");
    }
    Ok(())
}

fn cmd_mv(store: &mut TaskStore, args: MvArgs) -> Result<(), Box<dyn std::error::Error>> {
    let from = parse_category(&args.from)?;
    let to = parse_category(&args.to)?;
    if store.move_to(from, to, &args.id)? {
        println!("moved {} to {}", args.id, to.key());
    } else {
        println!("no task {} in {}", args.id, from.key());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(store: &TaskStore, args: ListArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let categories: Vec<Category> = match args.category {
        Some(ref s) => vec![parse_category(s)?],
        None => Category::ALL.to_vec(),
    };
    let active: HashSet<String> = args.labels.into_iter().collect();

    if json {
        let mut doc = serde_json::Map::new();
        for category in &categories {
            let tasks = filter::filter_by_labels(store.tasks(*category), &active);
            doc.insert(category.key().to_string(), serde_json::to_value(tasks)?);
        }
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::Value::Object(doc))?
        );
        return Ok(());
    }

    let mut first = true;
    for category in categories {
        if !first {
            println!();
        }
        first = false;
        println!("{}", format_quadrant_header(category));
        let tasks = filter::filter_by_labels(store.tasks(category), &active);
        if tasks.is_empty() {
            println!("  (no tasks)");
            continue;
        }
        for task in tasks {
            println!("{}", format_task_line(task, store.label_colors()));
        }
    }
    Ok(())
}

fn cmd_completed(store: &TaskStore, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(store.completed())?);
        return Ok(());
    }

    if store.completed().is_empty() {
        println!("no completed tasks");
        return Ok(());
    }
    for task in store.completed().iter().rev() {
        println!("{}", format_completed_line(task));
    }
    Ok(())
}

fn cmd_labels(store: &TaskStore, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(store.label_colors())?);
        return Ok(());
    }

    for (name, color) in store.label_colors() {
        println!("  {}  {}", paint_label(name, color), color);
    }
    Ok(())
}

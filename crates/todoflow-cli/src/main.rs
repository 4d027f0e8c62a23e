use std::collections::HashSet;
use std::env;
use std::path::PathBuf;

use todoflow_core::selectors;
use todoflow_core::LoadStatus;
use todoflow_core::Todo;
use todoflow_core::TodoAction;
use todoflow_core::TodoChanges;
use todoflow_core::TodoDraft;
use todoflow_core::TodoId;
use todoflow_store::JsonFileStorage;
use todoflow_store::TodoStore;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("TODOFLOW_LOG")
        .unwrap_or_else(|_| EnvFilter::new("todoflow=warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args: Vec<String> = env::args().skip(1).collect();
    let file = take_value(&mut args, "--file")?;

    if args.is_empty() {
        print_help();
        return Ok(());
    }
    let command = args.remove(0);

    match command.as_str() {
        "--help" | "-h" | "help" => {
            print_help();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("todoflow {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "add" => cmd_add(open_store(file)?, args),
        "list" => cmd_list(open_store(file)?, args),
        "edit" => cmd_edit(open_store(file)?, args),
        "toggle" => cmd_toggle(open_store(file)?, args),
        "delete" => cmd_delete(open_store(file)?, args),
        "move" => cmd_move(open_store(file)?, args),
        _ => {
            print_help();
            Err(format!("unknown command: {command}").into())
        }
    }
}

fn slot_path(file: Option<String>) -> PathBuf {
    if let Some(file) = file {
        return PathBuf::from(file);
    }
    if let Ok(file) = env::var("TODOFLOW_FILE") {
        return PathBuf::from(file);
    }
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("todoflow")
        .join("todos.json")
}

/// Opens the slot and settles the initial load before any command runs.
fn open_store(
    file: Option<String>,
) -> Result<TodoStore<JsonFileStorage>, Box<dyn std::error::Error>> {
    let storage = JsonFileStorage::open(slot_path(file))?;
    let mut store = TodoStore::new(storage);
    store.dispatch(TodoAction::Load);
    if store.state().status == LoadStatus::Error {
        let message = store
            .state()
            .error
            .clone()
            .unwrap_or_else(|| "load failed".to_string());
        return Err(message.into());
    }
    Ok(store)
}

fn ensure_settled(store: &TodoStore<JsonFileStorage>) -> Result<(), Box<dyn std::error::Error>> {
    match store.state().error.clone() {
        Some(message) => Err(message.into()),
        None => Ok(()),
    }
}

fn cmd_add(
    mut store: TodoStore<JsonFileStorage>,
    mut args: Vec<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let description = take_value(&mut args, "--description")?;
    let completed = take_flag(&mut args, "--completed");
    let title = one_positional(args, "add TITLE")?;
    if title.trim().is_empty() {
        return Err("title must not be empty".into());
    }

    let before: HashSet<TodoId> = store.state().todos.keys().cloned().collect();
    store.dispatch(TodoAction::Add {
        draft: TodoDraft {
            title,
            description,
            completed,
        },
    });
    ensure_settled(&store)?;

    let created = selectors::all_todos(store.state())
        .into_iter()
        .find(|todo| !before.contains(&todo.id))
        .ok_or("added todo not found in state")?;
    println!("added {}", created.id);
    Ok(())
}

fn cmd_list(
    store: TodoStore<JsonFileStorage>,
    mut args: Vec<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let active = take_flag(&mut args, "--active");
    let completed = take_flag(&mut args, "--completed");
    let search = take_value(&mut args, "--search")?;
    let json = take_flag(&mut args, "--json");
    no_positionals(&args)?;
    if active && completed {
        return Err("--active and --completed are mutually exclusive".into());
    }

    let todos = if active {
        selectors::active_todos(store.state())
    } else if completed {
        selectors::completed_todos(store.state())
    } else {
        selectors::all_todos(store.state())
    };
    let todos = match search {
        Some(term) => selectors::search_todos(&todos, &term),
        None => todos,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&todos)?);
        return Ok(());
    }
    if todos.is_empty() {
        println!("no todos");
        return Ok(());
    }
    for todo in &todos {
        print_line(todo);
    }
    Ok(())
}

fn cmd_edit(
    mut store: TodoStore<JsonFileStorage>,
    mut args: Vec<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let title = take_value(&mut args, "--title")?;
    let description = take_value(&mut args, "--description")?;
    let id = one_positional(args, "edit ID")?;
    if title.as_deref().is_some_and(|title| title.trim().is_empty()) {
        return Err("title must not be empty".into());
    }

    let changes = TodoChanges {
        title,
        description,
        ..TodoChanges::default()
    };
    if changes.is_empty() {
        return Err("nothing to change: pass --title and/or --description".into());
    }

    store.dispatch(TodoAction::Update {
        id: TodoId(id.clone()),
        changes,
    });
    ensure_settled(&store)?;
    println!("updated {id}");
    Ok(())
}

fn cmd_toggle(
    mut store: TodoStore<JsonFileStorage>,
    args: Vec<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let id = one_positional(args, "toggle ID")?;
    let id = TodoId(id);
    // The pipeline treats a toggle of an unknown id as a silent no-op, so
    // the lookup happens here, at the gesture boundary.
    if selectors::todo_by_id(store.state(), &id).is_none() {
        return Err(format!("unknown todo id: {id}").into());
    }

    store.dispatch(TodoAction::Toggle { id: id.clone() });
    ensure_settled(&store)?;

    let todo = selectors::todo_by_id(store.state(), &id).ok_or("toggled todo vanished")?;
    println!(
        "{} {}",
        if todo.completed { "completed" } else { "reopened" },
        id
    );
    Ok(())
}

fn cmd_delete(
    mut store: TodoStore<JsonFileStorage>,
    args: Vec<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let id = one_positional(args, "delete ID")?;

    store.dispatch(TodoAction::Delete {
        id: TodoId(id.clone()),
    });
    ensure_settled(&store)?;
    println!("deleted {id}");
    Ok(())
}

/// Moves one todo to a new index within its completion group and dispatches
/// the resulting full group order — the command-line stand-in for a drag.
fn cmd_move(
    mut store: TodoStore<JsonFileStorage>,
    args: Vec<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let (id, index) = two_positionals(args, "move ID INDEX")?;
    let index: usize = index
        .parse()
        .map_err(|_| format!("INDEX must be a non-negative integer, got {index}"))?;
    let id = TodoId(id);

    let Some(todo) = selectors::todo_by_id(store.state(), &id) else {
        return Err(format!("unknown todo id: {id}").into());
    };
    let completed = todo.completed;
    let group = if completed {
        selectors::completed_todos(store.state())
    } else {
        selectors::active_todos(store.state())
    };

    let mut ids: Vec<TodoId> = group
        .iter()
        .map(|todo| todo.id.clone())
        .filter(|other| *other != id)
        .collect();
    let index = index.min(ids.len());
    ids.insert(index, id.clone());

    store.dispatch(TodoAction::Reorder { ids, completed });
    ensure_settled(&store)?;
    println!("moved {id} to index {index}");
    Ok(())
}

fn print_line(todo: &Todo) {
    let mark = if todo.completed { "x" } else { " " };
    println!("[{mark}] {}  {}", todo.id, todo.title);
    if let Some(description) = todo.description.as_deref() {
        println!("    {description}");
    }
}

fn take_flag(args: &mut Vec<String>, name: &str) -> bool {
    match args.iter().position(|arg| arg == name) {
        Some(index) => {
            args.remove(index);
            true
        }
        None => false,
    }
}

fn take_value(
    args: &mut Vec<String>,
    name: &str,
) -> Result<Option<String>, Box<dyn std::error::Error>> {
    let Some(index) = args.iter().position(|arg| arg == name) else {
        return Ok(None);
    };
    if index + 1 >= args.len() {
        return Err(format!("{name} requires a value").into());
    }
    args.remove(index);
    Ok(Some(args.remove(index)))
}

fn one_positional(
    args: Vec<String>,
    usage: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    let mut args = args.into_iter();
    let Some(value) = args.next() else {
        return Err(format!("usage: todoflow {usage}").into());
    };
    if let Some(extra) = args.next() {
        return Err(format!("unsupported argument: {extra}").into());
    }
    Ok(value)
}

fn two_positionals(
    args: Vec<String>,
    usage: &str,
) -> Result<(String, String), Box<dyn std::error::Error>> {
    let mut args = args.into_iter();
    let (Some(first), Some(second)) = (args.next(), args.next()) else {
        return Err(format!("usage: todoflow {usage}").into());
    };
    if let Some(extra) = args.next() {
        return Err(format!("unsupported argument: {extra}").into());
    }
    Ok((first, second))
}

fn no_positionals(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    match args.first() {
        Some(extra) => Err(format!("unsupported argument: {extra}").into()),
        None => Ok(()),
    }
}

fn print_help() {
    println!("todoflow {}", env!("CARGO_PKG_VERSION"));
    println!("Usage:");
    println!("  todoflow add TITLE [--description TEXT] [--completed]");
    println!("  todoflow list [--active | --completed] [--search TERM] [--json]");
    println!("  todoflow edit ID [--title TEXT] [--description TEXT]");
    println!("  todoflow toggle ID");
    println!("  todoflow delete ID");
    println!("  todoflow move ID INDEX");
    println!("  todoflow --help");
    println!("  todoflow --version");
    println!();
    println!("Options:");
    println!("  --file PATH   storage slot to use (default: TODOFLOW_FILE or the user data dir)");
}

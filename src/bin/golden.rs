//! A terminal schedule keeper: a live clock above a persisted task list.
//!
//! Tasks are stored as a JSON array in a single file (`./golden-tasks.json` unless a path
//! is given as the first argument), so they survive across runs.

use std::io::BufRead;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{Local, NaiveDate, NaiveTime};

use golden_scheduler::clock;
use golden_scheduler::storage::FileStorage;
use golden_scheduler::utils::print_task_list;
use golden_scheduler::{Clock, TaskStore};

fn storage_file() -> PathBuf {
    match std::env::args().nth(1) {
        Some(path) => PathBuf::from(path),
        None => {
            let storage_key = golden_scheduler::config::STORAGE_KEY.lock().unwrap().clone();
            PathBuf::from(format!("{}.json", storage_key))
        }
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let storage = FileStorage::new(&storage_file());
    println!("Storing tasks in {:?}", storage.file());
    println!("You can set the RUST_LOG environment variable to display more info.");
    println!();

    let mut store = TaskStore::load_or_default(storage);
    store.on_change(Box::new(|tasks| {
        println!("-- {} task(s) scheduled --", tasks.len());
        print_task_list(tasks);
    }));

    // The clock ticks in the background and refreshes the "current moment" cell,
    // which the prompt displays
    let moment = Arc::new(Mutex::new(Local::now()));
    let clock_cell = Arc::clone(&moment);
    let mut clock = Clock::start(Duration::from_secs(1), move |now| {
        *clock_cell.lock().unwrap() = now;
    });

    println!("-- {} task(s) scheduled --", store.len());
    print_task_list(store.tasks());
    print_help();

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Err(err) => {
                log::error!("Unable to read the command line: {}", err);
                break;
            }
            Ok(line) => line,
        };

        let now = *moment.lock().unwrap();
        println!("[{} | {}]", clock::format_time(&now), clock::format_date(&now));

        let mut words = line.trim().splitn(2, ' ');
        match (words.next(), words.next()) {
            (Some(""), _) | (None, _) => continue,
            (Some("add"), Some(arguments)) => add_task(&mut store, arguments),
            (Some("del"), Some(argument)) => match nth_task_id(&store, argument) {
                None => println!("No such task."),
                Some(id) => store.delete(&id),
            },
            (Some("done"), Some(argument)) => match nth_task_id(&store, argument) {
                None => println!("No such task."),
                Some(id) => store.set_completed(&id, true),
            },
            (Some("list"), _) => {
                println!("-- {} task(s) scheduled --", store.len());
                print_task_list(store.tasks());
            }
            (Some("time"), _) => (),
            (Some("quit"), _) | (Some("q"), _) => break,
            _ => print_help(),
        }
    }

    clock.stop();
}

fn print_help() {
    println!("Commands:");
    println!("  add <YYYY-MM-DD> <HH:MM> <description>");
    println!("  done <n>    mark the n-th displayed task as completed");
    println!("  del <n>     delete the n-th displayed task");
    println!("  list        display the schedule");
    println!("  time        display the current time");
    println!("  quit");
}

/// Parse and validate the `add` arguments, then schedule the task.
/// This plays the role of the input widgets: the store itself does not re-validate syntax.
fn add_task(store: &mut TaskStore<FileStorage>, arguments: &str) {
    let mut words = arguments.splitn(3, ' ');
    let (date, time, text) = match (words.next(), words.next(), words.next()) {
        (Some(date), Some(time), Some(text)) => (date, time, text.trim()),
        _ => {
            println!("Missing arguments.");
            print_help();
            return;
        }
    };

    if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
        println!("Invalid date {:?} (expected YYYY-MM-DD).", date);
        return;
    }
    if NaiveTime::parse_from_str(time, "%H:%M").is_err() {
        println!("Invalid time {:?} (expected HH:MM).", time);
        return;
    }

    if store.add(date, time, text).is_none() {
        println!("Nothing was added.");
    }
}

fn nth_task_id(store: &TaskStore<FileStorage>, argument: &str) -> Option<golden_scheduler::TaskId> {
    let n: usize = argument.trim().parse().ok()?;
    if n == 0 {
        return None;
    }
    store.tasks().get(n - 1).map(|task| task.id().clone())
}

//! Some utility functions

use std::cmp::Ordering;

use crate::task::Task;

/// Compare two tasks chronologically, i.e. by their `(date, time)` tuple.
///
/// Plain string comparison is correct here because both fields are zero-padded.
/// Tasks sharing the exact same date and time compare equal; their relative order is
/// whatever the caller's sort leaves them in.
pub fn compare_chronological(left: &Task, right: &Task) -> Ordering {
    match Ord::cmp(left.date(), right.date()) {
        Ordering::Equal => Ord::cmp(left.time(), right.time()),
        date_ordering => date_ordering,
    }
}

/// A debug utility that pretty-prints a task list
pub fn print_task_list(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("    (nothing scheduled)");
        return;
    }
    for (n, task) in tasks.iter().enumerate() {
        print_task(n + 1, task);
    }
}

pub fn print_task(n: usize, task: &Task) {
    let completion = if task.completed() { "✓" } else { " " };
    println!("  {:>2}. [{}] {} {}\t{}", n, completion, task.date(), task.time(), task.text());
}

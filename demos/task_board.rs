//! Demonstration of task list and theme stores

use signalbox::AppState;

#[derive(Clone, Debug)]
struct Task {
    title: String,
    completed: bool,
}

fn main() {
    println!("=== Task Board Example ===\n");

    let state: AppState<Task> = AppState::new();

    let _list = state.task_list.subscribe(|tasks| {
        println!("[ui] {} task(s):", tasks.len());
        for task in tasks {
            let status = if task.completed { "x" } else { " " };
            println!("  [{}] {}", status, task.title);
        }
    });

    let _theme = state.dark_theme.subscribe(|dark| {
        let name = if *dark { "dark" } else { "light" };
        println!("[ui] theme: {name}");
    });

    println!("\nAdding tasks...");
    state.task_list.update(|tasks| {
        tasks.push(Task {
            title: "write the grocery list".to_string(),
            completed: false,
        });
    });
    state.task_list.update(|tasks| {
        tasks.push(Task {
            title: "water the plants".to_string(),
            completed: false,
        });
    });

    println!("\nCompleting the first task...");
    state.task_list.update(|tasks| {
        if let Some(task) = tasks.first_mut() {
            task.completed = true;
        }
    });

    println!("\nToggling the theme...");
    state.dark_theme.update(|dark| *dark = !*dark);
}

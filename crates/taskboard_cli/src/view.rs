use tabled::settings::Style;
use tabled::{Table, Tabled};
use taskboard_core::model::Task;

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "#")]
    position: usize,
    id: u64,
    title: String,
    description: String,
}

/// One row per task in sequence order; the position column is the handle
/// `delete` accepts.
pub fn render_table(tasks: &[Task]) -> String {
    let rows = tasks.iter().enumerate().map(|(position, task)| TaskRow {
        position,
        id: task.id,
        title: task.title.clone(),
        description: task.description.clone(),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    table.to_string()
}

pub fn task_json(task: &Task) -> serde_json::Value {
    serde_json::json!({
        "id": task.id,
        "title": task.title,
        "description": task.description,
    })
}

pub fn tasks_json(tasks: &[Task]) -> serde_json::Value {
    let payload = tasks
        .iter()
        .enumerate()
        .map(|(position, task)| {
            serde_json::json!({
                "position": position,
                "id": task.id,
                "title": task.title,
                "description": task.description,
            })
        })
        .collect();
    serde_json::Value::Array(payload)
}

use crate::error::AppError;
use crate::model::Task;
use crate::storage::TextStore;

pub const TASKS_KEY: &str = "tasks";

pub struct TaskBoard<S: TextStore> {
    store: S,
    tasks: Vec<Task>,
    draft_title: String,
    next_id: u64,
}

impl<S: TextStore> TaskBoard<S> {
    pub fn initialize(store: S) -> Result<Self, AppError> {
        // Absent or unparseable task text loads as an empty collection.
        let tasks = match store.get(TASKS_KEY)? {
            Some(text) => serde_json::from_str::<Vec<Task>>(&text).unwrap_or_default(),
            None => Vec::new(),
        };
        let next_id = tasks.iter().map(|task| task.id).max().unwrap_or(0) + 1;

        Ok(Self {
            store,
            tasks,
            draft_title: String::new(),
            next_id,
        })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn draft_title(&self) -> &str {
        &self.draft_title
    }

    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn set_draft(&mut self, text: &str) {
        self.draft_title = text.to_string();
    }

    pub fn add_task(&mut self) -> Result<Task, AppError> {
        let task = Task {
            id: self.next_id,
            title: std::mem::take(&mut self.draft_title),
            description: String::new(),
        };

        self.tasks.push(task.clone());
        self.next_id += 1;
        self.persist()?;

        Ok(task)
    }

    // An out-of-bounds index leaves the collection unchanged; the
    // collection is written back either way.
    pub fn delete_at(&mut self, index: usize) -> Result<Option<Task>, AppError> {
        let removed = if index < self.tasks.len() {
            Some(self.tasks.remove(index))
        } else {
            None
        };

        self.persist()?;
        Ok(removed)
    }

    fn persist(&self) -> Result<(), AppError> {
        let text = serde_json::to_string_pretty(&self.tasks)
            .map_err(|err| AppError::invalid_data(err.to_string()))?;
        self.store.set(TASKS_KEY, &text)
    }
}

use crate::clock::{Clock, SystemClock};
use crate::ident::{IdSource, id_source_from_env};
use crate::model::Task;

/// Closed set of mutations the UI collaborator can dispatch into the
/// store. Handled by an exhaustive match so adding a variant forces every
/// dispatcher to handle it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { text: String },
    Remove { id: u32 },
    Update { id: u32, text: String },
    Complete { id: u32 },
    DeleteAll,
}

/// Sole owner of the ordered task collection.
///
/// Commands are applied one at a time, synchronously; each returns the new
/// collection snapshot. The store performs no I/O and no text validation:
/// rejecting blank submissions is the caller's job, before dispatch.
/// Commands naming an unknown id are no-ops. When two tasks share an id
/// (possible, see `ident::RandomIds`), id-addressed commands affect the
/// first-created one.
pub struct TaskStore {
    tasks: Vec<Task>,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdSource>,
}

impl TaskStore {
    pub fn new(clock: Box<dyn Clock>, ids: Box<dyn IdSource>) -> Self {
        Self {
            tasks: Vec::new(),
            clock,
            ids,
        }
    }

    /// Store wired to the system clock and the environment-selected id
    /// source.
    pub fn with_system_services() -> Self {
        Self::new(Box::new(SystemClock), id_source_from_env())
    }

    /// Current collection snapshot, in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Applies one command and returns the new snapshot.
    pub fn apply(&mut self, command: Command) -> &[Task] {
        match command {
            Command::Add { text } => {
                let task = Task {
                    id: self.ids.next_id(),
                    text,
                    completed: false,
                    created_date: self.clock.today(),
                    created_time: self.clock.now(),
                };
                self.tasks.push(task);
            }
            Command::Remove { id } => {
                if let Some(index) = self.tasks.iter().position(|task| task.id == id) {
                    self.tasks.remove(index);
                }
            }
            Command::Update { id, text } => {
                if let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) {
                    task.text = text;
                }
            }
            Command::Complete { id } => {
                if let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) {
                    task.completed = true;
                }
            }
            Command::DeleteAll => self.tasks.clear(),
        }

        &self.tasks
    }

    pub fn add(&mut self, text: &str) -> &[Task] {
        self.apply(Command::Add {
            text: text.to_string(),
        })
    }

    pub fn remove(&mut self, id: u32) -> &[Task] {
        self.apply(Command::Remove { id })
    }

    pub fn update(&mut self, id: u32, text: &str) -> &[Task] {
        self.apply(Command::Update {
            id,
            text: text.to_string(),
        })
    }

    pub fn complete(&mut self, id: u32) -> &[Task] {
        self.apply(Command::Complete { id })
    }

    pub fn delete_all(&mut self) -> &[Task] {
        self.apply(Command::DeleteAll)
    }
}

//! The in-memory task collection.
//!
//! Insertion order is display order. Every mutation goes through exactly one
//! method here, and subscribers observe it through the signals, so rendering
//! after a mutation is not something callers have to remember.

use crate::stats::TaskStats;
use futures_signals::signal::Signal;
use futures_signals::signal_vec::{MutableVec, SignalVec, SignalVecExt};
use taskboard_api::{Task, TaskId};

pub struct TaskStore {
    tasks: MutableVec<Task>,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            tasks: MutableVec::new(),
        }
    }

    /// Current contents, in display order
    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.lock_ref().to_vec()
    }

    pub fn get(&self, id: &TaskId) -> Option<Task> {
        self.tasks.lock_ref().iter().find(|t| &t.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.tasks.lock_ref().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> TaskStats {
        TaskStats::from_tasks(&self.tasks.lock_ref())
    }

    pub fn signal_vec(&self) -> impl SignalVec<Item = Task> + use<> {
        self.tasks.signal_vec_cloned()
    }

    /// The whole collection, re-emitted after every change
    pub fn signal(&self) -> impl Signal<Item = Vec<Task>> + use<> {
        self.signal_vec().to_signal_cloned()
    }

    pub(crate) fn replace_all(&self, tasks: Vec<Task>) {
        self.tasks.lock_mut().replace_cloned(tasks);
    }

    /// Newly created tasks go first
    pub(crate) fn prepend(&self, task: Task) {
        self.tasks.lock_mut().insert_cloned(0, task);
    }

    /// Swap in the server's version of a task, keeping its position.
    /// Returns `false` when no task has that id.
    pub(crate) fn replace(&self, task: Task) -> bool {
        let mut tasks = self.tasks.lock_mut();
        match tasks.iter().position(|t| t.id == task.id) {
            Some(index) => {
                tasks.set_cloned(index, task);
                true
            }
            None => false,
        }
    }

    /// Returns `false` when no task has that id.
    pub(crate) fn remove(&self, id: &TaskId) -> bool {
        let mut tasks = self.tasks.lock_mut();
        match tasks.iter().position(|t| &t.id == id) {
            Some(index) => {
                tasks.remove(index);
                true
            }
            None => false,
        }
    }
}

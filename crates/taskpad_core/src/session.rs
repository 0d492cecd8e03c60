//! Presentation-facing session facade.
//!
//! # Responsibility
//! - Bundle store, view filter and suggestion panel into one state object
//!   the rendering layer drives.
//! - Keep the whole collaborator surface in one place: intent events come
//!   in as method calls, renderable state goes out as plain data.
//!
//! # Invariants
//! - Constructed explicitly at startup and passed to the renderer; there
//!   is no ambient global instance.
//! - Task text is handed out raw, exactly as stored. Escaping it for
//!   markup is the renderer's duty before embedding it anywhere.

use crate::classify;
use crate::filter::{self, Filter};
use crate::model::task::{Task, TaskId};
use crate::repo::{RepoResult, TaskRepository};
use crate::schedule::{Clock, PendingSweep};
use crate::store::{ClearOutcome, ConfirmationGate, TaskStore};
use crate::suggest::{Direction, SuggestionEngine};

/// One user session over the persisted task collection.
///
/// The view filter always starts at [`Filter::All`]; it is session state,
/// never persisted.
pub struct TaskSession<R: TaskRepository, C: Clock> {
    store: TaskStore<R, C>,
    filter: Filter,
    suggestions: SuggestionEngine,
}

impl<R: TaskRepository, C: Clock> TaskSession<R, C> {
    /// Loads persisted tasks and opens a fresh session over them.
    pub fn start(repo: R, clock: C) -> RepoResult<Self> {
        Ok(Self {
            store: TaskStore::load(repo, clock)?,
            filter: Filter::default(),
            suggestions: SuggestionEngine::default(),
        })
    }

    // --- task collection ---------------------------------------------

    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    /// Tasks visible under the current filter, in creation order.
    pub fn filtered_tasks(&self) -> Vec<&Task> {
        filter::apply(self.store.tasks(), self.filter)
    }

    /// Count of not-yet-completed tasks, for the "N of M remaining"
    /// footer.
    pub fn active_count(&self) -> usize {
        self.store.active_count()
    }

    /// Icon token for a task's text, default icon when no rule matches.
    pub fn task_icon(&self, text: &str) -> &'static str {
        classify::icon_for(text)
    }

    pub fn create(&mut self, text: &str) -> Option<TaskId> {
        self.store.create(text)
    }

    pub fn toggle(&mut self, id: TaskId) -> bool {
        self.store.toggle(id)
    }

    pub fn edit(&mut self, id: TaskId, new_text: &str) -> bool {
        self.store.edit(id, new_text)
    }

    pub fn delete(&mut self, id: TaskId, gate: &dyn ConfirmationGate) -> bool {
        self.store.delete(id, gate)
    }

    pub fn clear_completed(&mut self, gate: &dyn ConfirmationGate) -> ClearOutcome {
        self.store.clear_completed(gate)
    }

    /// Fires the deferred clear-completed mutation once due; the event
    /// loop calls this periodically.
    pub fn run_due_sweep(&mut self) -> usize {
        self.store.run_due_sweep()
    }

    pub fn cancel_sweep(&mut self) -> bool {
        self.store.cancel_sweep()
    }

    pub fn pending_sweep(&self) -> Option<&PendingSweep> {
        self.store.pending_sweep()
    }

    // --- view filter --------------------------------------------------

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    // --- suggestion panel ---------------------------------------------

    /// Rebuilds the suggestion panel from the current input text.
    pub fn show_suggestions(&mut self, input: &str) {
        self.suggestions.update_input(input);
    }

    pub fn navigate_suggestions(&mut self, direction: Direction) {
        self.suggestions.navigate(direction);
    }

    /// Accepts the highlighted suggestion, or `None` when nothing is
    /// highlighted (the caller then adds the raw typed text).
    pub fn confirm_suggestion(&mut self) -> Option<String> {
        self.suggestions.confirm()
    }

    /// Accepts a pointer-picked suggestion.
    pub fn select_suggestion(&mut self, phrase: &str) -> String {
        self.suggestions.select(phrase)
    }

    pub fn hide_suggestions(&mut self) {
        self.suggestions.close();
    }

    pub fn suggestions(&self) -> &SuggestionEngine {
        &self.suggestions
    }
}

//! View navigation for the App.

use super::App;
use crate::state::{LoadAction, ViewId};

impl App {
    /// Run the initial view's load action, if any.
    pub fn start(&mut self) {
        let view = self.views.active();
        tracing::info!("Starting on {} view", view);
        if let Some(action) = view.load_action() {
            self.run_load(action);
        }
    }

    /// Make `view` the active surface and run its load action.
    pub fn select_view(&mut self, view: ViewId) {
        let transition = self.views.select(view);
        if transition.changed_view() {
            self.cancellation.deactivate(transition.from);
            tracing::debug!("View {} -> {}", transition.from, transition.to);
        }
        if let Some(action) = transition.load {
            self.run_load(action);
        }
        self.mark_dirty();
    }

    pub fn next_view(&mut self) {
        self.select_view(self.views.active().next());
    }

    pub fn prev_view(&mut self) {
        self.select_view(self.views.active().prev());
    }

    fn run_load(&mut self, action: LoadAction) {
        match action {
            LoadAction::ReloadFeed => self.load_articles(),
            LoadAction::ReloadConfig => self.load_config(),
        }
    }
}

//! Surface selection.
//!
//! Exactly one [`ViewId`] is active at any time; the controller stores a
//! single `active` field, so the invariant holds by construction. Nav
//! controls are a static table bound to views for the process lifetime.

use std::fmt;
use std::str::FromStr;

/// The three mutually exclusive surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewId {
    #[default]
    Chat,
    Feed,
    Settings,
}

/// Work to run when a view becomes active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadAction {
    /// FeedManager.load
    ReloadFeed,
    /// ConfigEditor.load
    ReloadConfig,
}

impl ViewId {
    pub const ALL: [ViewId; 3] = [ViewId::Chat, ViewId::Feed, ViewId::Settings];

    /// Load action registered for this view.
    pub fn load_action(self) -> Option<LoadAction> {
        match self {
            ViewId::Chat => None,
            ViewId::Feed => Some(LoadAction::ReloadFeed),
            ViewId::Settings => Some(LoadAction::ReloadConfig),
        }
    }

    pub fn index(self) -> usize {
        match self {
            ViewId::Chat => 0,
            ViewId::Feed => 1,
            ViewId::Settings => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ViewId::Chat => "chat",
            ViewId::Feed => "feed",
            ViewId::Settings => "settings",
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "chat" => Ok(ViewId::Chat),
            "feed" => Ok(ViewId::Feed),
            "settings" | "config" => Ok(ViewId::Settings),
            other => Err(format!("unknown view '{}'", other)),
        }
    }
}

/// A navigation control bound to one view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavControl {
    pub view: ViewId,
    pub label: &'static str,
    pub hotkey: &'static str,
}

/// Nav controls in display order.
pub const NAV_CONTROLS: [NavControl; 3] = [
    NavControl {
        view: ViewId::Chat,
        label: "Chat",
        hotkey: "F1",
    },
    NavControl {
        view: ViewId::Feed,
        label: "Feed",
        hotkey: "F2",
    },
    NavControl {
        view: ViewId::Settings,
        label: "Settings",
        hotkey: "F3",
    },
];

/// Result of selecting a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: ViewId,
    pub to: ViewId,
    /// Load action the caller must run after switching
    pub load: Option<LoadAction>,
}

impl Transition {
    pub fn changed_view(&self) -> bool {
        self.from != self.to
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewController {
    active: ViewId,
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new(ViewId::default())
    }
}

impl ViewController {
    pub fn new(initial: ViewId) -> Self {
        Self { active: initial }
    }

    pub fn active(&self) -> ViewId {
        self.active
    }

    pub fn is_active(&self, view: ViewId) -> bool {
        self.active == view
    }

    /// Nav controls paired with their active flag.
    pub fn nav_controls(&self) -> impl Iterator<Item = (&'static NavControl, bool)> + '_ {
        NAV_CONTROLS
            .iter()
            .map(move |control| (control, control.view == self.active))
    }

    /// Deactivate the current view, activate `view` and report its load
    /// action. Re-selecting the active view still reports the action.
    pub fn select(&mut self, view: ViewId) -> Transition {
        let from = self.active;
        self.active = view;
        Transition {
            from,
            to: view,
            load: view.load_action(),
        }
    }
}

//! Application state and view management

use crate::config::{Config, ConfigError};
use crate::ledger::{self, Ledger, Mode};
use crate::model::Notification;
use crate::ui::views::{AddFriendView, FriendsView, SplitBillView};

/// Available views in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Ledger,
    Help,
}

/// The main application state
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Current view
    pub current_view: View,
    /// Friends, balances and selection
    pub ledger: Ledger,
    /// Friend list cursor
    pub friends_view: FriendsView,
    /// Add-friend form (Some while the panel is open)
    pub add_friend_view: Option<AddFriendView>,
    /// Split-bill form (Some while a friend is selected)
    pub split_view: Option<SplitBillView>,
    /// Notification to display in the friend list title
    pub notification: Option<Notification>,
    /// Initial image URL of the add-friend form
    pub(crate) avatar_base_url: String,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Construct a new instance of [`App`] with the default seed friends.
    pub fn new() -> Self {
        Self::with_ledger(Ledger::new(), ledger::DEFAULT_AVATAR_URL)
    }

    /// Construct an [`App`] around an existing ledger
    pub fn with_ledger(ledger: Ledger, avatar_base_url: impl Into<String>) -> Self {
        let mut app = Self {
            running: true,
            current_view: View::Ledger,
            ledger,
            friends_view: FriendsView::new(),
            add_friend_view: None,
            split_view: None,
            notification: None,
            avatar_base_url: avatar_base_url.into(),
        };
        app.sync_forms();
        app
    }

    /// Construct an [`App`] from user configuration
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let ledger = config.build_ledger()?;
        tracing::info!(friends = ledger.friends().len(), "ledger ready");
        Ok(Self::with_ledger(ledger, config.avatar_base_url.clone()))
    }

    /// Open or drop the forms so they match the ledger mode
    ///
    /// The add-friend form starts blank each time the panel opens, and the
    /// split form starts blank whenever the selected friend changes.
    pub(crate) fn sync_forms(&mut self) {
        match self.ledger.mode() {
            Mode::Idle => {
                self.add_friend_view = None;
                self.split_view = None;
            }
            Mode::AddingFriend => {
                self.split_view = None;
                if self.add_friend_view.is_none() {
                    self.add_friend_view = Some(AddFriendView::new(self.avatar_base_url.clone()));
                }
            }
            Mode::Splitting(id) => {
                self.add_friend_view = None;
                let stale = self.split_view.as_ref().is_none_or(|v| &v.friend_id != id);
                if stale {
                    self.split_view = self.ledger.selected_friend().map(SplitBillView::new);
                }
            }
        }
        self.friends_view.clamp(self.ledger.friends().len());
    }

    pub(crate) fn go_to_view(&mut self, view: View) {
        self.current_view = view;
    }

    /// Set running to false to quit the application.
    pub(crate) fn quit(&mut self) {
        self.running = false;
    }

    /// Clear expired notification
    pub fn clear_expired_notification(&mut self) {
        if let Some(ref notification) = self.notification
            && notification.is_expired()
        {
            self.notification = None;
        }
    }
}

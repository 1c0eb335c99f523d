//! Quick bar: a fuzzy command and entity palette.
//!
//! The quick bar lists either the entities of a [`StateSnapshot`] or the
//! commands derived from a [`ServiceRegistry`], narrows the list as the user
//! types, and hands the chosen item's [`ItemAction`] to a [`Host`].
//!
//! Typing `>` as the first character switches to command mode. Keystrokes are
//! debounced before the list is refiltered, and results for recent queries
//! are memoized per item list.
//!
//! Nothing here talks to the network. The embedding application supplies
//! state snapshots and implements [`Host`] to carry out actions.

pub mod config;
pub mod debounce;
pub mod error;
pub mod generate;
pub mod host;
pub mod item;
pub mod quick_bar;
pub mod state;
pub mod viewport;

pub use config::QuickBarConfig;
pub use error::{ConfigError, Error, HostError, Result};
pub use host::Host;
pub use item::{Category, ItemAction, QuickBarItem};
pub use quick_bar::{Key, KeyOutcome, Mode, OpenParams, QuickBar};
pub use state::{EntityState, Panel, ServiceRegistry, StateSnapshot};

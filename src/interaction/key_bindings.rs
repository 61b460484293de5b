use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};

use super::NavigationCommand;

/// Physical key to navigation command table.
///
/// Keys are single characters, matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyBindings {
    bindings: IndexMap<String, NavigationCommand>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = IndexMap::new();
        bindings.insert("q".to_owned(), NavigationCommand::ZoomIn);
        bindings.insert("e".to_owned(), NavigationCommand::ZoomOut);
        bindings.insert("a".to_owned(), NavigationCommand::PanEarlier);
        bindings.insert("d".to_owned(), NavigationCommand::PanLater);
        Self { bindings }
    }
}

impl KeyBindings {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            bindings: IndexMap::new(),
        }
    }

    /// Binds `key` to `command`, replacing any previous binding of that key.
    pub fn bind(&mut self, key: char, command: NavigationCommand) {
        self.bindings.insert(normalize_key(key), command);
    }

    pub fn unbind(&mut self, key: char) -> Option<NavigationCommand> {
        self.bindings.shift_remove(&normalize_key(key))
    }

    #[must_use]
    pub fn command_for_char(&self, key: char) -> Option<NavigationCommand> {
        self.bindings.get(&normalize_key(key)).copied()
    }

    /// Bound keys in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, NavigationCommand)> {
        self.bindings
            .iter()
            .map(|(key, command)| (key.as_str(), *command))
    }

    pub fn validate(&self) -> TimelineResult<()> {
        for key in self.bindings.keys() {
            let mut chars = key.chars();
            let valid = matches!((chars.next(), chars.next()), (Some(ch), None) if !ch.is_control());
            if !valid {
                return Err(TimelineError::InvalidData(format!(
                    "key binding `{key}` must be a single printable character"
                )));
            }
            if *key != key.to_lowercase() {
                return Err(TimelineError::InvalidData(format!(
                    "key binding `{key}` must be lowercase"
                )));
            }
        }
        Ok(())
    }
}

fn normalize_key(key: char) -> String {
    key.to_lowercase().collect()
}

//! Players taking part in a game.

use crate::types::Token;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named participant and the token they place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Player {
    name: String,
    token: Token,
}

impl Player {
    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The token this player places.
    pub fn token(&self) -> Token {
        self.token
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.token)
    }
}

//! Pokemon moves, actions that can be taken during battle.

use serde::Deserialize;
use serde::Serialize;

/// A move a Pokemon can learn; the catalog only needs its name.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Move;

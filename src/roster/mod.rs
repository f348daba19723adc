//! Rosters: the player's card collections and the enemy battle line.

pub mod enemy;
pub mod player;

pub use enemy::EnemyRoster;
pub use player::PlayerState;

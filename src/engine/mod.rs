//! The game engine: state aggregate, combat resolver, economy, round
//! controller, and the renderer-facing snapshot.

pub mod combat;
pub mod economy;
pub mod round;
pub mod state;
pub mod view;

pub use economy::{PurchaseOutcome, Reward, RewardLedger, ShopPending, UpgradeKind};
pub use state::{GameMode, GameOutcome, GameState};
pub use view::{CardView, GameView};

pub mod achievement;
pub mod challenge;
pub mod eco_action;
pub mod friend;
pub mod user;

pub use achievement::Achievement;
pub use challenge::{Challenge, ChallengeStatus};
pub use eco_action::EcoAction;
pub use friend::Friend;
pub use user::User;

//! Fixed challenge and achievement catalogs.
//!
//! Seeded once per user on first use; seeding is idempotent and never
//! duplicates entries on subsequent loads.

use crate::models::{Achievement, Challenge};

/// Challenge catalog: (name, reward points).
pub const CHALLENGE_CATALOG: [(&str, u32); 15] = [
    ("Meat-Free Week", 50),
    ("Bike to Work for a Week", 60),
    ("Zero-Waste Weekend", 40),
    ("Plastic-Free Grocery Run", 30),
    ("Cold Wash Laundry Month", 45),
    ("Plant a Tree", 70),
    ("Public Transport Week", 55),
    ("Home Energy Audit", 35),
    ("Compost Starter", 40),
    ("Repair Instead of Replace", 50),
    ("Local Produce Week", 45),
    ("Unplug Standby Devices", 25),
    ("Shorter Showers Week", 30),
    ("Secondhand September", 65),
    ("Community Cleanup", 80),
];

/// Achievement catalog: (badge, description).
pub const ACHIEVEMENT_CATALOG: [(&str, &str); 15] = [
    ("Seedling", "Log your first eco-action"),
    ("Sprout", "Log ten eco-actions"),
    ("Oak", "Log fifty eco-actions"),
    ("Early Bird", "Log an action before 8am"),
    ("Streak Starter", "Log actions on three days in a row"),
    ("Week Warrior", "Log actions on seven days in a row"),
    ("Challenger", "Complete your first challenge"),
    ("Trailblazer", "Complete five challenges"),
    ("Completionist", "Complete every challenge in the catalog"),
    ("Carbon Cutter", "Log twenty transport-related actions"),
    ("Waste Watcher", "Log twenty waste-related actions"),
    ("Power Saver", "Log twenty energy-related actions"),
    ("Green Thumb", "Log ten gardening actions"),
    ("Social Sprout", "Share your progress with a friend"),
    ("Centurion", "Reach 1000 eco-points"),
];

pub fn default_challenges() -> Vec<Challenge> {
    CHALLENGE_CATALOG
        .iter()
        .map(|(name, reward)| Challenge::new(*name, *reward))
        .collect()
}

pub fn default_achievements() -> Vec<Achievement> {
    ACHIEVEMENT_CATALOG
        .iter()
        .map(|(badge, description)| Achievement::new(*badge, *description))
        .collect()
}

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use eco_core::{CoreError, EcoCore, FileStorage, User};

#[derive(Parser)]
#[command(name = "eco-life")]
#[command(about = "Eco-Life personal tracker")]
struct Cli {
    /// Data directory (defaults to the platform data dir)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Answer yes to confirmation prompts
    #[arg(long, short = 'y')]
    yes: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new account
    Signup {
        /// Email address
        email: String,
        /// Full name
        name: String,
    },

    /// Log in from a previously exported file
    Login {
        /// Path to an Eco-Life export file
        file: PathBuf,
    },

    /// Log out, clearing the stored account
    Logout,

    /// Show the profile summary
    Profile,

    /// Log an eco-action
    Log {
        /// Date the action happened (YYYY-MM-DD)
        date: String,
        /// What you did
        action: String,
        /// Estimated impact (free text)
        impact: String,
    },

    /// List logged eco-actions
    Actions,

    /// Delete an eco-action by its row number
    Delete {
        /// Row number from the actions table
        index: usize,
    },

    /// List challenges
    Challenges,

    /// Set a challenge's status
    Challenge {
        /// Row number from the challenges table
        index: usize,
        /// New status: "Not Started", "In Progress" or "Completed"
        status: String,
    },

    /// List achievements
    Achievements,

    /// Mark an achievement as completed
    Achieve {
        /// Row number from the achievements table
        index: usize,
    },

    /// Export the account to a file
    Export {
        /// Output path (defaults to Eco-Life_<email>_<timestamp>.json)
        path: Option<PathBuf>,
    },

    /// Show the friends leaderboard
    Friends,
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => dirs::data_dir()
            .context("no platform data directory available; pass --data-dir")?
            .join("eco-life"),
    };
    let storage = FileStorage::new(&data_dir)?;
    let mut core = EcoCore::new(storage);

    match cli.command {
        Commands::Signup { email, name } => {
            let email = email.trim().to_string();
            if !is_valid_email(&email) {
                bail!("please enter a valid email address");
            }
            if !confirm(
                &format!("Your email: {email}\nYour name: {}\nIs this correct?", name.trim()),
                cli.yes,
            )? {
                println!("Signup cancelled.");
                return Ok(());
            }
            let user = core.create_user(&email, &name)?;
            println!("Welcome, {}! Account created.", user.name);
        }
        Commands::Login { file } => {
            let contents = fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let user = core.import_user(&contents)?;
            println!("Hello, {}! Account loaded.", user.name);
        }
        Commands::Logout => {
            if confirm("Are you sure you want to log out?", cli.yes)? {
                core.logout()?;
                println!("You have been logged out.");
            }
        }
        Commands::Profile => {
            let user = load_user(&core)?;
            println!("Name:       {}", user.name);
            println!("Email:      {}", user.email);
            println!("Created on: {}", user.created_at.format("%B %-d, %Y %H:%M"));
            println!("Eco-Points: {}", user.points);
        }
        Commands::Log { date, action, impact } => {
            let entry = core.add_action(&date, &action, &impact)?;
            let points = core.current_user()?.points;
            println!(
                "Logged \"{}\" for {}. Eco-Points: {points}",
                entry.description, entry.logged_at
            );
        }
        Commands::Actions => {
            let user = load_user(&core)?;
            print_actions(&user);
        }
        Commands::Delete { index } => {
            core.delete_action(index)?;
            println!("Eco-action deleted. Eco-Points: {}", core.current_user()?.points);
        }
        Commands::Challenges => {
            core.seed_catalogs()?;
            let user = load_user(&core)?;
            println!("{:<3} {:<28} {:>6}  {:<12} {}", "#", "Challenge", "Reward", "Status", "Completed");
            for (i, c) in user.challenges.iter().enumerate() {
                let completed = c
                    .completed_at
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_default();
                println!(
                    "{i:<3} {:<28} {:>6}  {:<12} {completed}",
                    c.name,
                    c.reward_points,
                    c.status.label()
                );
            }
        }
        Commands::Challenge { index, status } => {
            core.seed_catalogs()?;
            core.set_challenge_status(index, &status)?;
            println!("Challenge updated. Eco-Points: {}", core.current_user()?.points);
        }
        Commands::Achievements => {
            core.seed_catalogs()?;
            let user = load_user(&core)?;
            println!("{:<3} {:<16} {:<44} {}", "#", "Badge", "Description", "Done");
            for (i, a) in user.achievements.iter().enumerate() {
                let done = if a.completed { "yes" } else { "" };
                println!("{i:<3} {:<16} {:<44} {done}", a.badge, a.description);
            }
        }
        Commands::Achieve { index } => {
            core.seed_catalogs()?;
            let badge = {
                let user = load_user(&core)?;
                user.achievements
                    .get(index)
                    .map(|a| a.badge.clone())
                    .ok_or(CoreError::Index {
                        collection: "achievements",
                        index,
                    })?
            };
            if !confirm(
                &format!("Mark \"{badge}\" as completed? This cannot be undone."),
                cli.yes,
            )? {
                println!("Cancelled.");
                return Ok(());
            }
            core.mark_achievement_completed(index)?;
            println!("Achievement unlocked! Eco-Points: {}", core.current_user()?.points);
        }
        Commands::Export { path } => {
            let user = load_user(&core)?;
            let contents = core.export_user()?;
            let path = path.unwrap_or_else(|| {
                PathBuf::from(eco_core::transfer::export_file_name(&user, chrono::Utc::now()))
            });
            fs::write(&path, contents)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Account exported to {}", path.display());
        }
        Commands::Friends => {
            let user = load_user(&core)?;
            if user.friends.is_empty() {
                println!("No friends yet.");
            } else {
                println!("{:<4} {:<20} {:>8}", "Rank", "Name", "Points");
                for f in &user.friends {
                    println!("{:<4} {:<20} {:>8}", f.rank, f.name, f.points);
                }
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
}

fn load_user<S: eco_core::StorageProvider>(core: &EcoCore<S>) -> anyhow::Result<User> {
    match core.current_user() {
        Ok(user) => Ok(user),
        Err(CoreError::NotFound) => bail!("not logged in; run `eco-life signup` or `eco-life login`"),
        Err(CoreError::CorruptData(reason)) => bail!(
            "stored account data is unreadable ({reason}); run `eco-life login <file>` to \
             restore a backup or `eco-life logout` to start over"
        ),
        Err(e) => Err(e.into()),
    }
}

fn print_actions(user: &User) {
    if user.actions.is_empty() {
        println!("Add some Eco-Actions!");
        return;
    }
    println!("{:<3} {:<12} {:<32} {}", "#", "Date", "Action", "Impact");
    for (i, a) in user.actions.iter().enumerate() {
        println!("{i:<3} {:<12} {:<32} {}", a.logged_at.to_string(), a.description, a.impact);
    }
}

/// Minimal email shape check, mirroring the signup form validation:
/// one `@` with a non-empty local part and a dotted domain.
fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

fn confirm(prompt: &str, assume_yes: bool) -> anyhow::Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes" | "Yes"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("a@x"));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@x.com."));
        assert!(!is_valid_email("a b@x.com"));
        assert!(!is_valid_email("ax.com"));
        assert!(!is_valid_email(""));
    }
}

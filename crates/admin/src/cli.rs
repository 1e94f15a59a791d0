//! Command-line surface of `notifprefs-admin`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "notifprefs-admin",
    about = "Inspect, merge and filter notification preference documents"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Merge per-course configurations into one aggregate configuration.
    Aggregate {
        /// Default (platform) configuration.
        #[arg(long)]
        default: PathBuf,
        /// Per-course configuration; repeat for each course.
        #[arg(long = "override")]
        overrides: Vec<PathBuf>,
    },

    /// Remove notification types each user's roles cannot see.
    Filter {
        /// JSON array of `{user_id, course_id, notification_preference_config}`.
        #[arg(long)]
        bundles: PathBuf,
        /// Notification-type catalog.
        #[arg(long)]
        catalog: PathBuf,
        /// JSON array of `{user_id, course_id, forum_roles, course_roles}`.
        /// Users without an entry hold no roles.
        #[arg(long)]
        roles: Option<PathBuf>,
    },

    /// Print the type-visibility registry derived from a catalog.
    Visibility {
        #[arg(long)]
        catalog: PathBuf,
    },

    /// Flatten a configuration into app and preference lists, optionally
    /// looking up a single app or preference.
    Normalize {
        #[arg(long)]
        config: PathBuf,
        /// Only print this app (or, with `--preference`, the app it belongs to).
        #[arg(long)]
        app: Option<String>,
        /// Only print this preference; requires `--app`.
        #[arg(long, requires = "app")]
        preference: Option<String>,
    },

    /// Reduce a command argument bundle to its query filters.
    CleanArgs {
        /// JSON object of raw command arguments.
        #[arg(long)]
        args: PathBuf,
    },
}

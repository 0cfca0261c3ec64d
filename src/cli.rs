//! CLI definitions for ccon
//!
//! The clap structure lives in the library so xtask can render man pages and
//! markdown from it.

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

use crate::config::ProgressStyle;

/// Build clap styles matching the console's own colors.
///
/// - Green bold: headers and usage (what `success` prints)
/// - Blue: literals (the prompt color)
/// - Red bold: errors
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

/// Version string: crate version, plus the git commit for dev builds.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "-", env!("VERGEN_GIT_SHA"));

#[cfg(feature = "release")]
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "ccon")]
#[command(about = "Colored prompts and progress bars for shell scripts")]
#[command(
    long_about = "ccon - colored prompts and progress bars for shell scripts.

Every prompt falls back to its default when standard output is not a
terminal, so scripts using ccon never hang in CI.

QUICK START:
    ccon confirm \"Continue?\"             Ask yes/no (default yes)
    ccon choose \"Pick one\" a b c         Pick one option
    ccon pick \"Pick some\" a b c -d 0     Pick several options
    ccon progress --max 50               Animate a progress bar

ENVIRONMENT:
    CC_PROGRESS_MODE=PACMAN              Use the pacman progress renderer"
)]
#[command(version = VERSION)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show every style, prompt and progress bar
    Demo,

    /// Ask a yes/no question
    #[command(long_about = "Ask a yes/no question.

Prints true or false. An empty answer takes the default, which is yes unless
--default-no is given.

EXAMPLE:
    ccon confirm \"Delete build directory?\" --default-no")]
    Confirm {
        /// Question to ask
        message: String,
        /// Make \"no\" the default answer
        #[arg(long)]
        default_no: bool,
        /// Print the answer as JSON
        #[arg(long)]
        json: bool,
    },

    /// Ask for one option out of a list
    Choose {
        /// Question to ask
        message: String,
        /// Options to choose from
        #[arg(required = true)]
        options: Vec<String>,
        /// Index selected by an empty answer
        #[arg(long, short, default_value_t = 0)]
        default: usize,
        /// Print the answer as JSON
        #[arg(long)]
        json: bool,
    },

    /// Ask for any number of options out of a list
    Pick {
        /// Question to ask
        message: String,
        /// Options to choose from
        #[arg(required = true)]
        options: Vec<String>,
        /// Indices selected by an empty answer (repeatable)
        #[arg(long = "default", short = 'd', default_values_t = [0])]
        defaults: Vec<usize>,
        /// Print the answer as JSON
        #[arg(long)]
        json: bool,
    },

    /// Animate a progress bar from zero to the maximum
    Progress {
        /// Final value
        #[arg(long, default_value_t = 100)]
        max: u64,
        /// Pause between steps in milliseconds
        #[arg(long, default_value_t = 20)]
        delay_ms: u64,
        /// Renderer (default: from CC_PROGRESS_MODE)
        #[arg(long, value_enum)]
        style: Option<ProgressStyle>,
        /// Print plain progress lines when not attached to a terminal
        #[arg(long)]
        show_non_interactive: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

use crate::core::calculator::converter::ConverterField;
use crate::ui::labels::Language;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for Godzinator
#[derive(Parser)]
#[command(
    name = "godzinator",
    version = env!("CARGO_PKG_VERSION"),
    about = "Sum, convert and scale HH:MM:SS durations for timesheet calculations",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Language of captions (overrides the configured one)
    #[arg(global = true, long = "lang", value_enum)]
    pub lang: Option<Language>,

    /// Print results as JSON
    #[arg(global = true, long = "json")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Sum time rows with operators and multipliers
    Sum {
        /// Daily norm used for the day count (default from config)
        #[arg(long, value_name = "HH:MM:SS")]
        norm: Option<String>,

        /// Rows in the form `[~][+|-]VALUE[xMULT][@LABEL]`.
        ///
        /// - VALUE is typed like keystrokes: `1435500`, `143:55:00`, `1:05:00`
        /// - `x1,5` or `*2` scales the row (half-up to whole seconds)
        /// - a leading `~` keeps the row but marks it inactive
        ///
        /// Examples:
        ///   godzinator sum -- +143:55:00 -1:05:00
        ///   godzinator sum --norm 07:35:00 -- 080000x5 -003000x5
        #[arg(value_name = "ROW", allow_hyphen_values = true)]
        rows: Vec<String>,
    },

    /// Express a planned duration in days of a daily norm
    Vacation {
        /// Planned duration (HH:MM:SS, may start with '-')
        #[arg(allow_hyphen_values = true)]
        planned: String,

        /// Daily norm (default from config)
        #[arg(long, value_name = "HH:MM:SS")]
        norm: Option<String>,
    },

    /// Convert a value between seconds, minutes, hours and clock format
    Convert {
        /// Unit of the input value
        #[arg(long, value_enum, default_value = "clock")]
        from: Unit,

        /// Input value (decimal separator may be ',' or '.')
        value: String,
    },

    /// Show how keystrokes are masked into a clock string
    Mask {
        value: String,
    },
}

/// Unit accepted by `convert --from`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Unit {
    Seconds,
    Minutes,
    Hours,
    Clock,
}

impl From<Unit> for ConverterField {
    fn from(unit: Unit) -> Self {
        match unit {
            Unit::Seconds => ConverterField::Seconds,
            Unit::Minutes => ConverterField::Minutes,
            Unit::Hours => ConverterField::Hours,
            Unit::Clock => ConverterField::Clock,
        }
    }
}

impl Cli {
    /// Configuration file in effect: `--config` or the platform default.
    pub fn config_path(&self) -> std::path::PathBuf {
        match &self.config {
            Some(p) => crate::utils::path::expand_tilde(p),
            None => crate::config::Config::config_file(),
        }
    }
}

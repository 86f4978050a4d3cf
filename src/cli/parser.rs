use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rxform
#[derive(Parser)]
#[command(
    name = "rxform",
    version = env!("CARGO_PKG_VERSION"),
    about = "A terminal prescription form: medication list, duration picker and on-submit validation",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Layout width in columns (defaults to `terminal_width` from the config)
    #[arg(global = true, long = "width")]
    pub width: Option<u16>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// List the duration presets and units
    Presets {
        #[arg(long = "json", help = "Print the catalog as JSON")]
        json: bool,
    },

    /// Print the display label of a duration (e.g. `format 1 weeks` → "1 Week")
    Format {
        /// Numeric value (1–999)
        #[arg(allow_hyphen_values = true)]
        value: i64,

        /// days, weeks or months
        unit: String,
    },

    /// List medicine types, dose units, timings and frequencies
    Options,

    /// Run the medication list form, driven by an event script
    ///
    /// Script lines (entry numbers are 1-based and optional):
    ///   add
    ///   set [N] name|dose|type|unit|timing|frequency <value>
    ///   clear [N] <field>
    ///   duration [N] open|custom|back|apply|inc|dec|units|dismiss
    ///   duration [N] preset <1-7> | input <text> | unit <days|weeks|months>
    ///   expand N | validate | show
    #[command(verbatim_doc_comment)]
    Form {
        /// Script file (reads stdin when omitted)
        #[arg(long, value_name = "FILE")]
        script: Option<String>,

        /// Export the submission to this file
        #[arg(long, value_name = "FILE")]
        export: Option<String>,

        /// Export format
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Overwrite the export file if it exists
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Run the clinical dashboard demo page with its single medication composer
    Prescribe {
        /// Script file (reads stdin when omitted); `submit` presses "Add Medication"
        #[arg(long, value_name = "FILE")]
        script: Option<String>,
    },
}

use crate::config::types::{OutputFormat, ValueType};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "template-validator")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Evaluate jsonpath:: directives against virtual machine manifests")]
#[command(long_about = "Try out the annotation-style path directives used by virtual machine template validation rules. Directives look like 'jsonpath::.spec.domain.resources.requests.memory' and are evaluated against a YAML or JSON manifest.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the normalized query of a directive
    Normalize {
        /// Directive, e.g. 'jsonpath::$.spec.running'
        #[arg(value_name = "DIRECTIVE")]
        directive: String,
    },

    /// Evaluate a directive against a manifest
    Eval {
        /// Directive, e.g. 'jsonpath::.spec.domain.machine.type'
        #[arg(value_name = "DIRECTIVE")]
        directive: String,

        /// Manifest file (YAML or JSON); reads stdin when omitted or '-'
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Convert matched values to this type
        #[arg(long = "as", value_enum, value_name = "TYPE")]
        as_type: Option<ValueType>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}

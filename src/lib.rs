//! # KubeVirt Template Validator
//!
//! Path directives for virtual machine template validation rules.
//!
//! Rules embedded in template annotations refer to fields of the virtual
//! machine under validation with directives such as
//! `jsonpath::.spec.domain.resources.requests.memory`. This crate turns those
//! directives into compiled queries, evaluates them against the object and
//! returns typed values for the rule engine to compare against limits.
//!
//! ## Example
//!
//! ```rust
//! use template_validator::manifest::parse_manifest;
//! use template_validator::validation::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let vm = parse_manifest(
//!     "spec:\n  domain:\n    resources:\n      requests:\n        memory: 64M\n",
//! )?;
//!
//! let mut path = Path::new("jsonpath::.spec.domain.resources.requests.memory")?;
//! path.find(&vm)?;
//! assert_eq!(path.as_i64()?, vec![64_000_000]);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod manifest;
pub mod validation;

// Re-export commonly used types and functions
pub use error::{ConfigError, Result, ValidatorError};
pub use validation::{ErrorKind, Path, PathError};

use cli::Commands;
use config::types::Config;

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run a subcommand and return what should be printed.
pub fn run_command(command: Commands, config: &Config) -> Result<String> {
    match command {
        Commands::Normalize { directive } => handlers::handle_normalize(&directive),
        Commands::Eval {
            directive,
            file,
            as_type,
            format,
        } => {
            let target = manifest::load_manifest(file.as_deref())?;
            handlers::handle_eval(
                &directive,
                &target,
                as_type.unwrap_or(config.eval.default_type),
                format.unwrap_or(config.output.format),
            )
        }
    }
}

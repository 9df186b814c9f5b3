use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::case::{Case, Converter};
use crate::config::{check_delimiter, Config};

/// stringcase - convert identifiers between case styles
#[derive(Debug, Parser)]
#[command(name = "stringcase")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert identifiers given as arguments, or read line by line from stdin
    Convert(ConvertArgs),

    /// Write a default configuration file
    Init {
        /// Where to write the configuration
        #[arg(short, long, default_value = "stringcase.toml")]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Strings to convert; stdin is read when none are given
    pub inputs: Vec<String>,

    /// Target case (overrides the config file)
    #[arg(short, long, value_enum)]
    pub case: Option<Case>,

    /// Delimiter for the delimited styles (overrides the config file)
    #[arg(short, long)]
    pub delimiter: Option<char>,

    /// Characters exempted from delimiter insertion (overrides the config file)
    #[arg(short, long)]
    pub ignore: Option<String>,

    /// Path to a stringcase.toml configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log what is being done to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl ConvertArgs {
    /// Build the converter from the config, with command-line flags taking precedence
    pub fn converter(&self, config: &Config) -> Result<Converter> {
        let mut converter = config.converter();

        if let Some(case) = self.case {
            converter.case = case;
        }
        if let Some(delimiter) = self.delimiter {
            check_delimiter(delimiter)?;
            converter.delimiter = delimiter;
        }
        if let Some(ignore) = &self.ignore {
            converter.ignore = ignore.clone();
        }

        Ok(converter)
    }
}

//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::commands::{
    compose::ComposeArgs, enrich::EnrichArgs, parse::ParseArgs, transition::TransitionArgs,
    transitions::TransitionsArgs, validate::ValidateArgs,
};

/// Top-level command line
#[derive(Parser, Debug)]
#[command(name = "maintflow")]
#[command(about = "maintflow - maintenance intervention workflow engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to .maintflow/config.yaml plus overrides)
    #[arg(short, long, global = true, env = "MAINTFLOW_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the derived workflow state of an intervention snapshot
    Enrich(EnrichArgs),

    /// Check whether a status change is allowed
    Transition(TransitionArgs),

    /// Print the status transition table
    Transitions(TransitionsArgs),

    /// Validate a phase submission payload
    Validate(ValidateArgs),

    /// Extract work items and spare parts from a description
    Parse(ParseArgs),

    /// Build a section-marked description from a diagnostic payload
    Compose(ComposeArgs),
}

//! Command-line interface for Wayfarer.
//!
//! A small operational surface over the concierge: an interactive chat REPL,
//! one-shot questions, and media synthesis. The REPL is also the reference
//! for the request-in-flight rule of one outstanding orchestrator call per
//! conversation surface, here enforced by construction since input is read
//! only after the previous reply settles.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Wayfarer - conversational concierge for Health & Travels.
#[derive(Debug, Parser)]
#[command(name = "wayfarer", version, about)]
pub struct Cli {
    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Interactive chat with the concierge
    Chat,

    /// Ask a single question and print the reply
    Ask {
        /// The question text
        prompt: String,
    },

    /// Synthesize an image from a prompt
    Image {
        /// The image prompt
        prompt: String,
        /// Output path for the image bytes
        #[arg(short, long, default_value = "wayfarer.png")]
        output: PathBuf,
    },

    /// Synthesize a video from a prompt and print its download URI
    Video {
        /// The video prompt
        prompt: String,
    },
}

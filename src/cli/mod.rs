// Copyright 2025-present DevLearning Hub
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the syllabus command-line interface.
//!
//! Subcommands mirror what the web page offers: `search` ranks the catalog,
//! `list` and `show` browse it, `export` writes a course out as markdown or
//! JSON, `explain` asks a text-generation service about a code sample, and
//! `demo` is the keyboard movement toy. `config` reads and writes the saved
//! theme and language preferences.
//!
//! `--catalog`, `--theme`, and `--lang` are global: they work on any
//! subcommand and override the saved settings for that run. Only `config`
//! persists them.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "syllabus",
    about = "Course catalog search and browsing for DevLearning Hub",
    version
)]
pub struct Cli {
    /// Path to a catalog JSON file (defaults to the embedded catalog)
    #[arg(short, long, global = true)]
    pub catalog: Option<String>,

    /// Color theme: "dark", "light", or "auto" (saved only by `config`)
    #[arg(long, global = true)]
    pub theme: Option<String>,

    /// Interface language: "en", "es", or "de" (saved only by `config`)
    #[arg(long, global = true)]
    pub lang: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the catalog and display ranked results
    Search {
        /// Search query; words are matched independently ("go channels")
        query: String,

        /// Maximum number of results to display
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Show relevance scores next to results
        #[arg(long)]
        scores: bool,
    },

    /// List every course in the catalog
    List {
        /// Only show courses with this category tag (GO, PY, SQL, ...)
        #[arg(long)]
        category: Option<String>,
    },

    /// Show one course in full, modules and code included
    Show {
        /// Course id (see `list` for ids)
        id: String,
    },

    /// Export a course as markdown or JSON
    Export {
        /// Course id
        id: String,

        /// Output format: "markdown" or "json"
        #[arg(short, long, default_value = "markdown")]
        format: String,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Explain a module's code sample via a text-generation service
    ///
    /// The service is configured with SYLLABUS_EXPLAIN_PROVIDER ("ollama" or
    /// "openai"), SYLLABUS_EXPLAIN_URL, SYLLABUS_EXPLAIN_MODEL,
    /// SYLLABUS_EXPLAIN_API_KEY, and SYLLABUS_EXPLAIN_TIMEOUT (seconds). By
    /// default it talks to a local Ollama.
    Explain {
        /// Course id
        id: String,

        /// Module id within the course
        module: String,

        /// Print the prompt that would be sent, without calling anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Drive the movement toy: w/a/s/d or h/j/k/l + enter to move, q to quit
    Demo,

    /// Show or change saved preferences
    ///
    /// With no flags, prints the settings file location and current values.
    /// `config --theme dark` or `config --lang es` saves the preference;
    /// "auto" clears the saved theme.
    Config,
}

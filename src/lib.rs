//! aisctl - AI Streams CLI
//!
//! A thin command-line front-end for the AI Streams platform. The CLI
//! parses subcommands and flags, normalizes them into an ordered invocation
//! configuration, renders that configuration as a `--flag_name=value`
//! command line for one of the five native apps (manager, ingester,
//! chunker, playback, printer), and replaces its own process image with the
//! chosen app. All streaming work happens in the native apps.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: invocation configuration, flag rendering rules, app identities
//! - **Application**: per-command invocation builders, dispatch use case, ports
//! - **Infrastructure**: exec launcher, install-directory and environment plumbing
//! - **CLI**: command-line parsing and output formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

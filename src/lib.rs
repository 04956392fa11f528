//! Dadam API - AI-assisted text improvement and transcription relay
//!
//! This crate accepts user text or an uploaded audio file, forwards it to
//! Google Gemini or AssemblyAI, and returns the result. Successful text
//! improvements are optionally recorded to a Supabase table.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Value objects, entities, configuration, and errors
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (Gemini, AssemblyAI, Supabase, config sources)
//! - **HTTP**: axum routes, shared state, and error mapping
//! - **CLI**: Argument parsing, logging setup, and the server runner

pub mod application;
pub mod cli;
pub mod domain;
pub mod http;
pub mod infrastructure;

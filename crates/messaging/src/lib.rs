//! Command-driven messaging engine.
//!
//! Turns inbound chat messages into structured read commands over the product
//! catalog and the sales ledger, renders a deterministic reply for each, and
//! records every turn in the conversation log. Parsing is total: any text that
//! is not a recognized `/command` is free text and gets the greeting reply.

pub mod command;
pub mod engine;
pub mod error;
pub mod parser;
pub mod reply;

pub use command::{Command, ParsedMessage};
pub use engine::{Dispatcher, MessageEngine};
pub use error::EngineError;
pub use parser::parse;

//! Message execution pipeline.
//!
//! `Dispatcher` answers a parsed message by reading through the catalog and
//! sales adapters. `MessageEngine` wraps it with the full turn lifecycle:
//! parse, dispatch, record in the conversation log, return the logged turn.
//! Dispatch never mutates catalog or sales state; the log append is the only
//! write.

use chrono::{DateTime, Utc};

use tambo_catalog::CatalogReader;
use tambo_chatlog::{ConversationTurn, NewTurn, TurnOutcome, TurnStore};
use tambo_sales::RevenueReader;

use crate::command::{Command, ParsedMessage};
use crate::error::EngineError;
use crate::parser::parse;
use crate::reply;

/// Answers parsed messages from the read adapters. Stateless across calls.
#[derive(Debug)]
pub struct Dispatcher<C, R> {
    catalog: C,
    ledger: R,
}

impl<C, R> Dispatcher<C, R>
where
    C: CatalogReader,
    R: RevenueReader,
{
    pub fn new(catalog: C, ledger: R) -> Self {
        Self { catalog, ledger }
    }

    /// Produce the reply for a parsed message.
    ///
    /// Usage mistakes, unknown report subtypes and empty lookup results are
    /// all normal replies. The only error path is an adapter failure, which
    /// is propagated untouched; no reply is fabricated from missing data.
    pub fn dispatch(&self, message: &ParsedMessage, now: DateTime<Utc>) -> Result<String, EngineError> {
        match message {
            ParsedMessage::FreeText { .. } => Ok(reply::greeting()),
            ParsedMessage::Command(Command::Menu) => Ok(reply::menu()),
            ParsedMessage::Command(Command::Stock { query }) => self.stock(query),
            ParsedMessage::Command(Command::Reporte { subtype }) => self.report(subtype, now),
            ParsedMessage::Command(Command::Productos) => self.products(),
        }
    }

    fn stock(&self, query: &str) -> Result<String, EngineError> {
        if query.is_empty() {
            return Ok(reply::stock_usage());
        }
        let matches = self
            .catalog
            .find_by_name_fragment(query)
            .map_err(EngineError::Catalog)?;
        match matches.as_slice() {
            [] => Ok(reply::stock_no_match(query)),
            [product] => Ok(reply::stock_single(product)),
            several => Ok(reply::stock_multiple(query, several)),
        }
    }

    fn report(&self, subtype: &str, now: DateTime<Utc>) -> Result<String, EngineError> {
        if subtype.is_empty() {
            return Ok(reply::report_usage());
        }
        if !subtype.eq_ignore_ascii_case("ventas") {
            return Ok(reply::report_unsupported(subtype));
        }
        let today = self.ledger.sales_today(now).map_err(EngineError::Ledger)?;
        let month = self
            .ledger
            .sales_this_month(now)
            .map_err(EngineError::Ledger)?;
        Ok(reply::sales_report(today, month))
    }

    fn products(&self) -> Result<String, EngineError> {
        let products = self.catalog.list_all().map_err(EngineError::Catalog)?;
        Ok(reply::product_listing(&products))
    }
}

/// The messaging engine: one call per inbound message.
#[derive(Debug)]
pub struct MessageEngine<C, R, L> {
    dispatcher: Dispatcher<C, R>,
    log: L,
}

impl<C, R, L> MessageEngine<C, R, L>
where
    C: CatalogReader,
    R: RevenueReader,
    L: TurnStore,
{
    pub fn new(catalog: C, ledger: R, log: L) -> Self {
        Self {
            dispatcher: Dispatcher::new(catalog, ledger),
            log,
        }
    }

    /// Process one inbound message and return the logged turn.
    pub fn process_message(&self, sender: &str, text: &str) -> Result<ConversationTurn, EngineError> {
        self.process_message_at(sender, text, Utc::now())
    }

    /// Same as [`process_message`](Self::process_message) with an explicit
    /// clock, so report windows and timestamps are reproducible in tests.
    ///
    /// Every message produces exactly one turn, including repeats of earlier
    /// messages (no deduplication) and dispatch failures, which are logged
    /// with the error marker before the failure is returned.
    pub fn process_message_at(
        &self,
        sender: &str,
        text: &str,
        now: DateTime<Utc>,
    ) -> Result<ConversationTurn, EngineError> {
        let parsed = parse(text);
        let command = parsed.command_name();

        match self.dispatcher.dispatch(&parsed, now) {
            Ok(rendered) => {
                tracing::info!(
                    "processed message from {} (command: {})",
                    sender,
                    command.unwrap_or("-")
                );
                self.log
                    .append(
                        NewTurn {
                            sender: sender.to_string(),
                            text: text.to_string(),
                            command: command.map(str::to_string),
                            outcome: TurnOutcome::Replied { reply: rendered },
                        },
                        now,
                    )
                    .map_err(EngineError::Log)
            }
            Err(err) => {
                tracing::error!("dispatch failed for {}: {}", sender, err);
                let failed = NewTurn {
                    sender: sender.to_string(),
                    text: text.to_string(),
                    command: command.map(str::to_string),
                    outcome: TurnOutcome::Failed {
                        error: err.to_string(),
                    },
                };
                if let Err(log_err) = self.log.append(failed, now) {
                    tracing::error!("failed to record failed turn: {}", log_err);
                }
                Err(err)
            }
        }
    }

    /// The conversation log backing this engine.
    pub fn log(&self) -> &L {
        &self.log
    }
}

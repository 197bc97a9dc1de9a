//! Command dispatch - from interpreted intent to ledger operation
//!
//! This is the caller boundary: interpreter failures, unknown tools and
//! missing fields are all stopped here, before the ledger is touched. Every
//! failure becomes a [`CommandError`] with a message fit to show the user.

use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::core::ledger::{Ledger, LedgerError, Summary};
use crate::entities::Product;
use crate::interpreter::{Intent, InterpretError, Interpreter, RawIntent, ToolAction};

/// Errors surfaced to the user for one command
#[derive(Debug, Error, Diagnostic)]
pub enum CommandError {
    #[error("Product \"{0}\" not found.")]
    #[diagnostic(
        code(stockmaster::not_found),
        help("Run `stock list` to see existing product names")
    )]
    NotFound(String),

    #[error("Insufficient stock for {name}: requested {requested}, only {available} available.")]
    #[diagnostic(code(stockmaster::insufficient_stock))]
    InsufficientStock {
        name: String,
        requested: u64,
        available: u64,
    },

    #[error("Missing parameters for {0}.")]
    #[diagnostic(
        code(stockmaster::missing_parameters),
        help("Mention the product name and quantity, plus a location where one applies")
    )]
    MissingParameters(&'static str),

    #[error("{0}")]
    #[diagnostic(code(stockmaster::interpreter))]
    InterpreterFailure(String),

    #[error("Unknown command. Please try again.")]
    #[diagnostic(
        code(stockmaster::unknown_command),
        help("Try \"Received 50 iPhones at Warehouse A\" or \"Move Steel Rods to the Showroom\"")
    )]
    UnknownCommand,

    #[error(transparent)]
    #[diagnostic(code(stockmaster::ledger))]
    Ledger(LedgerError),
}

impl From<LedgerError> for CommandError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::NotFound(name) => CommandError::NotFound(name),
            LedgerError::InsufficientStock {
                name,
                requested,
                available,
            } => CommandError::InsufficientStock {
                name,
                requested,
                available,
            },
            other => CommandError::Ledger(other),
        }
    }
}

impl From<InterpretError> for CommandError {
    fn from(err: InterpretError) -> Self {
        CommandError::InterpreterFailure(format!("Failed to process command with AI: {}", err))
    }
}

/// Result of a successful command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub action: ToolAction,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<Summary>,
}

impl Outcome {
    fn for_product(action: ToolAction, message: String, product: Product) -> Self {
        Self {
            action,
            message,
            product: Some(product),
            summary: None,
        }
    }
}

/// Apply a validated intent to the ledger
pub fn dispatch(intent: Intent, ledger: &mut Ledger) -> Result<Outcome, CommandError> {
    let action = intent.action();
    debug!(?intent, "dispatching intent");

    let outcome = match intent {
        Intent::Receive {
            name,
            qty,
            location,
            category,
        } => {
            let product = ledger.receive(&name, qty, &location, category.as_deref())?;
            let message = format!("Added {} {} to {}.", qty, name, location);
            Outcome::for_product(action, message, product)
        }
        Intent::Deliver { name, qty } => {
            let product = ledger.deliver(&name, qty)?;
            let message = format!("Delivered {} {}.", qty, name);
            Outcome::for_product(action, message, product)
        }
        Intent::Move {
            name,
            qty,
            to_location,
        } => {
            let product = ledger.move_stock(&name, qty, &to_location)?;
            let message = format!("Moved {} to {}.", name, to_location);
            Outcome::for_product(action, message, product)
        }
        Intent::Adjust { name, true_qty } => {
            let product = ledger.adjust(&name, true_qty)?;
            let message = format!("Adjusted {} to {}.", name, true_qty);
            Outcome::for_product(action, message, product)
        }
        Intent::Report => Outcome {
            action,
            message: "Report requested. See the current inventory.".to_string(),
            product: None,
            summary: Some(ledger.summary()?),
        },
    };

    info!(%action, message = %outcome.message, "command applied");
    Ok(outcome)
}

/// Validate a raw intent and apply it
pub fn apply_raw(raw: RawIntent, ledger: &mut Ledger) -> Result<Outcome, CommandError> {
    let intent = Intent::try_from(raw)?;
    dispatch(intent, ledger)
}

/// Interpret free text, validate the result and apply it
///
/// Blank input is an unknown command and never reaches the interpreter.
pub fn run_command(
    text: &str,
    interpreter: &dyn Interpreter,
    ledger: &mut Ledger,
) -> Result<Outcome, CommandError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CommandError::UnknownCommand);
    }

    let raw = interpreter.interpret(text)?;
    debug!(?raw, "interpreter result");
    apply_raw(raw, ledger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::MemoryStore;
    use std::cell::Cell;

    fn seeded() -> Ledger {
        let mut ledger = Ledger::new(MemoryStore::new());
        ledger.seed_demo().unwrap();
        ledger
    }

    fn replying(raw: RawIntent) -> impl Fn(&str) -> Result<RawIntent, InterpretError> {
        move |_| Ok(raw.clone())
    }

    #[test]
    fn test_receive_message() {
        let mut ledger = seeded();
        let outcome = dispatch(
            Intent::Receive {
                name: "iphones".into(),
                qty: 5,
                location: "Warehouse A".into(),
                category: None,
            },
            &mut ledger,
        )
        .unwrap();

        assert_eq!(outcome.action, ToolAction::AddStock);
        assert_eq!(outcome.message, "Added 5 iphones to Warehouse A.");
        assert_eq!(outcome.product.unwrap().quantity, 55);
    }

    #[test]
    fn test_deliver_insufficient_maps_to_command_error() {
        let mut ledger = seeded();
        let err = dispatch(
            Intent::Deliver {
                name: "IPhones".into(),
                qty: 60,
            },
            &mut ledger,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            CommandError::InsufficientStock {
                requested: 60,
                available: 50,
                ..
            }
        ));
    }

    #[test]
    fn test_not_found_maps_to_command_error() {
        let mut ledger = seeded();
        let err = dispatch(
            Intent::Move {
                name: "Forklift".into(),
                qty: None,
                to_location: "Dock".into(),
            },
            &mut ledger,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Product \"Forklift\" not found.");
        assert!(matches!(err, CommandError::NotFound(n) if n == "Forklift"));
    }

    #[test]
    fn test_negative_adjust_stays_a_ledger_error() {
        let mut ledger = seeded();
        let err = dispatch(
            Intent::Adjust {
                name: "Office Chairs".into(),
                true_qty: -1,
            },
            &mut ledger,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CommandError::Ledger(LedgerError::NegativeStock { .. })
        ));
    }

    #[test]
    fn test_report_carries_summary() {
        let mut ledger = seeded();
        let outcome = dispatch(Intent::Report, &mut ledger).unwrap();
        let summary = outcome.summary.unwrap();
        assert_eq!(summary.total_units, 670);
        assert_eq!(summary.unique_products, 3);
        // Report is a read: no log entry
        assert_eq!(ledger.list_log().unwrap().len(), 3);
    }

    #[test]
    fn test_run_command_end_to_end() {
        let mut ledger = seeded();
        let interpreter = replying(RawIntent {
            name: Some("Office Chairs".into()),
            true_qty: Some(115),
            ..RawIntent::tool(ToolAction::AdjustStock)
        });

        let outcome =
            run_command("Correct stock of Office Chairs to 115", &interpreter, &mut ledger).unwrap();
        assert_eq!(outcome.message, "Adjusted Office Chairs to 115.");
        assert_eq!(
            ledger.find("office chairs").unwrap().unwrap().quantity,
            115
        );
    }

    #[test]
    fn test_run_command_missing_parameters_leaves_ledger_alone() {
        let mut ledger = seeded();
        let interpreter = replying(RawIntent {
            name: Some("IPhones".into()),
            ..RawIntent::tool(ToolAction::AddStock)
        });

        let err = run_command("Received some iPhones", &interpreter, &mut ledger).unwrap_err();
        assert_eq!(err.to_string(), "Missing parameters for Adding Stock.");
        assert_eq!(ledger.list_log().unwrap().len(), 3);
    }

    #[test]
    fn test_run_command_interpreter_failure() {
        let mut ledger = seeded();
        let interpreter = |_: &str| -> Result<RawIntent, InterpretError> {
            Err(InterpretError::EmptyResponse)
        };

        let err = run_command("Received 5 bolts at Bin 3", &interpreter, &mut ledger).unwrap_err();
        match err {
            CommandError::InterpreterFailure(msg) => {
                assert!(msg.starts_with("Failed to process command with AI"))
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_run_command_unknown() {
        let mut ledger = seeded();
        let interpreter = replying(RawIntent::tool(ToolAction::Unknown));
        assert!(matches!(
            run_command("sing a song", &interpreter, &mut ledger),
            Err(CommandError::UnknownCommand)
        ));
    }

    #[test]
    fn test_blank_input_skips_interpreter() {
        let mut ledger = seeded();
        let calls = Cell::new(0);
        let interpreter = |_: &str| -> Result<RawIntent, InterpretError> {
            calls.set(calls.get() + 1);
            Ok(RawIntent::tool(ToolAction::Report))
        };

        assert!(matches!(
            run_command("   ", &interpreter, &mut ledger),
            Err(CommandError::UnknownCommand)
        ));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_apply_raw_move_without_qty() {
        let mut ledger = seeded();
        let outcome = apply_raw(
            RawIntent {
                name: Some("Steel Rods".into()),
                to_location: Some("Showroom".into()),
                ..RawIntent::tool(ToolAction::MoveStock)
            },
            &mut ledger,
        )
        .unwrap();
        assert_eq!(outcome.message, "Moved Steel Rods to Showroom.");
        assert_eq!(outcome.product.unwrap().location, "Showroom");
    }
}

//! # Menu Dispatcher
//!
//! Read-eval loop mapping a numbered choice to one record operation.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ensure_schema()                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌──────────── Running ◄──────────────────────────────┐               │
//! │  │   render menu, read choice                          │               │
//! │  │      1-6   → record operation                       │               │
//! │  │             storage error → "Error <action>: ..."   │               │
//! │  │      other → "Invalid option. Please try again."    │               │
//! │  │      7     → farewell ───────► Terminated           │               │
//! │  │      EOF   → ─────────────────► Terminated          │               │
//! │  └─────────────────────────────────────────────────────┘               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::str::FromStr;

use tracing::{info, warn};

use inventario_db::Database;

use crate::error::{CliError, CliResult};
use crate::operations;
use crate::terminal::{Terminal, Tone};

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Register,
    View,
    Update,
    Delete,
    Search,
    LowStockReport,
    Exit,
}

impl MenuChoice {
    /// Menu order.
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::Register,
        MenuChoice::View,
        MenuChoice::Update,
        MenuChoice::Delete,
        MenuChoice::Search,
        MenuChoice::LowStockReport,
        MenuChoice::Exit,
    ];

    /// Number the operator types.
    pub fn key(self) -> u8 {
        match self {
            MenuChoice::Register => 1,
            MenuChoice::View => 2,
            MenuChoice::Update => 3,
            MenuChoice::Delete => 4,
            MenuChoice::Search => 5,
            MenuChoice::LowStockReport => 6,
            MenuChoice::Exit => 7,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Register => "Register new product",
            MenuChoice::View => "View products",
            MenuChoice::Update => "Update product",
            MenuChoice::Delete => "Delete product",
            MenuChoice::Search => "Search products",
            MenuChoice::LowStockReport => "Low stock report",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Gerund used in storage error messages.
    fn action(self) -> &'static str {
        match self {
            MenuChoice::Register => "registering the product",
            MenuChoice::View => "listing products",
            MenuChoice::Update => "updating the product",
            MenuChoice::Delete => "deleting the product",
            MenuChoice::Search => "searching products",
            MenuChoice::LowStockReport => "building the low stock report",
            MenuChoice::Exit => "exiting",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: u8 = s.trim().parse().map_err(|_| ())?;
        MenuChoice::ALL
            .into_iter()
            .find(|choice| choice.key() == key)
            .ok_or(())
    }
}

/// Dispatcher state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Running,
    Terminated,
}

fn render_menu(term: &mut impl Terminal) -> CliResult<()> {
    term.write_line(Tone::Plain, "")?;
    term.write_line(Tone::MenuTitle, "--- INVENTORY MAIN MENU ---")?;
    for choice in MenuChoice::ALL {
        let tone = if choice == MenuChoice::Exit {
            Tone::MenuExit
        } else {
            Tone::MenuOption
        };
        term.write_line(tone, &format!("{}. {}", choice.key(), choice.label()))?;
    }
    Ok(())
}

/// Runs one menu choice to completion.
///
/// Storage errors are reported here and leave the menu running.
pub async fn dispatch(
    db: &Database,
    term: &mut impl Terminal,
    choice: MenuChoice,
) -> CliResult<MenuState> {
    let result = match choice {
        MenuChoice::Register => operations::register(db, term).await,
        MenuChoice::View => operations::view(db, term).await,
        MenuChoice::Update => operations::update(db, term).await,
        MenuChoice::Delete => operations::delete(db, term).await,
        MenuChoice::Search => operations::search(db, term).await,
        MenuChoice::LowStockReport => operations::low_stock_report(db, term).await,
        MenuChoice::Exit => {
            term.write_line(
                Tone::Farewell,
                "Thank you for using the inventory manager! Goodbye.",
            )?;
            return Ok(MenuState::Terminated);
        }
    };

    match result {
        Ok(()) => Ok(MenuState::Running),
        Err(CliError::Db(e)) => {
            warn!(error = %e, ?choice, "Operation failed");
            term.write_line(
                Tone::Failure,
                &format!("Error {}: {}", choice.action(), e),
            )?;
            Ok(MenuState::Running)
        }
        Err(e) => Err(e),
    }
}

/// Ensures the schema, then loops until the operator exits.
///
/// End of input ends the loop as if Exit had been chosen, without the
/// farewell message.
pub async fn run(db: &Database, term: &mut impl Terminal) -> CliResult<()> {
    db.ensure_schema().await?;
    info!("Inventory menu started");

    let mut state = MenuState::Running;
    while state == MenuState::Running {
        render_menu(term)?;

        let Some(line) = term.read_line("Select an option: ")? else {
            break;
        };

        state = match line.parse::<MenuChoice>() {
            Ok(choice) => match dispatch(db, term, choice).await {
                Err(CliError::Cancelled) => MenuState::Terminated,
                other => other?,
            },
            Err(()) => {
                term.write_line(Tone::Failure, "Invalid option. Please try again.")?;
                MenuState::Running
            }
        };
    }

    info!("Inventory menu stopped");
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::ScriptedTerminal;
    use inventario_db::DbConfig;

    async fn fresh_db() -> Database {
        Database::new(DbConfig::in_memory().run_migrations(false))
            .await
            .unwrap()
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!("1".parse::<MenuChoice>(), Ok(MenuChoice::Register));
        assert_eq!(" 6 ".parse::<MenuChoice>(), Ok(MenuChoice::LowStockReport));
        assert_eq!("7".parse::<MenuChoice>(), Ok(MenuChoice::Exit));

        assert!("0".parse::<MenuChoice>().is_err());
        assert!("8".parse::<MenuChoice>().is_err());
        assert!("exit".parse::<MenuChoice>().is_err());
        assert!("".parse::<MenuChoice>().is_err());
    }

    #[test]
    fn test_keys_match_menu_order() {
        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            assert_eq!(usize::from(choice.key()), i + 1);
        }
    }

    #[tokio::test]
    async fn test_run_creates_schema_and_exits() {
        let db = fresh_db().await;
        let mut term = ScriptedTerminal::new(&["7"]);

        run(&db, &mut term).await.unwrap();

        assert!(term.printed("--- INVENTORY MAIN MENU ---"));
        assert!(term.printed("7. Exit"));
        assert!(term.printed("Thank you for using the inventory manager! Goodbye."));
        assert_eq!(db.products().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_invalid_option_loops_again() {
        let db = fresh_db().await;
        let mut term = ScriptedTerminal::new(&["9", "abc", "7"]);

        run(&db, &mut term).await.unwrap();

        assert_eq!(term.count_printed("Invalid option. Please try again."), 2);
        assert_eq!(term.count_printed("--- INVENTORY MAIN MENU ---"), 3);
    }

    #[tokio::test]
    async fn test_end_of_input_terminates_quietly() {
        let db = fresh_db().await;
        let mut term = ScriptedTerminal::new(&["1", "Bolt"]);

        run(&db, &mut term).await.unwrap();

        assert!(!term.printed("Thank you for using the inventory manager! Goodbye."));
        assert_eq!(db.products().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_storage_error_is_reported_and_menu_continues() {
        let db = fresh_db().await;
        db.close().await;
        let mut term = ScriptedTerminal::new(&[]);

        let state = dispatch(&db, &mut term, MenuChoice::View).await.unwrap();

        assert_eq!(state, MenuState::Running);
        assert!(term
            .output()
            .iter()
            .any(|line| line.starts_with("Error listing products: ")));
    }

    #[tokio::test]
    async fn test_bolt_and_nut_session() {
        let db = fresh_db().await;
        let mut term = ScriptedTerminal::new(&[
            "1", "Bolt", "", "100", "0.5", "Hardware", // id 1
            "1", "Nut", "", "5", "0.1", "Hardware", // id 2
            "6", "10", // low stock
            "4", "1", // delete bolt
            "2", // view
            "7",
        ]);

        run(&db, &mut term).await.unwrap();

        assert!(term.printed("Product registered successfully (ID 1)."));
        assert!(term.printed("Product registered successfully (ID 2)."));
        assert!(term.printed("Product deleted successfully."));
        assert_eq!(term.remaining_inputs(), 0);

        let remaining = db.products().list_all().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, 2);
        assert_eq!(remaining[0].name, "Nut");

        let nut_rows = term
            .output()
            .into_iter()
            .filter(|line| line.starts_with("2     Nut"))
            .count();
        let bolt_rows = term
            .output()
            .into_iter()
            .filter(|line| line.starts_with("1     Bolt"))
            .count();
        // Nut shows in the low stock report and the final view; Bolt in neither.
        assert_eq!(nut_rows, 2);
        assert_eq!(bolt_rows, 0);
    }
}

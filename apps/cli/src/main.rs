//! Entry point for the `inventario` binary.

use inventario_cli::{init_tracing, menu, AppConfig, CliError, StdTerminal};
use inventario_db::Database;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CliError> {
    let config = AppConfig::default();
    init_tracing(&config.log_filter);

    info!(
        path = %config.database_path.display(),
        "Starting inventory manager"
    );

    let db = Database::new(config.db_config()).await?;
    let mut terminal = StdTerminal::new();

    let result = menu::run(&db, &mut terminal).await;
    db.close().await;
    result
}

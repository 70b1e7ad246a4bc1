//! # Suri Storefront Library
//!
//! Core library for the Suri storefront shell.
//! This is the main entry point that wires state together and runs the
//! command loop.
//!
//! ## Module Organization
//! ```text
//! suri_storefront/
//! ├── lib.rs           ◄─── You are here (startup & command loop)
//! ├── state/
//! │   ├── mod.rs       ◄─── State type exports
//! │   ├── cart.rs      ◄─── Cart store handle
//! │   ├── catalog.rs   ◄─── Catalog source wrapper
//! │   └── config.rs    ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs       ◄─── Command enum + dispatch
//! │   ├── product.rs   ◄─── Catalog browsing and filters
//! │   ├── cart.rs      ◄─── Cart manipulation commands
//! │   ├── checkout.rs  ◄─── Installment options, order placement
//! │   └── config.rs    ◄─── Configuration retrieval
//! └── error.rs         ◄─── API error type for commands
//! ```
//!
//! ## Command Channel
//! The UI talks to the shell over stdin/stdout, one JSON object per line.
//! Logs go to stderr so stdout carries nothing but replies:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Channel                                      │
//! │                                                                         │
//! │  stdin  ──► {"cmd":"add_to_cart","productId":1}                        │
//! │  stdout ◄── {"ok":{"items":[...],"totals":{...},...}}                   │
//! │                                                                         │
//! │  stdin  ──► {"cmd":"get_product","id":999}                             │
//! │  stdout ◄── {"error":{"code":"NOT_FOUND","message":"..."}}              │
//! │                                                                         │
//! │  stdin  ──► not json                                                    │
//! │  stdout ◄── {"error":{"code":"BAD_REQUEST","message":"..."}}            │
//! │                                                                         │
//! │  EOF    ──► session ends                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod state;

use serde::Serialize;
use serde_json::Value;
use suri_catalog::HttpCatalog;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use commands::Command;
use error::ApiError;
use state::{CartStore, CatalogState, ConfigState};

/// Every state handle a session needs.
///
/// Built once at startup; handlers borrow only the parts they use.
#[derive(Debug, Clone)]
pub struct Storefront {
    pub catalog: CatalogState,
    pub cart: CartStore,
    pub config: ConfigState,
}

/// One line written back to the UI.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
enum Reply {
    Ok(Value),
    Error(ApiError),
}

impl Storefront {
    pub fn new(catalog: CatalogState, cart: CartStore, config: ConfigState) -> Self {
        Storefront {
            catalog,
            cart,
            config,
        }
    }

    /// Builds a session backed by the HTTP catalog named in `config`.
    pub fn from_config(config: ConfigState) -> Result<Self, ApiError> {
        let catalog = HttpCatalog::new(config.catalog_config())?;
        Ok(Storefront::new(
            CatalogState::new(catalog),
            CartStore::new(),
            config,
        ))
    }

    /// Handles one command line and returns the reply line (without newline).
    pub async fn handle_line(&self, line: &str) -> String {
        let reply = match serde_json::from_str::<Command>(line) {
            Ok(command) => {
                let name = command.name();
                match commands::dispatch(self, command).await {
                    Ok(value) => Reply::Ok(value),
                    Err(e) => {
                        debug!(command = name, code = ?e.code, "command failed");
                        Reply::Error(e)
                    }
                }
            }
            Err(e) => {
                warn!(error = %e, "unparsable command line");
                Reply::Error(ApiError::from(e))
            }
        };

        serde_json::to_string(&reply).unwrap_or_else(|e| {
            format!(
                r#"{{"error":{{"code":"INTERNAL_ERROR","message":"reply could not be encoded: {}"}}}}"#,
                e.to_string().replace('"', "'")
            )
        })
    }

    /// Runs the command loop until `reader` reaches EOF.
    ///
    /// Blank lines are skipped. Each other line gets exactly one reply line.
    pub async fn serve<R, W>(&self, reader: R, mut writer: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let mut reply = self.handle_line(line).await;
            reply.push('\n');
            writer.write_all(reply.as_bytes()).await?;
            writer.flush().await?;
        }

        info!("command channel closed");
        Ok(())
    }
}

/// Runs the storefront shell on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: info,suri=debug, can be overridden with RUST_LOG         │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • Defaults + SURI_* environment variables                           │
/// │                                                                         │
/// │  3. Initialize State Objects ─────────────────────────────────────────► │
/// │     • CatalogState: HTTP catalog client                                 │
/// │     • CartStore: empty cart, filters reset                              │
/// │     • ConfigState: loaded configuration                                 │
/// │                                                                         │
/// │  4. Serve Commands ───────────────────────────────────────────────────► │
/// │     • stdin lines in, stdout lines out, until EOF                       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting Suri storefront");

    let config = ConfigState::from_env()?;
    info!(
        store = %config.store_name,
        catalog = %config.catalog_base_url,
        "Configuration loaded"
    );

    let app = Storefront::from_config(config)?;
    info!("State initialized");

    app.serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await?;
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=suri_catalog=trace` - Show trace for the catalog client only
/// - Default: INFO, DEBUG for suri crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,suri=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

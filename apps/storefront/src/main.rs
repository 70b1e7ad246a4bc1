//! # Suri Storefront Entry Point
//!
//! Starts the storefront shell. The UI spawns this process and exchanges
//! JSON lines with it over stdin/stdout.
//!
//! ## Process Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Suri Storefront                                  │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                      UI process                                  │  │
//! │  │  • Product grid         • Cart page                              │  │
//! │  │  • Search / categories  • Checkout form                          │  │
//! │  └──────────────────────────────┬───────────────────────────────────┘  │
//! │                    stdin / stdout JSON lines                           │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    Rust shell (this crate)                       │  │
//! │  │                                                                  │  │
//! │  │  main.rs ────► Starts the runtime, reports fatal errors         │  │
//! │  │  lib.rs ─────► Logging, configuration, command loop             │  │
//! │  │  commands/ ──► list_products, add_to_cart, submit_checkout      │  │
//! │  │  state/ ─────► CatalogState, CartStore, ConfigState             │  │
//! │  └──────────────────────────────┬───────────────────────────────────┘  │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                     Product catalog API                          │  │
//! │  │  GET /products, /products/{id}, /products/categories             │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match suri_storefront::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "storefront stopped");
            ExitCode::FAILURE
        }
    }
}

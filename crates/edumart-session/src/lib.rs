//! # edumart-session: Per-Session State for the EduMart Storefront
//!
//! The web storefront holds exactly one [`OrderState`] and one
//! [`CompareState`] per browser session and calls their facade methods on
//! user interaction events. Both wrap the pure engines from `edumart-core`
//! behind a mutex, log at the boundary, and translate engine outcomes into
//! serializable responses.
//!
//! ## Why Separate State Types?
//! Instead of a single `SessionState` struct containing everything, we use
//! separate state types. This approach:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: Can construct/inject individual states
//! 3. **Clearer Call Signatures**: Callers declare exactly what state they need
//! 4. **Reduced Contention**: Ordering and comparing don't block each other
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session State Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     Web Storefront Session                      │   │
//! │  │  session.order  = OrderState::new(catalog, schedule);           │   │
//! │  │  session.compare = CompareState::new(catalog);                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │              ┌───────────────┴───────────────┐                         │
//! │              ▼                               ▼                          │
//! │      ┌──────────────┐                ┌──────────────┐                  │
//! │      │  OrderState  │                │ CompareState │                  │
//! │      │              │                │              │                  │
//! │      │  Arc<Mutex<  │                │  Arc<Mutex<  │                  │
//! │      │  Aggregator>>│                │  Selector>>  │                  │
//! │      └──────────────┘                └──────────────┘                  │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • Both states: protected by Arc<Mutex<T>> for exclusive access        │
//! │  • StoreConfig: read-only after initialization, no mutex needed        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod state;

pub use config::StoreConfig;
pub use error::{ErrorCode, SessionError};
pub use state::{CompareResponse, CompareState, OrderResponse, OrderState};

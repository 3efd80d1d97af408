// Trait definitions
pub mod ledger_client;
pub mod message_editor;

// Implementations
pub mod http_ledger_client;
pub mod http_message_editor;

// Re-exports for convenience
pub use http_ledger_client::HttpLedgerClient;
pub use http_message_editor::HttpMessageEditor;
pub use ledger_client::{LedgerClient, LedgerReply};
pub use message_editor::MessageEditor;

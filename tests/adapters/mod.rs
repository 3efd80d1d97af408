// Mock implementations for adapter layer testing

pub mod mock_ledger_client;
pub mod mock_message_editor;

pub use mock_ledger_client::MockLedgerClient;
pub use mock_message_editor::MockMessageEditor;

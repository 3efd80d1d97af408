use std::sync::{Arc, Mutex};

use anyhow::bail;
use async_trait::async_trait;
use serde_json::Value;

use rsvphook::adapters::MessageEditor;

#[derive(Debug, Clone)]
pub struct RecordedEdit {
    pub token: String,
    pub content: String,
    pub components: Value,
}

pub struct MockMessageEditor {
    pub edits: Arc<Mutex<Vec<RecordedEdit>>>,
    fail: bool,
}

#[allow(dead_code)]
impl MockMessageEditor {
    pub fn new() -> Self {
        Self {
            edits: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    /// Editor whose edit call always fails after recording the attempt
    pub fn failing() -> Self {
        Self {
            edits: Arc::new(Mutex::new(Vec::new())),
            fail: true,
        }
    }

    pub fn get_edits(&self) -> Vec<RecordedEdit> {
        self.edits.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.edits.lock().unwrap().len()
    }
}

impl Default for MockMessageEditor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageEditor for MockMessageEditor {
    async fn edit_original(
        &self,
        token: &str,
        content: &str,
        components: &Value,
    ) -> anyhow::Result<()> {
        self.edits.lock().unwrap().push(RecordedEdit {
            token: token.to_string(),
            content: content.to_string(),
            components: components.clone(),
        });

        if self.fail {
            bail!("simulated edit failure");
        }
        Ok(())
    }
}

pub mod choice;
pub mod content;
pub mod recorder;
pub mod vote;

pub use choice::RsvpChoice;
pub use recorder::{ClickContext, ClickReply, RsvpRecorder};
pub use vote::{Totals, Vote};

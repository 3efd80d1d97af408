pub mod types;

pub use types::{
    CommandOption, Interaction, InteractionData, InteractionKind, InteractionMessage, Member,
    Submitter, User,
};

pub mod ideas;

pub use ideas::{ContentBrief, IdeaRequest, IdeaResponse};

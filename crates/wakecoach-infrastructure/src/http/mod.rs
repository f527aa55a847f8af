mod motivation;

pub use motivation::{ChatCompletionMotivationClient, DEFAULT_ENDPOINT, DEFAULT_MODEL};

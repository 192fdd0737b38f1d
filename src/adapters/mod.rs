// Adapters layer: concrete implementations of the domain ports.

pub mod fs;
pub mod http;
pub mod random;

pub use fs::LocalImageStore;
pub use http::HuggingFaceClient;
pub use random::{SeededRandom, ThreadRandom};

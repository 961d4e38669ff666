// Adapters layer: concrete implementations of domain ports.

pub mod notes;

pub use notes::{CollectedNotes, NoopNotes, TracingNotes};

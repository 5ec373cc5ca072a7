//! Output rendering: JSONL for machines, plain text for people.

mod human;
mod jsonl;

pub use human::{HumanWriter, render_profile, render_statistics};
pub use jsonl::JsonlWriter;

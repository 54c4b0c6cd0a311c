pub mod brief;

pub use brief::{IntakeRequest, ProjectBrief, NOT_PROVIDED, NOT_SPECIFIED};

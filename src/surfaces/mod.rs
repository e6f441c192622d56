pub mod human;
pub mod random;
pub mod scripted;

pub use human::HumanSurface;
pub use random::RandomSurface;
pub use scripted::ScriptedSurface;

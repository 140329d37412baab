pub mod common;
pub mod schedule;
pub mod streams;
pub mod teams;

pub use schedule::{Game, GameStatus, ScheduleResponse};
pub use streams::{FeedItem, StreamMap};
pub use teams::{Team, TeamsResponse};

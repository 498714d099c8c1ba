// Service module exports

pub mod board;
pub mod clock;
pub mod countdown;
pub mod filter;
pub mod launch_source;
pub mod settings;

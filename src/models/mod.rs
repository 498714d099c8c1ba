// Module exports for models

pub mod launch;
pub mod notification;
pub mod settings;

pub mod messages;
pub mod server;
pub mod session;
pub mod tick;

pub use server::GameSession;

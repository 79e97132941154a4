pub mod saved;
pub mod server;

mod client;
mod settings;
pub mod transport;

pub use client::Ppos;
pub use settings::Settings;
pub use transport::{HttpTransport, Reply, Transport};

#[cfg(feature = "data")]
pub mod client;
pub use client::Client;
pub use client::Error;
pub use client::Info;
pub use client::Interface;
pub use client::MockInterface;

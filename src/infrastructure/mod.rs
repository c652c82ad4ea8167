pub mod client;
pub mod oembed;

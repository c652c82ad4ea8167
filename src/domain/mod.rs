pub mod metadata;
pub mod shares;
pub mod spotify;

// Re-exports
pub use metadata::{TrackMetadata, TrackMetadataProvider};
pub use shares::{Share, ShareError, ShareLink, ShareRequest, parse_track};
pub use spotify::{SpotifyKind, SpotifyResource};

mod shares;

pub use shares::{OpenedShare, ShareService};

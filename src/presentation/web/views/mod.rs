mod shares;

pub use shares::{PlayView, ShareLinkView};

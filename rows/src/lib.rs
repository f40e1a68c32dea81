//! Schema-checked parsing of untrusted rows from the external store.
//!
//! Every record read from the hosted datastore passes through here before
//! the rest of the application sees it. Parsing is permissive where the
//! schema declares defaults and strict everywhere else; a malformed row is
//! logged and dropped (`None`), never raised — one corrupt record must not
//! abort a listing.

mod de;

pub mod comment;
pub mod error;
pub mod poll;
pub mod user;
pub mod vote;

pub use comment::{parse_comment_row, CommentRow};
pub use error::RowError;
pub use poll::{parse_poll_row, PollRow};
pub use user::{parse_user_row, UserRow};
pub use vote::{parse_vote_row, VoteRow};

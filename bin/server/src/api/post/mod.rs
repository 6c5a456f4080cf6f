use crate::prelude::*;

pub mod comment;
pub mod create;
pub mod edit;
pub mod get;
pub mod like;
pub mod remove;

/// Malformed post ids read as a client error rather than a server one.
pub(crate) fn parse_post_id(id: &str) -> Result<PostId, Error> {
    id.parse().map_err(|_| Error::MalformedId)
}

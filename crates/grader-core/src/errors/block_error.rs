/// Errors raised while decoding a block from its wire form.
#[derive(Debug, thiserror::Error)]
pub enum BlockError {
    #[error("block has no recognised kind tag")]
    NoKind,

    #[error("block carries several kind tags: {tags}")]
    AmbiguousKind { tags: String },
}

/// A piece of a [`Sql`](super::Sql) fragment.
#[derive(Debug, Clone)]
pub(crate) enum SqlPart {
    Raw(String),
    Param,
}

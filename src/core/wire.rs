use serde::Deserialize;

/// Envelope every paginated Bridge endpoint wraps its resources in.
#[derive(Deserialize)]
pub(crate) struct PagedEnvelope<T> {
    pub(crate) resources: Option<Vec<T>>,
    pub(crate) pagination: Option<Pagination>,
}

#[derive(Deserialize)]
pub(crate) struct Pagination {
    pub(crate) next_uri: Option<String>,
}

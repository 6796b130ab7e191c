use bytes::Bytes;
use object_store::{path::Path, ObjectStore};
use tracing::instrument;

use crate::error::Result;

/// A configured object store plus the public URL prefix its objects are
/// served from.
pub struct Operator {
    pub store: Box<dyn ObjectStore>,
    pub public_url_base: String,
}

impl Operator {
    #[instrument(skip(self, bytes))]
    pub async fn put(&self, location: &str, bytes: Bytes) -> Result<()> {
        let p = Path::from(location);
        self.store.put(&p, bytes).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, location: &str) -> Result<()> {
        let p = Path::from(location);
        self.store.delete(&p).await?;
        Ok(())
    }

    /// The URL the object is reachable at once stored.
    pub fn public_url(&self, location: &str) -> String {
        format!("{}/{}", self.public_url_base, location)
    }

    /// Inverse of [`Operator::public_url`]: the object location for a URL,
    /// or `None` when the URL does not point into this store.
    pub fn object_location<'a>(&self, url: &'a str) -> Option<&'a str> {
        url.strip_prefix(&self.public_url_base)
            .and_then(|rest| rest.strip_prefix('/'))
            .filter(|location| !location.is_empty())
    }
}

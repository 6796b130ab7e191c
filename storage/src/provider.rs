use object_store::{aws::AmazonS3Builder, local::LocalFileSystem};

use crate::{error::Result, operator::Operator};

/// Where uploaded objects live. Credentials for S3 come from the usual
/// AWS environment variables.
#[derive(Debug, Clone)]
pub enum Provider {
    S3 { bucket: String },
    Local { path: String },
}

impl Provider {
    pub fn create_operator(&self, public_url_base: &str) -> Result<Operator> {
        let store: Box<dyn object_store::ObjectStore> = match self {
            Self::S3 { bucket } => Box::new(
                AmazonS3Builder::from_env()
                    .with_bucket_name(bucket)
                    .build()?,
            ),
            Self::Local { path } => {
                std::fs::create_dir_all(path)?;
                Box::new(LocalFileSystem::new_with_prefix(path)?)
            }
        };

        Ok(Operator {
            store,
            public_url_base: public_url_base.trim_end_matches('/').to_string(),
        })
    }
}

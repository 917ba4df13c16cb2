use aws_config::Region;
use aws_sdk_s3::config::Credentials;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use tracing::info;
use uuid::Uuid;

use crate::config::S3Config;
use crate::errors::AppError;

/// Stores uploaded resume PDFs in S3 / MinIO.
#[derive(Clone)]
pub struct ResumeArchive {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl ResumeArchive {
    /// Constructs an S3 client configured for MinIO (local) or AWS (production).
    pub async fn connect(config: &S3Config) -> Self {
        let credentials = Credentials::new(
            &config.access_key_id,
            &config.secret_access_key,
            None,
            None,
            "resume-analyzer-static",
        );

        let s3_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .credentials_provider(credentials)
            .endpoint_url(&config.endpoint)
            .load()
            .await;

        Self {
            client: aws_sdk_s3::Client::new(&s3_config),
            bucket: config.bucket.clone(),
        }
    }

    /// Uploads the PDF and returns its object key.
    pub async fn store(&self, analysis_id: Uuid, pdf: Bytes) -> Result<String, AppError> {
        let key = archive_key(analysis_id);
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(ByteStream::from(pdf))
            .content_type("application/pdf")
            .send()
            .await
            .map_err(|e| AppError::S3(format!("upload of {key} failed: {e}")))?;

        info!("Archived resume to s3://{}/{}", self.bucket, key);
        Ok(key)
    }
}

pub fn archive_key(analysis_id: Uuid) -> String {
    format!("resumes/{analysis_id}.pdf")
}

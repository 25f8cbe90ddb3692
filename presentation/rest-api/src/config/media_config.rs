use business::domain::product::images::ImageBase;

/// Configuration for the public image storage.
///
/// Environment variables:
/// - STORAGE_PUBLIC_URL: Public base URL of the object storage (required)
/// - STORAGE_BUCKET: Bucket holding product images (default: "product-images")
pub struct MediaConfig {
    pub public_url: String,
    pub bucket: String,
}

impl MediaConfig {
    pub fn from_env() -> Self {
        let public_url = std::env::var("STORAGE_PUBLIC_URL")
            .expect("STORAGE_PUBLIC_URL environment variable must be set");
        let bucket =
            std::env::var("STORAGE_BUCKET").unwrap_or_else(|_| "product-images".to_string());

        Self { public_url, bucket }
    }

    pub fn image_base(&self) -> ImageBase {
        ImageBase::new(&self.public_url, &self.bucket)
    }
}

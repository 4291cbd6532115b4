//! 이미지 호스팅 계층
//!
//! [`ImageHost`] 뒤에 Cloudinary REST API를 숨깁니다.
//! 업로드와 삭제 요청은 모두 서명된 form POST이며, 서명은 [`sign_params`]로 계산합니다.

use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use thiserror::Error;
use crate::config::CloudinaryConfig;
use crate::core::errors::AppError;
use crate::domain::entities::shared::ImageAsset;

#[derive(Error, Debug)]
pub enum ImageHostError {
    #[error("Image host request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Image host rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },
}

impl From<ImageHostError> for AppError {
    fn from(e: ImageHostError) -> Self {
        AppError::ExternalServiceError(e.to_string())
    }
}

/// 업로드 옵션
#[derive(Debug, Clone, PartialEq)]
pub struct UploadOptions {
    pub folder: String,
    /// 지정하면 `w_<width>` 변환을 적용해 저장합니다.
    pub width: Option<u32>,
}

impl UploadOptions {
    pub fn folder(folder: &str) -> Self {
        Self {
            folder: folder.to_string(),
            width: None,
        }
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }
}

#[async_trait]
pub trait ImageHost: Send + Sync {
    /// `source`는 base64 data URI 또는 원격 이미지 URL입니다.
    async fn upload(&self, source: &str, options: &UploadOptions) -> Result<ImageAsset, ImageHostError>;

    async fn destroy(&self, public_id: &str) -> Result<(), ImageHostError>;
}

/// 요청 서명
///
/// 값이 빈 항목을 제외하고 키 순으로 정렬한 `k=v&k=v` 문자열 뒤에 비밀키를 붙여
/// SHA-256 16진수 다이제스트를 만듭니다.
pub fn sign_params(params: &[(&str, String)], api_secret: &str) -> String {
    let mut signed: Vec<&(&str, String)> = params.iter().filter(|(_, value)| !value.is_empty()).collect();
    signed.sort_by(|a, b| a.0.cmp(b.0));

    let joined = signed
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");

    let digest = Sha256::digest(format!("{}{}", joined, api_secret).as_bytes());
    digest.iter().map(|byte| format!("{:02x}", byte)).collect()
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    public_id: String,
    secure_url: String,
}

#[derive(Debug, Deserialize)]
struct DestroyResponse {
    result: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorMessage,
}

#[derive(Debug, Deserialize)]
struct ErrorMessage {
    message: String,
}

/// Cloudinary 업로드 API 클라이언트
pub struct CloudinaryImageHost {
    client: reqwest::Client,
    base_url: String,
    cloud_name: String,
    api_key: String,
    api_secret: String,
}

impl CloudinaryImageHost {
    pub fn new(base_url: String, cloud_name: String, api_key: String, api_secret: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            cloud_name,
            api_key,
            api_secret,
        }
    }

    pub fn from_config() -> Self {
        Self::new(
            CloudinaryConfig::api_base_url(),
            CloudinaryConfig::cloud_name(),
            CloudinaryConfig::api_key(),
            CloudinaryConfig::api_secret(),
        )
    }

    fn endpoint(&self, action: &str) -> String {
        format!("{}/{}/image/{}", self.base_url.trim_end_matches('/'), self.cloud_name, action)
    }

    /// 서명 대상 파라미터에 `api_key`, `signature`, `signature_algorithm`을 덧붙인 form
    fn signed_form(&self, params: Vec<(&'static str, String)>) -> Vec<(&'static str, String)> {
        let signature = sign_params(&params, &self.api_secret);

        let mut form: Vec<(&'static str, String)> = params.into_iter().filter(|(_, v)| !v.is_empty()).collect();
        form.push(("api_key", self.api_key.clone()));
        form.push(("signature", signature));
        form.push(("signature_algorithm", "sha256".to_string()));
        form
    }

    fn upload_params(options: &UploadOptions, timestamp: i64) -> Vec<(&'static str, String)> {
        vec![
            ("folder", options.folder.clone()),
            ("timestamp", timestamp.to_string()),
            ("transformation", options.width.map(|w| format!("w_{}", w)).unwrap_or_default()),
        ]
    }

    async fn rejected(response: reqwest::Response) -> ImageHostError {
        let status = response.status().as_u16();
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error.message,
            Err(_) => "unexpected response".to_string(),
        };

        ImageHostError::Rejected { status, message }
    }
}

#[async_trait]
impl ImageHost for CloudinaryImageHost {
    async fn upload(&self, source: &str, options: &UploadOptions) -> Result<ImageAsset, ImageHostError> {
        let mut form = self.signed_form(Self::upload_params(options, Utc::now().timestamp()));
        form.push(("file", source.to_string()));

        let response = self.client.post(self.endpoint("upload")).form(&form).send().await?;

        if !response.status().is_success() {
            return Err(Self::rejected(response).await);
        }

        let uploaded: UploadResponse = response.json().await?;
        log::info!("🖼️ 이미지 업로드: {}", uploaded.public_id);

        Ok(ImageAsset {
            public_id: uploaded.public_id,
            url: uploaded.secure_url,
        })
    }

    async fn destroy(&self, public_id: &str) -> Result<(), ImageHostError> {
        let form = self.signed_form(vec![
            ("public_id", public_id.to_string()),
            ("timestamp", Utc::now().timestamp().to_string()),
        ]);

        let response = self.client.post(self.endpoint("destroy")).form(&form).send().await?;

        if !response.status().is_success() {
            return Err(Self::rejected(response).await);
        }

        let destroyed: DestroyResponse = response.json().await?;
        if destroyed.result != "ok" {
            // 이미 지워진 이미지는 교체를 막지 않는다
            log::warn!("이미지 삭제 결과 {}: {}", destroyed.result, public_id);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_params_sorts_and_skips_empty() {
        let params = vec![
            ("timestamp", "1315060510".to_string()),
            ("transformation", String::new()),
            ("folder", "avatars".to_string()),
        ];

        let expected: String = Sha256::digest(b"folder=avatars&timestamp=1315060510abcd")
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect();

        assert_eq!(sign_params(&params, "abcd"), expected);
        assert_eq!(expected.len(), 64);
    }

    #[test]
    fn test_signature_depends_on_secret() {
        let params = vec![("public_id", "avatars/a1".to_string()), ("timestamp", "1".to_string())];
        assert_ne!(sign_params(&params, "one"), sign_params(&params, "two"));
    }

    #[test]
    fn test_upload_params_width_transformation() {
        let options = UploadOptions::folder("avatars").with_width(150);
        let params = CloudinaryImageHost::upload_params(&options, 42);

        assert!(params.contains(&("transformation", "w_150".to_string())));
        assert!(params.contains(&("folder", "avatars".to_string())));
    }

    #[test]
    fn test_signed_form_fields() {
        let host = CloudinaryImageHost::new(
            "https://api.cloudinary.com/v1_1/".to_string(),
            "demo".to_string(),
            "key".to_string(),
            "secret".to_string(),
        );

        assert_eq!(host.endpoint("upload"), "https://api.cloudinary.com/v1_1/demo/image/upload");

        let form = host.signed_form(CloudinaryImageHost::upload_params(&UploadOptions::folder("courses"), 42));
        let keys: Vec<&str> = form.iter().map(|(k, _)| *k).collect();

        assert_eq!(keys, vec!["folder", "timestamp", "api_key", "signature", "signature_algorithm"]);
    }
}

//! 이미지 업로드 서비스
//!
//! 아바타와 강의 썸네일의 업로드/교체 규칙을 한곳에 모읍니다.
//! 교체 시에는 이미지 호스트가 관리하는 기존 이미지를 먼저 지운 뒤 새 이미지를 올립니다.

use std::sync::Arc;
use once_cell::sync::OnceCell;
use crate::core::errors::AppError;
use crate::core::registry::ServiceLocator;
use crate::domain::entities::shared::ImageAsset;
use crate::services::media::image_host::{CloudinaryImageHost, ImageHost, UploadOptions};

pub const AVATAR_FOLDER: &str = "avatars";
pub const AVATAR_WIDTH: u32 = 150;
pub const COURSE_FOLDER: &str = "courses";

pub struct MediaService {
    host: Arc<dyn ImageHost>,
}

static MEDIA_SERVICE_INSTANCE: OnceCell<Arc<MediaService>> = OnceCell::new();

impl MediaService {
    /// # Panics
    ///
    /// `CloudinaryImageHost`가 `ServiceLocator`에 등록되기 전에 호출하면 패닉이 발생합니다.
    pub fn instance() -> Arc<Self> {
        MEDIA_SERVICE_INSTANCE
            .get_or_init(|| Arc::new(Self::new(ServiceLocator::get::<CloudinaryImageHost>())))
            .clone()
    }

    pub fn new(host: Arc<dyn ImageHost>) -> Self {
        Self { host }
    }

    /// `previous`가 호스팅 이미지면 지우고 `source`를 업로드합니다.
    pub async fn replace(
        &self,
        previous: Option<&ImageAsset>,
        source: &str,
        options: &UploadOptions,
    ) -> Result<ImageAsset, AppError> {
        if let Some(old) = previous.filter(|asset| asset.is_hosted()) {
            self.host.destroy(&old.public_id).await.map_err(|e| {
                log::error!("기존 이미지 삭제 실패 ({}): {}", old.public_id, e);
                AppError::from(e)
            })?;
        }

        self.host.upload(source, options).await.map_err(|e| {
            log::error!("이미지 업로드 실패 ({}): {}", options.folder, e);
            AppError::from(e)
        })
    }

    pub async fn replace_avatar(&self, previous: Option<&ImageAsset>, source: &str) -> Result<ImageAsset, AppError> {
        let options = UploadOptions::folder(AVATAR_FOLDER).with_width(AVATAR_WIDTH);
        self.replace(previous, source, &options).await
    }

    pub async fn replace_course_thumbnail(
        &self,
        previous: Option<&ImageAsset>,
        source: &str,
    ) -> Result<ImageAsset, AppError> {
        self.replace(previous, source, &UploadOptions::folder(COURSE_FOLDER)).await
    }
}

fn media_service_constructor() -> Box<dyn std::any::Any + Send + Sync> {
    Box::new(MediaService::instance() as Arc<dyn std::any::Any + Send + Sync>)
}

inventory::submit! {
    crate::core::registry::ServiceRegistration {
        name: "media_service",
        constructor: media_service_constructor,
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;
    use async_trait::async_trait;
    use crate::domain::entities::shared::ImageAsset;
    use crate::services::media::image_host::{ImageHost, ImageHostError, UploadOptions};

    /// 호출만 기록하는 이미지 호스트
    #[derive(Default)]
    pub struct RecordingImageHost {
        pub uploads: Mutex<Vec<UploadOptions>>,
        pub destroyed: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ImageHost for RecordingImageHost {
        async fn upload(&self, _source: &str, options: &UploadOptions) -> Result<ImageAsset, ImageHostError> {
            let mut uploads = self.uploads.lock().unwrap();
            uploads.push(options.clone());

            let public_id = format!("{}/img{}", options.folder, uploads.len());
            Ok(ImageAsset {
                url: format!("https://res.example.com/{}.png", public_id),
                public_id,
            })
        }

        async fn destroy(&self, public_id: &str) -> Result<(), ImageHostError> {
            self.destroyed.lock().unwrap().push(public_id.to_string());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::testing::RecordingImageHost;

    #[actix_web::test]
    async fn test_replace_avatar_destroys_hosted_image() {
        let host = Arc::new(RecordingImageHost::default());
        let service = MediaService::new(host.clone());
        let old = ImageAsset {
            public_id: "avatars/old".to_string(),
            url: "https://res.example.com/avatars/old.png".to_string(),
        };

        let asset = service.replace_avatar(Some(&old), "data:image/png;base64,AAAA").await.unwrap();

        assert_eq!(asset.public_id, "avatars/img1");
        assert_eq!(*host.destroyed.lock().unwrap(), vec!["avatars/old".to_string()]);
        assert_eq!(host.uploads.lock().unwrap()[0].width, Some(150));
    }

    #[actix_web::test]
    async fn test_external_image_is_not_destroyed() {
        let host = Arc::new(RecordingImageHost::default());
        let service = MediaService::new(host.clone());
        let social = ImageAsset::external("https://lh3.googleusercontent.com/a/photo".to_string());

        service.replace_avatar(Some(&social), "data:image/png;base64,AAAA").await.unwrap();

        assert!(host.destroyed.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_course_thumbnail_uses_course_folder() {
        let host = Arc::new(RecordingImageHost::default());
        let service = MediaService::new(host.clone());

        let asset = service.replace_course_thumbnail(None, "https://img.example.com/t.png").await.unwrap();

        assert!(asset.public_id.starts_with("courses/"));
        assert_eq!(host.uploads.lock().unwrap()[0].width, None);
    }
}

//! 여러 엔티티가 공유하는 값 객체

use serde::{Deserialize, Serialize};

/// 이미지 호스트에 업로드된 이미지
///
/// `public_id`는 교체/삭제 시 이미지 호스트에 전달하는 식별자입니다.
/// 소셜 로그인으로 받은 외부 프로필 이미지는 `public_id`가 비어 있습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageAsset {
    pub public_id: String,
    pub url: String,
}

impl ImageAsset {
    /// 이미지 호스트가 관리하지 않는 외부 URL
    pub fn external(url: String) -> Self {
        Self {
            public_id: String::new(),
            url,
        }
    }

    /// 이미지 호스트에서 삭제할 수 있는 이미지인지 여부
    pub fn is_hosted(&self) -> bool {
        !self.public_id.is_empty()
    }
}

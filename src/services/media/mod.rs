//! 이미지 호스팅 모듈
//!
//! - [`image_host`] - `ImageHost` 트레이트, Cloudinary 클라이언트, 요청 서명
//! - [`media_service`] - 아바타/강의 썸네일 업로드와 교체

pub mod image_host;
pub mod media_service;

pub use image_host::{CloudinaryImageHost, ImageHost, ImageHostError, UploadOptions};
pub use media_service::MediaService;

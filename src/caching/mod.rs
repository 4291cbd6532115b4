//! 캐싱 계층 모듈
//!
//! Redis를 세션 저장소와 강의 응답 캐시로 사용합니다.
//!
//! # 키 구성
//!
//! | 키 | 값 | 수명 |
//! |----|----|------|
//! | `<user id>` | 세션 사용자 JSON | 리프레시 토큰 수명 |
//! | `allCourses` | 강의 목록 미리보기 JSON | `COURSE_CACHE_TTL_SECONDS` |
//! | `course:<course id>` | 강의 미리보기 JSON | `COURSE_CACHE_TTL_SECONDS` |
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;

//! 인증 쿠키 생성
//!
//! 두 토큰 모두 `HttpOnly`, `SameSite=Lax`, `Path=/` 쿠키로 내려갑니다.
//! `Secure`는 프로덕션에서만 붙습니다.

use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::HttpResponseBuilder;
use crate::config::CookieConfig;
use crate::domain::models::token::token::TokenPair;

fn build_cookie(name: &'static str, value: String, max_age_seconds: i64, secure: bool) -> Cookie<'static> {
    Cookie::build(name, value)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::seconds(max_age_seconds))
        .finish()
}

pub fn access_cookie(tokens: &TokenPair, secure: bool) -> Cookie<'static> {
    build_cookie(CookieConfig::ACCESS_TOKEN, tokens.access_token.clone(), tokens.access_expires_in, secure)
}

pub fn refresh_cookie(tokens: &TokenPair, secure: bool) -> Cookie<'static> {
    build_cookie(CookieConfig::REFRESH_TOKEN, tokens.refresh_token.clone(), tokens.refresh_expires_in, secure)
}

/// 값이 비어 있고 `Max-Age=0`인 쿠키. 브라우저가 즉시 지웁니다.
pub fn expired_cookie(name: &'static str, secure: bool) -> Cookie<'static> {
    build_cookie(name, String::new(), 0, secure)
}

/// 응답에 토큰 쿠키 두 개를 붙입니다.
pub fn set_token_cookies(builder: &mut HttpResponseBuilder, tokens: &TokenPair) {
    let secure = CookieConfig::secure();
    builder
        .cookie(access_cookie(tokens, secure))
        .cookie(refresh_cookie(tokens, secure));
}

pub fn clear_token_cookies(builder: &mut HttpResponseBuilder) {
    let secure = CookieConfig::secure();
    builder
        .cookie(expired_cookie(CookieConfig::ACCESS_TOKEN, secure))
        .cookie(expired_cookie(CookieConfig::REFRESH_TOKEN, secure));
}

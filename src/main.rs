//! 학습 플랫폼 백엔드 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! MongoDB, Redis, SMTP, 이미지 호스트 연결을 설정하고 쿠키 기반 JWT 인증 REST API를 제공합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use learning_platform_backend::caching::redis::RedisClient;
use learning_platform_backend::config::{CorsConfig, Environment, ServerConfig};
use learning_platform_backend::core::registry::ServiceLocator;
use learning_platform_backend::db::Database;
use learning_platform_backend::routes::configure_all_routes;
use learning_platform_backend::services::mail::SmtpMailer;
use learning_platform_backend::services::media::CloudinaryImageHost;
use learning_platform_backend::utils::display_terminal::print_server_banner;

/// Rate Limiting 설정 구조체
#[derive(Debug)]
struct RateLimitConfig {
    per_second: u64,
    burst_size: u32,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 학습 플랫폼 백엔드 시작중...");

    let (database, redis_client) = initialize_data_stores().await?;
    ServiceLocator::set(database);
    ServiceLocator::set(redis_client);

    initialize_external_services()?;

    if let Err(e) = ServiceLocator::initialize_all().await {
        error!("서비스 초기화 실패: {}", e);
        return Err(std::io::Error::other(e.to_string()));
    }

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server().await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, Rate Limiting, 로깅, 경로 정규화 미들웨어와 JSON 본문 크기 제한을 적용합니다.
/// 이미지가 base64로 본문에 실려 오므로 JSON 제한은 기본값보다 크게 잡습니다.
///
/// ```rust,ignore
/// // Health check: http://127.0.0.1:8080/health
/// // API 엔드포인트: http://127.0.0.1:8080/api/v1/*
/// ```
async fn start_http_server() -> std::io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    print_server_banner(&bind_address, &format!("{:?}", Environment::current()));

    let rate_limit_config = load_rate_limit_config();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("잘못된 Rate Limiting 설정"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let json_limit = ServerConfig::json_limit_bytes();

    HttpServer::new(move || {
        App::new()
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(web::JsonConfig::default().limit(json_limit))
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// ```bash
/// PROFILE=prod cargo run
/// ```
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=learning_platform_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// MongoDB와 Redis 연결을 초기화합니다
async fn initialize_data_stores() -> std::io::Result<(Arc<Database>, Arc<RedisClient>)> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::new().await.map_err(|e| {
        error!("MongoDB 연결 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    let redis_client = RedisClient::new().await.map_err(|e| {
        error!("Redis 연결 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    Ok((Arc::new(database), Arc::new(redis_client)))
}

/// 메일 전송기와 이미지 호스트를 등록합니다
///
/// 서비스 싱글톤(`MailService`, `MediaService`)이 `ServiceLocator`에서 꺼내 쓰므로
/// `initialize_all()`보다 먼저 호출해야 합니다.
fn initialize_external_services() -> std::io::Result<()> {
    let mailer = SmtpMailer::from_config().map_err(|e| {
        error!("SMTP 전송기 생성 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;
    ServiceLocator::set(Arc::new(mailer));
    info!("✅ SMTP 메일 전송기 준비");

    ServiceLocator::set(Arc::new(CloudinaryImageHost::from_config()));
    info!("✅ 이미지 호스트 준비");

    Ok(())
}

/// CORS 설정을 구성합니다
///
/// 허용 Origin은 `CORS_ORIGINS`(쉼표 구분)에서 읽습니다.
/// 토큰이 쿠키로 오가므로 자격 증명을 허용합니다.
fn configure_cors() -> Cors {
    let cors = CorsConfig::origins()
        .into_iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(&origin));

    cors
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}

/// 환경변수에서 Rate Limiting 설정을 로드합니다
///
/// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
/// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
fn load_rate_limit_config() -> RateLimitConfig {
    let per_second = std::env::var("RATE_LIMIT_PER_SECOND")
        .unwrap_or_else(|_| "100".to_string())
        .parse::<u64>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
            100
        });

    let burst_size = std::env::var("RATE_LIMIT_BURST_SIZE")
        .unwrap_or_else(|_| "200".to_string())
        .parse::<u32>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
            200
        });

    let config = RateLimitConfig {
        per_second,
        burst_size,
    };

    info!("Rate Limiting 설정 로드됨: {:?}", config);
    config
}

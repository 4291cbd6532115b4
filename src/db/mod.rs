//! Database Connection Management Module
//!
//! MongoDB 연결을 관리합니다. 드라이버가 연결 풀링을 담당하므로
//! 이 모듈은 접속 설정, 기동 시 연결 확인, 컬렉션 접근만 제공합니다.
//!
//! # 환경 변수 설정
//!
//! ```bash
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="learning_platform"
//! ```
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! let database = Arc::new(Database::new().await?);
//! ServiceLocator::set(database);
//!
//! let users = ServiceLocator::get::<Database>().collection::<User>("users");
//! ```

use mongodb::{Client, Collection, options::ClientOptions};
use std::env;
use log::info;

/// MongoDB 데이터베이스 연결 래퍼
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 환경 변수에서 접속 정보를 읽어 연결하고 `ping`으로 확인합니다.
    pub async fn new() -> Result<Self, mongodb::error::Error> {
        let mongodb_uri = env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

        let database_name = env::var("DATABASE_NAME")
            .unwrap_or_else(|_| "learning_platform".to_string());

        let mut client_options = ClientOptions::parse(&mongodb_uri).await?;
        client_options.app_name = Some("learning_platform_backend".to_string());

        let client = Client::with_options(client_options)?;

        client
            .database(&database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name,
        })
    }

    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 타입이 지정된 컬렉션 핸들
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.get_database().collection::<T>(name)
    }
}

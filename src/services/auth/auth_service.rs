//! 인증 서비스 구현
//!
//! 가입(메일 활성화), 로그인, 소셜 로그인, 토큰 갱신, 로그아웃과
//! 요청별 액세스 토큰 인증을 담당합니다.
//!
//! ## 세션 모델
//!
//! ```text
//! login / socialAuth / refreshToken
//!   └─ start_session
//!        ├─ SessionRepository.save(SessionUser)   Redis `<user id>`, TTL = 리프레시 수명
//!        └─ TokenService.issue_pair(user id)      access_token / refresh_token 쿠키
//!
//! 인증이 필요한 요청
//!   └─ authenticate(access_token)
//!        ├─ TokenService.verify_access            서명/만료 확인 (401)
//!        └─ SessionRepository.find                세션 없음 (400)
//! ```

use std::sync::Arc;
use once_cell::sync::OnceCell;
use crate::core::errors::AppError;
use crate::domain::dto::users::request::{ActivationRequest, LoginRequest, RegisterRequest, SocialAuthRequest};
use crate::domain::entities::users::user::User;
use crate::domain::models::auth::session_user::SessionUser;
use crate::domain::models::token::token::{PendingUser, TokenPair};
use crate::repositories::{SessionRepository, SessionStore, UserRepository, UserStore};
use crate::services::auth::activation_service::ActivationService;
use crate::services::auth::password::{hash_password, verify_password};
use crate::services::auth::token_service::TokenService;
use crate::services::mail::MailService;
use crate::utils::string_utils::normalize_email;

/// 세션 시작 결과
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user: SessionUser,
    pub tokens: TokenPair,
}

fn invalid_credentials() -> AppError {
    AppError::BadRequest("Invalid email and password".to_string())
}

fn refresh_failed() -> AppError {
    AppError::BadRequest("could not get refresh token".to_string())
}

pub struct AuthService {
    user_repo: Arc<dyn UserStore>,
    sessions: Arc<dyn SessionStore>,
    tokens: Arc<TokenService>,
    activation: Arc<ActivationService>,
    mail: Arc<MailService>,
}

static AUTH_SERVICE_INSTANCE: OnceCell<Arc<AuthService>> = OnceCell::new();

impl AuthService {
    pub fn instance() -> Arc<Self> {
        AUTH_SERVICE_INSTANCE
            .get_or_init(|| {
                Arc::new(Self::new(
                    UserRepository::instance(),
                    SessionRepository::instance(),
                    TokenService::instance(),
                    ActivationService::instance(),
                    MailService::instance(),
                ))
            })
            .clone()
    }

    pub fn new(
        user_repo: Arc<dyn UserStore>,
        sessions: Arc<dyn SessionStore>,
        tokens: Arc<TokenService>,
        activation: Arc<ActivationService>,
        mail: Arc<MailService>,
    ) -> Self {
        Self { user_repo, sessions, tokens, activation, mail }
    }

    /// 가입 요청
    ///
    /// 계정은 아직 만들지 않고, 해시된 비밀번호와 활성화 코드를 담은 토큰을 돌려줍니다.
    /// 코드는 메일로만 전달됩니다.
    pub async fn register(&self, request: RegisterRequest) -> Result<String, AppError> {
        let email = normalize_email(&request.email);

        if self.user_repo.exists_by_email(&email).await? {
            return Err(AppError::BadRequest("Email already exists".to_string()));
        }

        let name = request.name.trim().to_string();
        let pending = PendingUser {
            name: name.clone(),
            email: email.clone(),
            password_hash: hash_password(&request.password)?,
        };

        let ticket = self.activation.create_activation(pending)?;
        self.mail
            .send_activation(&email, &name, &ticket.activation_code)
            .await?;

        log::info!("✉️ 활성화 메일 발송: {}", email);
        Ok(ticket.token)
    }

    /// 활성화 코드 확인 후 계정 생성
    pub async fn activate(&self, request: ActivationRequest) -> Result<User, AppError> {
        let pending = self
            .activation
            .verify_activation(&request.activation_token, &request.activation_code)?;

        if self.user_repo.exists_by_email(&pending.email).await? {
            return Err(AppError::BadRequest("Email already exist".to_string()));
        }

        self.user_repo
            .create(User::new_local(pending.name, pending.email, pending.password_hash))
            .await
    }

    pub async fn login(&self, request: LoginRequest) -> Result<AuthSession, AppError> {
        let email = normalize_email(&request.email);

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(invalid_credentials)?;

        // 소셜 계정은 비밀번호가 없으므로 같은 오류로 거절
        let hash = user.password.as_deref().filter(|h| !h.is_empty()).ok_or_else(|| {
            log::warn!("비밀번호 없는 계정의 로그인 시도: {}", email);
            invalid_credentials()
        })?;

        if !verify_password(&request.password, hash) {
            log::warn!("로그인 실패: {}", email);
            return Err(invalid_credentials());
        }

        log::info!("🔓 로그인: {}", email);
        self.start_session(&user).await
    }

    /// 소셜 로그인. 처음 보는 이메일이면 비밀번호 없는 계정을 만듭니다.
    pub async fn social_auth(&self, request: SocialAuthRequest) -> Result<AuthSession, AppError> {
        let email = normalize_email(&request.email);

        let user = match self.user_repo.find_by_email(&email).await? {
            Some(user) => user,
            None => {
                let user = User::new_social(request.name.trim().to_string(), email, request.avatar);
                self.user_repo.create(user).await?
            }
        };

        log::info!("🔓 소셜 로그인: {}", user.email);
        self.start_session(&user).await
    }

    /// 세션을 저장하고 새 토큰 쌍을 발급합니다.
    pub async fn start_session(&self, user: &User) -> Result<AuthSession, AppError> {
        let session = SessionUser::from_user(user)?;
        self.sessions.save(&session).await?;

        let tokens = self.tokens.issue_pair(&session.id)?;

        Ok(AuthSession { user: session, tokens })
    }

    /// 리프레시 토큰으로 토큰 쌍을 다시 발급하고 세션 TTL을 연장합니다.
    pub async fn refresh(&self, refresh_token: Option<&str>) -> Result<AuthSession, AppError> {
        let token = refresh_token.filter(|t| !t.is_empty()).ok_or_else(refresh_failed)?;

        let claims = self.tokens.verify_refresh(token).map_err(|e| {
            log::warn!("리프레시 토큰 거절: {}", e);
            refresh_failed()
        })?;

        let session = self.sessions.find(&claims.id).await?.ok_or_else(refresh_failed)?;
        self.sessions.save(&session).await?;

        let tokens = self.tokens.issue_pair(&session.id)?;
        Ok(AuthSession { user: session, tokens })
    }

    pub async fn logout(&self, user_id: &str) -> Result<(), AppError> {
        self.sessions.delete(user_id).await?;

        log::info!("🔒 로그아웃: {}", user_id);
        Ok(())
    }

    /// 액세스 토큰으로 세션 사용자를 찾습니다.
    pub async fn authenticate(&self, access_token: &str) -> Result<SessionUser, AppError> {
        let claims = self.tokens.verify_access(access_token)?;

        self.sessions
            .find(&claims.id)
            .await?
            .ok_or_else(|| AppError::BadRequest("Please login to access this resource".to_string()))
    }
}

fn auth_service_constructor() -> Box<dyn std::any::Any + Send + Sync> {
    Box::new(AuthService::instance() as Arc<dyn std::any::Any + Send + Sync>)
}

inventory::submit! {
    crate::core::registry::ServiceRegistration {
        name: "auth_service",
        constructor: auth_service_constructor,
    }
}

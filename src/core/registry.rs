//! # Service Registry
//!
//! 전역 의존성 컨테이너입니다.
//!
//! 두 종류의 컴포넌트를 다룹니다.
//!
//! 1. **인프라 인스턴스** - `Database`, `RedisClient`, 메일 전송기, 이미지 호스트처럼
//!    비동기 초기화가 필요한 객체는 `main`에서 만든 뒤 [`ServiceLocator::set`]으로 등록합니다.
//! 2. **싱글톤 컴포넌트** - 리포지토리와 서비스는 각자 `instance()`를 가지며,
//!    `inventory::submit!`으로 [`RepositoryRegistration`] / [`ServiceRegistration`]을 제출합니다.
//!    [`ServiceLocator::initialize_all`]이 등록된 컴포넌트를 모두 생성하고
//!    리포지토리 초기화(인덱스 생성)를 실행합니다.
//!
//! ```rust,ignore
//! ServiceLocator::set(Arc::new(database));
//! ServiceLocator::set(Arc::new(redis_client));
//! ServiceLocator::initialize_all().await?;
//!
//! let db = ServiceLocator::get::<Database>();
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use futures_util::future::BoxFuture;
use once_cell::sync::Lazy;
use crate::core::errors::AppError;
use crate::utils::display_terminal::{
    print_boxed_title, print_component, print_registry_summary, print_stage_complete, print_stage_start,
    ComponentStatus, Stage,
};

/// 리포지토리 등록 정보
pub struct RepositoryRegistration {
    pub name: &'static str,
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
    /// 인덱스 생성 등 시작 시 한 번 실행할 비동기 초기화
    pub initializer: fn() -> BoxFuture<'static, Result<(), AppError>>,
}

/// 서비스 등록 정보
pub struct ServiceRegistration {
    pub name: &'static str,
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

inventory::collect!(RepositoryRegistration);
inventory::collect!(ServiceRegistration);

/// 타입 기반 인스턴스 저장소
pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

static LOCATOR: Lazy<ServiceLocator> = Lazy::new(|| ServiceLocator {
    instances: RwLock::new(HashMap::new()),
});

impl ServiceLocator {
    /// 인스턴스를 등록합니다. 같은 타입이 이미 있으면 교체합니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let name = Self::short_type_name::<T>();
        log::info!("📦 Registering: {}", name);

        let mut instances = LOCATOR
            .instances
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        instances.insert(TypeId::of::<T>(), instance as Arc<dyn Any + Send + Sync>);
    }

    /// 등록된 인스턴스를 찾습니다.
    pub fn try_get<T: 'static + Send + Sync>() -> Option<Arc<T>> {
        let instances = LOCATOR
            .instances
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        instances
            .get(&TypeId::of::<T>())
            .cloned()
            .and_then(|instance| instance.downcast::<T>().ok())
    }

    /// 등록된 인스턴스를 가져옵니다.
    ///
    /// # Panics
    ///
    /// 시작 시 `set`으로 등록되지 않은 타입을 요청하면 패닉이 발생합니다.
    /// 등록 누락은 배선 오류이므로 기동 단계에서 바로 드러나야 합니다.
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        match Self::try_get::<T>() {
            Some(instance) => instance,
            None => panic!(
                "Service not found: {}. Register it with ServiceLocator::set() before use",
                std::any::type_name::<T>()
            ),
        }
    }

    /// 등록된 모든 리포지토리와 서비스를 생성하고 리포지토리 초기화를 실행합니다.
    pub async fn initialize_all() -> Result<(), AppError> {
        print_boxed_title("🔄 INITIALIZING SERVICE REGISTRY");

        let repositories: Vec<_> = inventory::iter::<RepositoryRegistration>().collect();
        let repo_count = repositories.len();

        if repo_count > 0 {
            print_stage_start(Stage::Repositories);

            for registration in repositories {
                print_component(registration.name, ComponentStatus::Creating);
                let _instance = (registration.constructor)();
                (registration.initializer)().await?;
                print_component(registration.name, ComponentStatus::Ready);
            }

            print_stage_complete(Stage::Repositories, repo_count);
        }

        let services: Vec<_> = inventory::iter::<ServiceRegistration>().collect();
        let service_count = services.len();

        if service_count > 0 {
            print_stage_start(Stage::Services);

            for registration in services {
                print_component(registration.name, ComponentStatus::Creating);
                let _instance = (registration.constructor)();
                print_component(registration.name, ComponentStatus::Ready);
            }

            print_stage_complete(Stage::Services, service_count);
        }

        print_registry_summary(repo_count, service_count);

        Ok(())
    }

    fn short_type_name<T>() -> &'static str {
        let full = std::any::type_name::<T>();
        full.rsplit("::").next().unwrap_or(full)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe {
        value: u32,
    }

    struct NeverRegistered;

    #[test]
    fn test_set_then_get_returns_same_instance() {
        ServiceLocator::set(Arc::new(Probe { value: 7 }));

        let first = ServiceLocator::get::<Probe>();
        let second = ServiceLocator::get::<Probe>();

        assert_eq!(first.value, 7);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_try_get_missing_type_is_none() {
        assert!(ServiceLocator::try_get::<NeverRegistered>().is_none());
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(ServiceLocator::short_type_name::<Probe>(), "Probe");
    }
}

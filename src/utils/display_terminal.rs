//! 터미널 출력 유틸리티
//!
//! 서비스 레지스트리 초기화 진행 상황과 서버 기동 배너를 출력합니다.
//! 로그(`log`)와 달리 필터와 무관하게 항상 표준 출력으로 나갑니다.
//!
//! ```text
//! ╔══════════════════════════════════════════════════╗
//! ║         🔄 INITIALIZING SERVICE REGISTRY         ║
//! ╚══════════════════════════════════════════════════╝
//! → Step 1: Creating Repository instances
//!    ├─ user_repository: Creating...
//!    ├─ user_repository: ✓ Ready
//! ✓ Step 1: Repository instances created (3 items)
//! ```

/// 상자 안쪽 최소 너비
const MIN_BOX_WIDTH: usize = 50;

/// 레지스트리 초기화 단계
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stage {
    Repositories,
    Services,
}

impl Stage {
    fn number(self) -> u8 {
        match self {
            Stage::Repositories => 1,
            Stage::Services => 2,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Stage::Repositories => "Repository",
            Stage::Services => "Service",
        }
    }
}

/// 컴포넌트 생성 상태
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ComponentStatus {
    Creating,
    Ready,
}

/// 제목을 가운데 정렬한 3줄짜리 상자. 제목이 길면 상자가 늘어납니다.
pub fn boxed_title(title: &str) -> String {
    let width = title.chars().count().max(MIN_BOX_WIDTH - 2) + 2;
    let border = "═".repeat(width);

    format!("╔{border}╗\n║{title:^width$}║\n╚{border}╝")
}

pub fn print_boxed_title(title: &str) {
    println!("{}", boxed_title(title));
}

pub fn print_stage_start(stage: Stage) {
    println!("→ Step {}: Creating {} instances", stage.number(), stage.label());
}

pub fn print_stage_complete(stage: Stage, count: usize) {
    println!("✓ Step {}: {} instances created ({} items)", stage.number(), stage.label(), count);
}

pub fn component_line(name: &str, status: ComponentStatus) -> String {
    let status = match status {
        ComponentStatus::Creating => "Creating...",
        ComponentStatus::Ready => "✓ Ready",
    };
    format!("   ├─ {}: {}", name, status)
}

pub fn print_component(name: &str, status: ComponentStatus) {
    println!("{}", component_line(name, status));
}

/// 레지스트리 초기화 요약
pub fn print_registry_summary(repos: usize, services: usize) {
    println!();
    print_boxed_title("🎉 SERVICE REGISTRY INITIALIZED");
    println!("   📦 Repositories: {}", repos);
    println!("   🔧 Services: {}", services);
    println!("   🚀 Total Components: {}", repos + services);
    println!();
}

/// 서버 기동 배너
pub fn print_server_banner(bind_address: &str, environment: &str) {
    print_boxed_title("🎓 LEARNING PLATFORM API");
    println!("   🌍 Environment: {}", environment);
    println!("   🌐 Listening: http://{}", bind_address);
    println!("   📍 Health: http://{}/health", bind_address);
    println!("   📚 API: http://{}/api/v1", bind_address);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_has_minimum_width() {
        let rendered = boxed_title("OK");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].chars().count(), MIN_BOX_WIDTH + 2);
        assert_eq!(lines[1].chars().count(), MIN_BOX_WIDTH + 2);
    }

    #[test]
    fn test_box_grows_with_long_title() {
        let title = "a title that is much wider than the fixed fifty column box";
        let rendered = boxed_title(title);

        assert!(rendered.contains(title));
        assert_eq!(rendered.lines().next().unwrap().chars().count(), title.chars().count() + 4);
    }

    #[test]
    fn test_component_line() {
        assert_eq!(
            component_line("course_repository", ComponentStatus::Ready),
            "   ├─ course_repository: ✓ Ready"
        );
    }
}

//! 기동 로그용 터미널 출력 유틸리티
//!
//! `core::registry`가 리포지토리/서비스 싱글톤을 구성하는 동안
//! 진행 상황을 단계별 트리 형태로 출력하는 함수들입니다.
//! 구조화 로깅(`log`)과 별개로, 서버 기동 시 한 번만 사용됩니다.

/// 박스 내부 콘텐츠 너비 (고정)
const BOX_WIDTH: usize = 50;

/// 박스 한 줄을 포맷합니다 (중앙 정렬)
fn boxed_line(text: &str) -> String {
    format!("║{:^width$}║", text, width = BOX_WIDTH - 1)
}

/// 박스로 둘러싼 제목 출력
///
/// 레지스트리 초기화의 시작과 끝을 구분하는 데 사용합니다.
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║           🔄 INITIALIZING SERVICE REGISTRY       ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    let border = "═".repeat(BOX_WIDTH);

    println!("╔{}╗", border);
    println!("{}", boxed_line(title));
    println!("╚{}╝", border);
}

/// 초기화 단계 시작 표시
///
/// ```text
/// → Step 1: Creating Repository instances
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 초기화 단계 완료 표시 (생성된 인스턴스 수 포함)
///
/// ```text
/// ✓ Step 1: Repository instances created (2 items)
/// ```
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

/// 단계 내부의 개별 컴포넌트 상태 표시
///
/// 리포지토리/서비스 하나가 생성될 때마다 트리 들여쓰기로 출력합니다.
///
/// ```text
///    ├─ user: ✓ Created
///    ├─ passwordreset: ✓ Created
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 레지스트리 초기화 완료 요약
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║           🎉 SERVICE REGISTRY INITIALIZED        ║
/// ╚══════════════════════════════════════════════════╝
///    📦 Repositories: 2
///    🔧 Services: 4
///    🚀 Total Components: 6
/// ```
pub fn print_final_summary(repos: usize, services: usize) {
    let total = repos + services;
    println!();
    print_boxed_title("🎉 SERVICE REGISTRY INITIALIZED");
    println!("   📦 Repositories: {}", repos);
    println!("   🔧 Services: {}", services);
    println!("   🚀 Total Components: {}", total);
    println!();
}

/// 싱글톤 캐시 초기화 상태 표시
pub fn print_cache_initialized(cache_type: &str, count: usize) {
    println!("   ├─ {} Cache: {} entries loaded", cache_type, count);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed_line_is_centered_and_bounded() {
        let line = boxed_line("REGISTRY");

        assert!(line.starts_with('║'));
        assert!(line.ends_with('║'));
        assert_eq!(line.chars().count(), BOX_WIDTH + 1);
        assert!(line.contains("REGISTRY"));
    }

    #[test]
    fn test_boxed_line_empty_title() {
        let line = boxed_line("");
        assert_eq!(line.chars().count(), BOX_WIDTH + 1);
    }
}

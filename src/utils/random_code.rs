//! 일회용 숫자 코드 생성 유틸리티
//!
//! 비밀번호 재설정 흐름에서 이메일로 발송되는 6자리 코드를 생성합니다.

use rand::Rng;

use crate::config::ResetCodeConfig;

/// 6자리 숫자 코드 생성
///
/// 앞자리 0을 포함할 수 있도록 제로패딩합니다 (예: "042317").
///
/// # Examples
///
/// ```rust,ignore
/// let code = generate_numeric_code();
/// assert_eq!(code.len(), 6);
/// ```
pub fn generate_numeric_code() -> String {
    let max = 10u32.pow(ResetCodeConfig::CODE_LENGTH as u32);
    let value = rand::thread_rng().gen_range(0..max);

    format!("{:0width$}", value, width = ResetCodeConfig::CODE_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_length() {
        for _ in 0..100 {
            assert_eq!(generate_numeric_code().len(), 6);
        }
    }

    #[test]
    fn test_code_is_numeric() {
        for _ in 0..100 {
            let code = generate_numeric_code();
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }
}

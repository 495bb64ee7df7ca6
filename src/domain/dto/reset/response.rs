use serde::Serialize;

/// 비밀번호 재설정 흐름의 단순 메시지 응답
///
/// 코드 발송/재설정 완료 모두 본문에 결과 메시지만 담아 돌려줍니다.
#[derive(Debug, Serialize)]
pub struct ResetMessageResponse {
    pub message: String,
}

impl ResetMessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_serialization() {
        let res = ResetMessageResponse::new("Password reset code sent to your email");
        let json = serde_json::to_string(&res).unwrap();
        assert!(json.contains("Password reset code sent"));
    }
}

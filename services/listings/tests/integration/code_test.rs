use doorcode_listings::domain::types::{CODE_TOKEN_LEN, RedemptionState};
use doorcode_listings::error::ListingsServiceError;
use doorcode_listings::usecase::code::{
    CheckCodeUseCase, IssueCodeInput, IssueCodeUseCase, ListCodesUseCase,
};

use crate::helpers::{MockCodeRepo, demo_code, test_code, used_code};

#[tokio::test]
async fn should_issue_code_with_url_safe_token() {
    let mock_repo = MockCodeRepo::empty();
    let codes_handle = mock_repo.codes_handle();

    let uc = IssueCodeUseCase { codes: mock_repo };

    let code = uc.execute(IssueCodeInput { demo: false }).await.unwrap();

    assert_eq!(code.code.len(), CODE_TOKEN_LEN);
    assert!(
        code.code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
        "token should be URL-safe, got {:?}",
        code.code
    );
    assert!(!code.used, "new code should start unused");
    assert!(!code.is_demo);

    // Verify the code was actually persisted through the repo.
    let codes = codes_handle.lock().unwrap();
    assert_eq!(codes.len(), 1, "expected exactly one code to be created");
    assert_eq!(codes[0].code, code.code);
}

#[tokio::test]
async fn should_issue_demo_code_when_requested() {
    let uc = IssueCodeUseCase {
        codes: MockCodeRepo::empty(),
    };

    let code = uc.execute(IssueCodeInput { demo: true }).await.unwrap();

    assert!(code.is_demo);
    assert!(!code.used);
}

#[tokio::test]
async fn should_give_up_after_repeated_token_collisions() {
    let mock_repo = MockCodeRepo::colliding();
    let codes_handle = mock_repo.codes_handle();

    let uc = IssueCodeUseCase { codes: mock_repo };

    let result = uc.execute(IssueCodeInput { demo: false }).await;

    assert!(
        matches!(result, Err(ListingsServiceError::DuplicateCode)),
        "expected DuplicateCode, got {result:?}"
    );
    assert!(
        codes_handle.lock().unwrap().is_empty(),
        "no code should be persisted when every attempt collides"
    );
}

#[tokio::test]
async fn should_report_open_for_fresh_code() {
    let uc = CheckCodeUseCase {
        codes: MockCodeRepo::new(vec![test_code("ab12cd34")]),
    };

    let state = uc.execute("ab12cd34").await.unwrap();

    assert_eq!(state, RedemptionState::Open);
}

#[tokio::test]
async fn should_report_already_used_for_consumed_code() {
    let uc = CheckCodeUseCase {
        codes: MockCodeRepo::new(vec![used_code("ab12cd34")]),
    };

    let state = uc.execute("ab12cd34").await.unwrap();

    assert_eq!(state, RedemptionState::AlreadyUsed);
}

#[tokio::test]
async fn should_report_not_found_for_unknown_code() {
    let uc = CheckCodeUseCase {
        codes: MockCodeRepo::new(vec![test_code("ab12cd34")]),
    };

    let state = uc.execute("doesnotexist").await.unwrap();

    assert_eq!(state, RedemptionState::NotFound);
}

#[tokio::test]
async fn should_report_open_for_used_demo_code() {
    let mut code = demo_code("demo0001");
    code.used = true;

    let uc = CheckCodeUseCase {
        codes: MockCodeRepo::new(vec![code]),
    };

    let state = uc.execute("demo0001").await.unwrap();

    assert_eq!(state, RedemptionState::Open, "demo codes never lock");
}

#[tokio::test]
async fn should_list_codes_newest_first() {
    let mut old = test_code("old-code");
    old.created_at = chrono::Utc::now() - chrono::Duration::minutes(5);
    let fresh = test_code("fresh-code");

    let uc = ListCodesUseCase {
        codes: MockCodeRepo::new(vec![old, fresh]),
    };

    let codes = uc.execute().await.unwrap();

    assert_eq!(codes.len(), 2);
    assert_eq!(codes[0].code, "fresh-code");
    assert_eq!(codes[1].code, "old-code");
}

use std::sync::Arc;

use drill_core::grading::AFFIRMATION;
use drill_core::model::{BankId, WordBank, WordPair};
use drill_core::time::fixed_now;
use services::{BankService, Clock, SessionRegistry};
use storage::repository::{BankRepository, InMemoryBankRepository};

async fn body_registry() -> SessionRegistry {
    let repo = InMemoryBankRepository::new();
    let bank = WordBank::new(vec![
        WordPair::new("skin", "die Haut"),
        WordPair::new("hand", "die Hand"),
    ])
    .unwrap();
    repo.upsert_bank(BankId::new(1), bank).await.unwrap();

    SessionRegistry::new(Clock::fixed(fixed_now()), BankService::new(Arc::new(repo)))
}

#[tokio::test]
async fn drill_runs_until_the_bank_is_exhausted() {
    let registry = body_registry().await;

    let start = registry.create_session(None).await.unwrap();
    assert_eq!(start.prompt.prompt(), "skin");

    let first = registry.submit(start.session_id, "die Haut").unwrap();
    assert!(first.result.correct);
    assert_eq!(first.result.hint, AFFIRMATION);
    assert_eq!(
        first.result.next_prompt.as_ref().map(WordPair::prompt),
        Some("hand")
    );
    assert!(!first.progress.is_complete);

    let second = registry.submit(start.session_id, "die hand").unwrap();
    assert!(!second.result.correct);
    assert_eq!(second.result.hint, "die Hand");
    assert_eq!(second.result.next_prompt, None);
    assert!(second.progress.is_complete);

    let third = registry.submit(start.session_id, "die Hand").unwrap_err();
    assert!(third.is_finished());

    let snapshot = registry.snapshot(start.session_id).unwrap();
    let summary = snapshot.summary.expect("finished drill has a summary");
    assert_eq!(summary.total(), 2);
    assert_eq!(summary.correct(), 1);
    assert_eq!(summary.incorrect(), 1);
}

#[tokio::test]
async fn concurrent_sessions_share_the_bank_safely() {
    let registry = body_registry().await;
    let mut handles = Vec::new();

    for _ in 0..8 {
        let registry = registry.clone();
        handles.push(tokio::spawn(async move {
            let start = registry.create_session(None).await.unwrap();
            let mut correct = 0;
            for answer in ["die Haut", "die Hand"] {
                if registry.submit(start.session_id, answer).unwrap().result.correct {
                    correct += 1;
                }
            }
            correct
        }));
    }

    for handle in handles {
        assert_eq!(handle.await.unwrap(), 2);
    }
    assert_eq!(registry.session_count().unwrap(), 8);
}

use std::sync::Arc;
use std::time::Duration;

use crate::mcp::transport::{TransportKind, reclaim};

#[tokio::test]
async fn test_reclaim_unshared_is_immediate() {
    let shared = Arc::new(String::from("client"));
    assert_eq!(
        reclaim(shared, Duration::ZERO).await.as_deref(),
        Some("client")
    );
}

#[tokio::test]
async fn test_reclaim_waits_for_late_holder() {
    let shared = Arc::new(5_u32);
    let holder = Arc::clone(&shared);
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        drop(holder);
    });

    assert_eq!(reclaim(shared, Duration::from_secs(5)).await, Some(5));
}

#[tokio::test]
async fn test_reclaim_gives_up_after_grace() {
    let shared = Arc::new(5_u32);
    let _holder = Arc::clone(&shared);

    assert_eq!(reclaim(shared, Duration::from_millis(60)).await, None);
}

#[test]
fn test_stdio_is_default_transport() {
    assert_eq!(TransportKind::default(), TransportKind::Stdio);
}

use chrono::{Duration, Utc};
use delivery_tracker::clients::DeliveryClient;
use delivery_tracker::config::ListenerConfig;
use delivery_tracker::framework::{mock::MockClient, FrameworkError};
use delivery_tracker::listener::{queue, QueueListener};
use delivery_tracker::model::{Delivery, DeliveryMethod, DeliveryStatus};
use delivery_tracker::runtime::DeliverySystem;

/// Full ingestion path: one published order event becomes exactly one
/// delivery record, and the message is acknowledged.
#[tokio::test]
async fn order_event_creates_one_delivery_and_is_acked() {
    let system = DeliverySystem::new(ListenerConfig::default());

    let body = br#"[[{"order_data": {"id": 42, "delivery_provider": "FedEx",
        "status": "on_hold", "address": "221B Baker St", "delivery_method": "express"}}]]"#;
    let receipt = system.publisher.publish(body.as_slice()).await.unwrap();

    // The ack arrives only after the processing attempt finished, so the
    // record is visible once the receipt resolves.
    assert!(receipt.acknowledged().await);

    let deliveries = system.delivery_client.list_by_order(42).await.unwrap();
    assert_eq!(deliveries.len(), 1);

    let delivery = &deliveries[0];
    assert_eq!(delivery.order_id, 42);
    assert_eq!(delivery.delivery_provider, "FedEx");
    assert_eq!(delivery.status, DeliveryStatus::OnHold);
    assert_eq!(delivery.current_location.as_deref(), Some("221B Baker St"));
    assert_eq!(delivery.delivery_method, DeliveryMethod::Express);
    assert_eq!(
        delivery.estimated_delivery_time,
        delivery.created_at + Duration::days(2)
    );
    assert!(Utc::now() - delivery.created_at < Duration::seconds(5));

    system.shutdown().await.unwrap();
}

/// A malformed body creates nothing but is still acknowledged, so the queue
/// never blocks on a poison message.
#[tokio::test]
async fn malformed_payload_is_dropped_and_acked() {
    let system = DeliverySystem::new(ListenerConfig::default());

    let receipt = system
        .publisher
        .publish(b"not json at all".as_slice())
        .await
        .unwrap();
    assert!(receipt.acknowledged().await);

    assert!(system.delivery_client.list_by_order(42).await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

/// The later producer schema labels the carrier `payment_method`; both
/// schema versions are ingested.
#[tokio::test]
async fn payment_method_schema_variant_is_ingested() {
    let system = DeliverySystem::new(ListenerConfig::default());

    let body = br#"[[{"order_data": {"id": 11, "payment_method": "UPS",
        "status": "ready", "address": "Pier 4", "delivery_method": "overnight"}}]]"#;
    let receipt = system.publisher.publish(body.as_slice()).await.unwrap();
    assert!(receipt.acknowledged().await);

    let deliveries = system.delivery_client.list_by_order(11).await.unwrap();
    assert_eq!(deliveries.len(), 1);
    assert_eq!(deliveries[0].delivery_provider, "UPS");
    assert_eq!(deliveries[0].status, DeliveryStatus::Ready);

    system.shutdown().await.unwrap();
}

/// An event carrying a method this service does not know still ships, with
/// the standard offset.
#[tokio::test]
async fn unknown_method_in_event_gets_standard_treatment() {
    let system = DeliverySystem::new(ListenerConfig::default());

    let body = br#"[[{"order_data": {"id": 13, "delivery_provider": "DHL",
        "delivery_method": "teleport"}}]]"#;
    let receipt = system.publisher.publish(body.as_slice()).await.unwrap();
    assert!(receipt.acknowledged().await);

    let deliveries = system.delivery_client.list_by_order(13).await.unwrap();
    assert_eq!(deliveries.len(), 1);
    assert_eq!(deliveries[0].delivery_method, DeliveryMethod::Standard);
    assert_eq!(
        deliveries[0].estimated_delivery_time,
        deliveries[0].created_at + Duration::days(5)
    );

    system.shutdown().await.unwrap();
}

/// An unknown status names no lifecycle state; the event is rejected (and
/// still acknowledged) rather than persisting a value outside the enum.
#[tokio::test]
async fn unknown_status_in_event_is_rejected() {
    let system = DeliverySystem::new(ListenerConfig::default());

    let body = br#"[[{"order_data": {"id": 21, "delivery_provider": "DHL",
        "status": "vanished"}}]]"#;
    let receipt = system.publisher.publish(body.as_slice()).await.unwrap();
    assert!(receipt.acknowledged().await);

    assert!(system.delivery_client.list_by_order(21).await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

/// Messages are processed strictly one at a time in publish order.
#[tokio::test]
async fn events_are_processed_sequentially() {
    let system = DeliverySystem::new(ListenerConfig::default());

    for provider in ["A", "B", "C"] {
        let body = format!(
            r#"[[{{"order_data": {{"id": 30, "delivery_provider": "{}"}}}}]]"#,
            provider
        );
        let receipt = system.publisher.publish(body.into_bytes()).await.unwrap();
        assert!(receipt.acknowledged().await);
    }

    let deliveries = system.delivery_client.list_by_order(30).await.unwrap();
    assert_eq!(deliveries.len(), 3);

    system.shutdown().await.unwrap();
}

/// A store write failure is logged and the message acknowledged anyway.
/// The mock stands in for an actor whose channel has closed.
#[tokio::test]
async fn persist_failure_is_still_acked() {
    let mut mock = MockClient::<Delivery>::new();
    mock.expect_create().return_err(FrameworkError::ActorClosed);

    let (publisher, consumer) = queue(8);
    let listener = QueueListener::new(
        consumer,
        DeliveryClient::new(mock.client()),
        ListenerConfig::default(),
    );
    let handle = tokio::spawn(listener.run());

    let body = br#"[[{"order_data": {"id": 5, "delivery_provider": "GLS"}}]]"#;
    let receipt = publisher.publish(body.as_slice()).await.unwrap();
    assert!(receipt.acknowledged().await);

    mock.verify();

    drop(publisher);
    handle.await.unwrap();
}

/// Dropping the publisher ends the listener; shutdown joins every task.
#[tokio::test]
async fn system_shuts_down_cleanly() {
    let system = DeliverySystem::new(ListenerConfig::default());
    system.shutdown().await.unwrap();
}

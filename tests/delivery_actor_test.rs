use chrono::Duration;
use delivery_tracker::delivery_actor::{self, DeliveryError};
use delivery_tracker::model::{DeliveryCreate, DeliveryId, DeliveryMethod, DeliveryStatus, DeliveryUpdate};

fn create_params(order_id: i64, method: Option<DeliveryMethod>) -> DeliveryCreate {
    DeliveryCreate {
        order_id,
        delivery_provider: "FedEx".to_string(),
        status: None,
        current_location: None,
        delivery_method: method,
    }
}

/// Each delivery method fixes the estimate at creation time plus its offset.
#[tokio::test]
async fn estimated_time_follows_the_method_offset_table() {
    let (actor, client) = delivery_actor::new();
    let handle = tokio::spawn(actor.run());

    let cases = [
        (DeliveryMethod::Standard, Duration::days(5)),
        (DeliveryMethod::Express, Duration::days(2)),
        (DeliveryMethod::Overnight, Duration::days(1)),
    ];
    for (method, offset) in cases {
        let delivery = client
            .create_delivery(create_params(1, Some(method)))
            .await
            .unwrap();
        assert_eq!(delivery.delivery_method, method);
        assert_eq!(delivery.estimated_delivery_time, delivery.created_at + offset);
    }

    drop(client);
    handle.await.unwrap();
}

/// Omitting the method gives the standard treatment, not an error.
#[tokio::test]
async fn missing_method_defaults_to_standard() {
    let (actor, client) = delivery_actor::new();
    let handle = tokio::spawn(actor.run());

    let delivery = client.create_delivery(create_params(1, None)).await.unwrap();
    assert_eq!(delivery.delivery_method, DeliveryMethod::Standard);
    assert_eq!(
        delivery.estimated_delivery_time,
        delivery.created_at + Duration::days(5)
    );
    assert_eq!(delivery.status, DeliveryStatus::OnHold);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn create_rejects_invalid_params() {
    let (actor, client) = delivery_actor::new();
    let handle = tokio::spawn(actor.run());

    let bad_order = client.create_delivery(create_params(0, None)).await;
    assert!(matches!(bad_order, Err(DeliveryError::Validation(_))));

    let mut no_provider = create_params(1, None);
    no_provider.delivery_provider = "  ".to_string();
    let result = client.create_delivery(no_provider).await;
    assert!(matches!(result, Err(DeliveryError::Validation(_))));

    // Nothing was stored by the failed attempts.
    assert!(client.list_by_order(0).await.unwrap().is_empty());
    assert!(client.list_by_order(1).await.unwrap().is_empty());

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn get_unknown_id_is_not_found() {
    let (actor, client) = delivery_actor::new();
    let handle = tokio::spawn(actor.run());

    let result = client
        .get_delivery(DeliveryId("delivery_999".to_string()))
        .await;
    assert_eq!(
        result,
        Err(DeliveryError::NotFound("delivery_999".to_string()))
    );

    drop(client);
    handle.await.unwrap();
}

/// Listing returns exactly the records for that order; other orders' records
/// never leak in, and an order with none yields an empty vector.
#[tokio::test]
async fn list_by_order_returns_exactly_the_matching_records() {
    let (actor, client) = delivery_actor::new();
    let handle = tokio::spawn(actor.run());

    let first = client.create_delivery(create_params(7, None)).await.unwrap();
    let second = client.create_delivery(create_params(7, None)).await.unwrap();
    let other = client.create_delivery(create_params(8, None)).await.unwrap();

    let for_seven = client.list_by_order(7).await.unwrap();
    assert_eq!(for_seven.len(), 2);
    assert!(for_seven.iter().all(|d| d.order_id == 7));
    let ids: Vec<_> = for_seven.iter().map(|d| d.id.clone()).collect();
    assert!(ids.contains(&first.id));
    assert!(ids.contains(&second.id));
    assert!(!ids.contains(&other.id));

    assert!(client.list_by_order(99).await.unwrap().is_empty());

    drop(client);
    handle.await.unwrap();
}

/// A status update touches status and `updated_at` only.
#[tokio::test]
async fn update_changes_only_status_and_updated_at() {
    let (actor, client) = delivery_actor::new();
    let handle = tokio::spawn(actor.run());

    let mut params = create_params(7, Some(DeliveryMethod::Express));
    params.current_location = Some("Depot 3".to_string());
    let created = client.create_delivery(params).await.unwrap();

    let updated = client
        .update_delivery(
            created.id.clone(),
            DeliveryUpdate {
                status: Some(DeliveryStatus::Delivered),
                current_location: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.status, DeliveryStatus::Delivered);
    assert!(updated.updated_at >= created.updated_at);

    // Everything else is untouched, the locked-in estimate included.
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.order_id, created.order_id);
    assert_eq!(updated.delivery_provider, created.delivery_provider);
    assert_eq!(updated.current_location, created.current_location);
    assert_eq!(updated.delivery_method, created.delivery_method);
    assert_eq!(updated.estimated_delivery_time, created.estimated_delivery_time);
    assert_eq!(updated.created_at, created.created_at);

    // The stored record matches what the update returned.
    let fetched = client.get_delivery(created.id.clone()).await.unwrap();
    assert_eq!(fetched, updated);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let (actor, client) = delivery_actor::new();
    let handle = tokio::spawn(actor.run());

    let result = client
        .update_delivery(
            DeliveryId("delivery_404".to_string()),
            DeliveryUpdate {
                status: Some(DeliveryStatus::Cancelled),
                current_location: None,
            },
        )
        .await;
    assert_eq!(
        result,
        Err(DeliveryError::NotFound("delivery_404".to_string()))
    );

    drop(client);
    handle.await.unwrap();
}

/// Location updates work independently of status updates.
#[tokio::test]
async fn location_update_leaves_status_alone() {
    let (actor, client) = delivery_actor::new();
    let handle = tokio::spawn(actor.run());

    let created = client.create_delivery(create_params(5, None)).await.unwrap();
    let updated = client
        .update_delivery(
            created.id.clone(),
            DeliveryUpdate {
                status: None,
                current_location: Some("221B Baker St".to_string()),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.status, created.status);
    assert_eq!(updated.current_location.as_deref(), Some("221B Baker St"));

    drop(client);
    handle.await.unwrap();
}

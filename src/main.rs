//! Demo entry point: starts the delivery system, feeds it one order event
//! through the queue, and drives the lifecycle operations directly through
//! the client.

use delivery_tracker::config::ListenerConfig;
use delivery_tracker::model::{DeliveryCreate, DeliveryStatus, DeliveryUpdate};
use delivery_tracker::runtime::{setup_tracing, DeliverySystem};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting delivery tracker");
    let system = DeliverySystem::new(ListenerConfig::from_env());

    // Ingest one order event the way the order service would publish it.
    let event = br#"[[{"order_data": {"id": 42, "delivery_provider": "FedEx",
        "status": "on_hold", "address": "221B Baker St", "delivery_method": "express"}}]]"#;
    let receipt = system
        .publisher
        .publish(event.as_slice())
        .await
        .map_err(|e| e.to_string())?;
    if !receipt.acknowledged().await {
        error!("Order event was not acknowledged");
        return Err("order event was not acknowledged".to_string());
    }

    let ingested = system
        .delivery_client
        .list_by_order(42)
        .await
        .map_err(|e| e.to_string())?;
    info!(count = ingested.len(), "Deliveries ingested for order 42");

    // Direct lifecycle usage, as the HTTP layer would drive it.
    let created = system
        .delivery_client
        .create_delivery(DeliveryCreate {
            order_id: 7,
            delivery_provider: "DHL".to_string(),
            status: None,
            current_location: Some("Warehouse 12".to_string()),
            delivery_method: None,
        })
        .await
        .map_err(|e| e.to_string())?;
    info!(
        delivery_id = %created.id,
        estimated = %created.estimated_delivery_time,
        "Delivery created"
    );

    let fetched = system
        .delivery_client
        .get_delivery(created.id.clone())
        .await
        .map_err(|e| e.to_string())?;
    info!(delivery_id = %fetched.id, status = %fetched.status, "Delivery fetched");

    let updated = system
        .delivery_client
        .update_delivery(
            created.id,
            DeliveryUpdate {
                status: Some(DeliveryStatus::OnTheWay),
                current_location: Some("Sorting hub".to_string()),
            },
        )
        .await
        .map_err(|e| e.to_string())?;
    info!(delivery_id = %updated.id, status = %updated.status, "Delivery updated");

    system.shutdown().await?;

    info!("Done");
    Ok(())
}

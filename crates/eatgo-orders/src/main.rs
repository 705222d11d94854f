//! # EatGo order engine demo
//!
//! Seeds one restaurant with a menu, a client and a courier, then walks an order
//! from `PLACED` to `DELIVERED` and leaves a review.
//!
//! Configuration comes from the environment (see [`eatgo_orders::config`]);
//! log verbosity from `RUST_LOG`.

use actor_framework::tracing::setup_tracing;
use anyhow::Context;
use eatgo_orders::auth::Principal;
use eatgo_orders::config::EngineConfig;
use eatgo_orders::lifecycle::OrderingSystem;
use eatgo_orders::model::{
    AddressCreate, DishCreate, OrderItemRequest, OrderStatus, RestaurantCreate, ReviewTargetKind,
    UserCreate,
};
use eatgo_orders::money::Money;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = EngineConfig::from_env().context("invalid engine configuration")?;
    setup_tracing();

    info!(?config, "Starting EatGo order engine");
    let system = OrderingSystem::new(&config);

    // Directory data
    let client_id = system
        .users
        .create_user(UserCreate::client("jan@example.com", "Jan Kowalski"))
        .await?;
    let admin_id = system
        .users
        .create_user(UserCreate::restaurant_admin("ola@example.com", "Ola Nowak"))
        .await?;
    let restaurant_id = system
        .restaurants
        .create_restaurant(RestaurantCreate {
            name: "Babcia's Kitchen".to_string(),
            address: "Floriańska 3, Kraków".to_string(),
            delivery_price: Money::from_units(5),
            admin_id,
        })
        .await?;
    let pierogi = system
        .menu
        .create_dish(DishCreate {
            restaurant_id,
            name: "Pierogi".to_string(),
            description: "Potato and cheese".to_string(),
            price: Money::from_units(20),
            available: true,
        })
        .await?;
    let borscht = system
        .menu
        .create_dish(DishCreate {
            restaurant_id,
            name: "Borscht".to_string(),
            description: "With uszka".to_string(),
            price: Money::from_units(25),
            available: true,
        })
        .await?;
    let courier_id = system
        .users
        .create_user(UserCreate::courier("piotr@example.com", "Piotr Zieliński", restaurant_id))
        .await?;
    let address_id = system
        .addresses
        .create_address(AddressCreate {
            owner_id: client_id,
            city: "Kraków".to_string(),
            street: "Długa 12".to_string(),
            postal_code: "31-147".to_string(),
            apartment: Some("4".to_string()),
        })
        .await?;

    let client = Principal::user(client_id);
    let admin = Principal::user(admin_id);
    let courier = Principal::user(courier_id);
    let service = &system.service;

    let span = tracing::info_span!("order_lifecycle");
    let order_id = async {
        let order = service
            .create_order(
                &client,
                restaurant_id,
                address_id,
                vec![
                    OrderItemRequest::new(pierogi, 2),
                    OrderItemRequest::new(borscht, 1),
                ],
            )
            .await?;
        info!(order_id = %order.id, total = %order.total_price, "Order placed");

        for target in [OrderStatus::Accepted, OrderStatus::Cooking, OrderStatus::Ready] {
            service.restaurant_update_status(&admin, order.id, target).await?;
        }
        service
            .restaurant_assign_courier(&admin, order.id, courier_id)
            .await?;
        service
            .courier_update_status(&courier, order.id, OrderStatus::Delivered)
            .await?;
        anyhow::Ok(order.id)
    }
    .instrument(span)
    .await?;

    let review_id = service
        .add_review(
            &client,
            order_id,
            ReviewTargetKind::Restaurant,
            5,
            Some("Best pierogi in town".to_string()),
        )
        .await?;
    info!(%review_id, "Review added");

    for notification in service.list_notifications(&client).await?.iter().rev() {
        println!("{}", notification.message);
    }

    system.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}

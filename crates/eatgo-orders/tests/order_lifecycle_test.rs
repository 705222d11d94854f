mod common;

use common::Fixture;
use eatgo_orders::config::EngineConfig;
use eatgo_orders::model::{DishUpdate, OrderId, OrderStatus, RestaurantUpdate};
use eatgo_orders::money::Money;
use eatgo_orders::order_actor::OrderError;
use eatgo_orders::{ErrorKind, ServiceError};

async fn status_of(fx: &Fixture, order_id: OrderId) -> OrderStatus {
    fx.service()
        .get_order_details(&fx.client, order_id)
        .await
        .expect("Failed to load order")
        .status
}

/// Two pierogi at 20.00, one borscht at 25.00, delivery 5.00.
#[tokio::test]
async fn test_order_is_priced_from_menu_snapshot() {
    let fx = Fixture::new().await;

    let details = fx
        .service()
        .create_order(&fx.client, fx.restaurant_id, fx.address_id, fx.standard_items())
        .await
        .expect("Failed to place order");

    assert_eq!(details.status, OrderStatus::Placed);
    assert_eq!(details.items_total, Money::from_units(65));
    assert_eq!(details.delivery_price, Money::from_units(5));
    assert_eq!(details.total_price, Money::from_units(70));
    assert_eq!(details.items[0].name, "Pierogi");
    assert_eq!(details.items[0].line_total, Money::from_units(40));
    assert!(details.courier_id.is_none());

    // Later menu and delivery price changes do not reach the placed order.
    fx.system
        .menu
        .update_dish(
            fx.pierogi,
            DishUpdate {
                price: Some(Money::from_units(99)),
                ..Default::default()
            },
        )
        .await
        .expect("Failed to update dish");
    fx.system
        .restaurants
        .update_restaurant(
            fx.restaurant_id,
            RestaurantUpdate {
                delivery_price: Some(Money::from_units(12)),
                ..Default::default()
            },
        )
        .await
        .expect("Failed to update restaurant");

    let reloaded = fx
        .service()
        .get_order_details(&fx.client, details.id)
        .await
        .expect("Failed to load order");
    assert_eq!(reloaded.items[0].unit_price, Money::from_units(20));
    assert_eq!(reloaded.delivery_price, Money::from_units(5));
    assert_eq!(reloaded.total_price, Money::from_units(70));
}

#[tokio::test]
async fn test_full_lifecycle_notifies_owner_once_per_transition() {
    let fx = Fixture::new().await;
    let order_id = fx.place_order().await;

    fx.advance_to(order_id, OrderStatus::Delivered).await;
    assert_eq!(status_of(&fx, order_id).await, OrderStatus::Delivered);

    let feed = fx
        .service()
        .list_notifications(&fx.client)
        .await
        .expect("Failed to list notifications");
    assert_eq!(feed.len(), 5);

    // The feed is newest first.
    let observed: Vec<_> = feed
        .iter()
        .rev()
        .map(|n| (n.previous_status, n.new_status))
        .collect();
    assert_eq!(
        observed,
        vec![
            (OrderStatus::Placed, OrderStatus::Accepted),
            (OrderStatus::Accepted, OrderStatus::Cooking),
            (OrderStatus::Cooking, OrderStatus::Ready),
            (OrderStatus::Ready, OrderStatus::InDelivery),
            (OrderStatus::InDelivery, OrderStatus::Delivered),
        ]
    );
    assert!(feed.iter().all(|n| n.order_id == order_id && n.user_id == fx.client_id));
    assert_eq!(
        feed[3].message,
        format!("Order #{}: status changed from Accepted to In preparation", order_id.0)
    );

    // Only the owner is notified.
    let admin_feed = fx.service().list_notifications(&fx.admin).await.unwrap();
    let courier_feed = fx.service().list_notifications(&fx.courier).await.unwrap();
    assert!(admin_feed.is_empty());
    assert!(courier_feed.is_empty());
}

#[tokio::test]
async fn test_restaurant_cannot_skip_delivery() {
    let fx = Fixture::new().await;
    let order_id = fx.place_order().await;
    fx.advance_to(order_id, OrderStatus::Ready).await;

    let err = fx
        .service()
        .restaurant_update_status(&fx.admin, order_id, OrderStatus::Delivered)
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ServiceError::Order(OrderError::InvalidTransition {
            from: OrderStatus::Ready,
            to: OrderStatus::Delivered,
        })
    );
    assert_eq!(err.status_code(), 409);
    assert_eq!(status_of(&fx, order_id).await, OrderStatus::Ready);

    // A rejected move is not announced.
    let feed = fx.service().list_notifications(&fx.client).await.unwrap();
    assert_eq!(feed.len(), 3);
}

#[tokio::test]
async fn test_courier_cannot_cancel_in_delivery() {
    let fx = Fixture::new().await;
    let order_id = fx.place_order().await;
    fx.advance_to(order_id, OrderStatus::InDelivery).await;

    let err = fx
        .service()
        .courier_update_status(&fx.courier, order_id, OrderStatus::Cancelled)
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ServiceError::Order(OrderError::InvalidTransition {
            from: OrderStatus::InDelivery,
            to: OrderStatus::Cancelled,
        })
    );
    assert_eq!(status_of(&fx, order_id).await, OrderStatus::InDelivery);
}

#[tokio::test]
async fn test_restaurant_cannot_move_order_out_for_delivery_itself() {
    let fx = Fixture::new().await;
    let order_id = fx.place_order().await;
    fx.advance_to(order_id, OrderStatus::Ready).await;

    let err = fx
        .service()
        .restaurant_update_status(&fx.admin, order_id, OrderStatus::InDelivery)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidState);
    let details = fx.service().get_order_details(&fx.client, order_id).await.unwrap();
    assert_eq!(details.status, OrderStatus::Ready);
    assert!(details.courier_id.is_none());
}

#[tokio::test]
async fn test_assign_courier_requires_ready_order() {
    let fx = Fixture::new().await;
    let order_id = fx.place_order().await;
    fx.advance_to(order_id, OrderStatus::Accepted).await;

    let err = fx
        .service()
        .restaurant_assign_courier(&fx.admin, order_id, fx.courier_id)
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Order(OrderError::InvalidState(_))));
    let details = fx.service().get_order_details(&fx.client, order_id).await.unwrap();
    assert_eq!(details.status, OrderStatus::Accepted);
    assert!(details.courier_id.is_none());
}

#[tokio::test]
async fn test_assign_courier_rejects_courier_of_another_restaurant() {
    let fx = Fixture::new().await;
    let (_, other_restaurant, _) = fx.another_restaurant("luigi@example.com").await;
    let outsider = fx
        .system
        .users
        .create_user(eatgo_orders::model::UserCreate::courier(
            "marco@example.com",
            "Marco",
            other_restaurant,
        ))
        .await
        .unwrap();
    let order_id = fx.place_order().await;
    fx.advance_to(order_id, OrderStatus::Ready).await;

    let err = fx
        .service()
        .restaurant_assign_courier(&fx.admin, order_id, outsider)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    // A client is not a courier either.
    let err = fx
        .service()
        .restaurant_assign_courier(&fx.admin, order_id, fx.client_id)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let details = fx.service().get_order_details(&fx.client, order_id).await.unwrap();
    assert_eq!(details.status, OrderStatus::Ready);
    assert!(details.courier_id.is_none());
}

#[tokio::test]
async fn test_courier_present_exactly_while_delivering_or_delivered() {
    let fx = Fixture::new().await;
    let order_id = fx.place_order().await;

    for status in [
        OrderStatus::Accepted,
        OrderStatus::Cooking,
        OrderStatus::Ready,
        OrderStatus::InDelivery,
        OrderStatus::Delivered,
    ] {
        fx.advance_to_next(order_id, status).await;
        let details = fx.service().get_order_details(&fx.client, order_id).await.unwrap();
        assert_eq!(details.status, status);
        assert_eq!(
            details.courier_id.is_some(),
            status.has_courier(),
            "courier presence wrong at {status}"
        );
    }
    assert_eq!(
        fx.service()
            .get_order_details(&fx.client, order_id)
            .await
            .unwrap()
            .courier_id,
        Some(fx.courier_id)
    );
}

#[tokio::test]
async fn test_cancelled_order_never_has_courier() {
    let fx = Fixture::new().await;

    for stop in [OrderStatus::Placed, OrderStatus::Accepted, OrderStatus::Cooking, OrderStatus::Ready] {
        let order_id = fx.place_order().await;
        if stop != OrderStatus::Placed {
            fx.advance_to(order_id, stop).await;
        }
        let summary = fx
            .service()
            .restaurant_update_status(&fx.admin, order_id, OrderStatus::Cancelled)
            .await
            .unwrap_or_else(|e| panic!("cancel from {stop} failed: {e}"));
        assert_eq!(summary.status, OrderStatus::Cancelled);
        assert!(summary.courier_id.is_none());

        // Terminal: nothing moves it again.
        let err = fx
            .service()
            .restaurant_update_status(&fx.admin, order_id, OrderStatus::Accepted)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);
    }
}

#[tokio::test]
async fn test_racing_transitions_from_same_status_apply_once() {
    let fx = Fixture::new().await;
    let order_id = fx.place_order().await;

    let gate = fx.service().gate();
    let first = gate.resolve_admin(&fx.admin, order_id).await.unwrap();
    let second = gate.resolve_admin(&fx.admin, order_id).await.unwrap();
    assert_eq!(first.order().status, OrderStatus::Placed);

    let (accept, cancel) = tokio::join!(
        first.transition(OrderStatus::Accepted),
        second.transition(OrderStatus::Cancelled)
    );

    let winner = match (&accept, &cancel) {
        (Ok(order), Err(err)) | (Err(err), Ok(order)) => {
            assert!(matches!(
                err,
                ServiceError::Order(OrderError::StaleStatus {
                    expected: OrderStatus::Placed,
                    ..
                })
            ));
            assert_eq!(err.status_code(), 409);
            order.status
        }
        _ => panic!("exactly one transition must win: {accept:?} / {cancel:?}"),
    };

    assert_eq!(status_of(&fx, order_id).await, winner);
    let feed = fx.service().list_notifications(&fx.client).await.unwrap();
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].new_status, winner);
}

#[tokio::test]
async fn test_stale_capability_is_refused() {
    let fx = Fixture::new().await;
    let order_id = fx.place_order().await;

    let stale = fx.service().gate().resolve_admin(&fx.admin, order_id).await.unwrap();
    fx.advance_to(order_id, OrderStatus::Accepted).await;

    // ACCEPTED -> CANCELLED is legal, but not from a capability that saw PLACED.
    let err = stale.transition(OrderStatus::Cancelled).await.unwrap_err();
    assert_eq!(
        err,
        ServiceError::Order(OrderError::StaleStatus {
            expected: OrderStatus::Placed,
            actual: OrderStatus::Accepted,
        })
    );
    assert_eq!(status_of(&fx, order_id).await, OrderStatus::Accepted);
}

#[tokio::test]
async fn test_concurrent_orders_of_one_client_all_reach_feed() {
    let fx = Fixture::new().await;
    let mut ids = Vec::new();
    for _ in 0..6 {
        ids.push(fx.place_order().await);
    }

    let handles: Vec<_> = ids
        .iter()
        .map(|&order_id| {
            let service = fx.service().clone();
            let admin = fx.admin;
            tokio::spawn(async move {
                service
                    .restaurant_update_status(&admin, order_id, OrderStatus::Accepted)
                    .await
            })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().expect("Failed to accept order");
    }

    let feed = fx.service().list_notifications(&fx.client).await.unwrap();
    assert_eq!(feed.len(), ids.len());
    for id in &ids {
        assert!(feed.iter().any(|n| n.order_id == *id));
    }
    assert!(feed.windows(2).all(|w| (w[0].created_at, w[0].id) > (w[1].created_at, w[1].id)));
}

#[tokio::test]
async fn test_feed_keeps_only_most_recent_entries() {
    let fx = Fixture::with_config(EngineConfig {
        notification_retention: 3,
        ..EngineConfig::default()
    })
    .await;
    let order_id = fx.place_order().await;
    fx.advance_to(order_id, OrderStatus::Delivered).await;

    let feed = fx.service().list_notifications(&fx.client).await.unwrap();
    let statuses: Vec<_> = feed.iter().map(|n| n.new_status).collect();
    assert_eq!(
        statuses,
        vec![OrderStatus::Delivered, OrderStatus::InDelivery, OrderStatus::Ready]
    );
}

#[tokio::test]
async fn test_feed_read_state_and_clearing() {
    let fx = Fixture::new().await;
    let order_id = fx.place_order().await;
    fx.advance_to(order_id, OrderStatus::Cooking).await;

    let service = fx.service();
    assert_eq!(service.unread_notification_count(&fx.client).await.unwrap(), 2);

    service.mark_notifications_read(&fx.client).await.unwrap();
    assert_eq!(service.unread_notification_count(&fx.client).await.unwrap(), 0);
    assert_eq!(service.list_notifications(&fx.client).await.unwrap().len(), 2);

    fx.advance_to_next(order_id, OrderStatus::Ready).await;
    assert_eq!(service.unread_notification_count(&fx.client).await.unwrap(), 1);

    service.clear_notifications(&fx.client).await.unwrap();
    assert!(service.list_notifications(&fx.client).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_order_lists_per_role_newest_first() {
    let fx = Fixture::new().await;
    let first = fx.place_order().await;
    let second = fx.place_order().await;
    fx.advance_to(second, OrderStatus::InDelivery).await;

    let mine: Vec<_> = fx
        .service()
        .list_orders_for_user(&fx.client)
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(mine, vec![second, first]);

    let restaurant = fx.service().restaurant_list_orders(&fx.admin).await.unwrap();
    assert_eq!(restaurant.len(), 2);
    assert_eq!(restaurant[0].id, second);
    assert_eq!(restaurant[0].status_label, "On the way");

    let assigned = fx.service().courier_list_assigned(&fx.courier).await.unwrap();
    assert_eq!(assigned.len(), 1);
    assert_eq!(assigned[0].id, second);
}

#[tokio::test]
async fn test_restaurant_dashboard_figures() {
    let fx = Fixture::new().await;
    let delivered = fx.place_order().await;
    fx.advance_to(delivered, OrderStatus::Delivered).await;
    let cooking = fx.place_order().await;
    fx.advance_to(cooking, OrderStatus::Cooking).await;
    let cancelled = fx.place_order().await;
    fx.service()
        .restaurant_update_status(&fx.admin, cancelled, OrderStatus::Cancelled)
        .await
        .unwrap();

    let service = fx.service();
    assert_eq!(service.restaurant_active_orders_count(&fx.admin).await.unwrap(), 1);

    let since = chrono::Utc::now() - chrono::Duration::hours(1);
    assert_eq!(
        service.restaurant_revenue_since(&fx.admin, since).await.unwrap(),
        Money::from_units(70)
    );

    let top = service.restaurant_top_dishes(&fx.admin, 5).await.unwrap();
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].name, "Pierogi");
    assert_eq!(top[0].quantity, 2);
}

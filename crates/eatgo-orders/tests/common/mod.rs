//! Shared setup: one restaurant with a two-dish menu, its admin and courier, and
//! a client with one delivery address.
#![allow(dead_code)]

use eatgo_orders::auth::Principal;
use eatgo_orders::config::EngineConfig;
use eatgo_orders::lifecycle::OrderingSystem;
use eatgo_orders::model::{
    AddressCreate, AddressId, DishCreate, DishId, OrderId, OrderItemRequest, OrderStatus,
    RestaurantCreate, RestaurantId, UserCreate, UserId,
};
use eatgo_orders::money::Money;
use eatgo_orders::service::OrderingService;

pub struct Fixture {
    pub system: OrderingSystem,
    pub client_id: UserId,
    pub client: Principal,
    pub admin_id: UserId,
    pub admin: Principal,
    pub courier_id: UserId,
    pub courier: Principal,
    pub restaurant_id: RestaurantId,
    /// 20.00
    pub pierogi: DishId,
    /// 25.00
    pub borscht: DishId,
    pub address_id: AddressId,
}

impl Fixture {
    pub async fn new() -> Self {
        Self::with_config(EngineConfig::default()).await
    }

    pub async fn with_config(config: EngineConfig) -> Self {
        let system = OrderingSystem::new(&config);

        let client_id = system
            .users
            .create_user(UserCreate::client("jan@example.com", "Jan"))
            .await
            .expect("Failed to create client");
        let admin_id = system
            .users
            .create_user(UserCreate::restaurant_admin("ola@example.com", "Ola"))
            .await
            .expect("Failed to create admin");
        let restaurant_id = system
            .restaurants
            .create_restaurant(RestaurantCreate {
                name: "Babcia".to_string(),
                address: "Main St 1".to_string(),
                delivery_price: Money::from_units(5),
                admin_id,
            })
            .await
            .expect("Failed to create restaurant");
        let pierogi = add_dish(&system, restaurant_id, "Pierogi", 20, true).await;
        let borscht = add_dish(&system, restaurant_id, "Borscht", 25, true).await;
        let courier_id = system
            .users
            .create_user(UserCreate::courier("piotr@example.com", "Piotr", restaurant_id))
            .await
            .expect("Failed to create courier");
        let address_id = add_address(&system, client_id).await;

        Self {
            system,
            client_id,
            client: Principal::user(client_id),
            admin_id,
            admin: Principal::user(admin_id),
            courier_id,
            courier: Principal::user(courier_id),
            restaurant_id,
            pierogi,
            borscht,
            address_id,
        }
    }

    pub fn service(&self) -> &OrderingService {
        &self.system.service
    }

    /// Two pierogi and one borscht: 65.00 of food plus 5.00 delivery.
    pub fn standard_items(&self) -> Vec<OrderItemRequest> {
        vec![
            OrderItemRequest::new(self.pierogi, 2),
            OrderItemRequest::new(self.borscht, 1),
        ]
    }

    pub async fn place_order(&self) -> OrderId {
        self.service()
            .create_order(
                &self.client,
                self.restaurant_id,
                self.address_id,
                self.standard_items(),
            )
            .await
            .expect("Failed to place order")
            .id
    }

    /// Drives a `PLACED` order along the happy path until it reaches `target`.
    pub async fn advance_to(&self, order_id: OrderId, target: OrderStatus) {
        let path = [
            OrderStatus::Accepted,
            OrderStatus::Cooking,
            OrderStatus::Ready,
            OrderStatus::InDelivery,
            OrderStatus::Delivered,
        ];
        for step in path {
            self.advance_to_next(order_id, step).await;
            if step == target {
                return;
            }
        }
    }

    /// Applies the single happy-path move that leads to `status`.
    pub async fn advance_to_next(&self, order_id: OrderId, status: OrderStatus) {
        let service = self.service();
        match status {
            OrderStatus::InDelivery => service
                .restaurant_assign_courier(&self.admin, order_id, self.courier_id)
                .await
                .expect("Failed to assign courier"),
            OrderStatus::Delivered => service
                .courier_update_status(&self.courier, order_id, status)
                .await
                .expect("Failed to mark delivered"),
            _ => service
                .restaurant_update_status(&self.admin, order_id, status)
                .await
                .expect("Failed to advance order"),
        };
    }

    /// Registers another client with an address of their own.
    pub async fn another_client(&self, email: &str) -> (Principal, UserId, AddressId) {
        let id = self
            .system
            .users
            .create_user(UserCreate::client(email, "Other"))
            .await
            .expect("Failed to create client");
        let address = add_address(&self.system, id).await;
        (Principal::user(id), id, address)
    }

    /// Registers a second restaurant with its admin and a single dish.
    pub async fn another_restaurant(&self, admin_email: &str) -> (Principal, RestaurantId, DishId) {
        let admin_id = self
            .system
            .users
            .create_user(UserCreate::restaurant_admin(admin_email, "Other admin"))
            .await
            .expect("Failed to create admin");
        let restaurant_id = self
            .system
            .restaurants
            .create_restaurant(RestaurantCreate {
                name: "Trattoria".to_string(),
                address: "Side St 2".to_string(),
                delivery_price: Money::from_units(7),
                admin_id,
            })
            .await
            .expect("Failed to create restaurant");
        let dish = add_dish(&self.system, restaurant_id, "Lasagne", 30, true).await;
        (Principal::user(admin_id), restaurant_id, dish)
    }
}

pub async fn add_dish(
    system: &OrderingSystem,
    restaurant_id: RestaurantId,
    name: &str,
    price_units: u64,
    available: bool,
) -> DishId {
    system
        .menu
        .create_dish(DishCreate {
            restaurant_id,
            name: name.to_string(),
            description: String::new(),
            price: Money::from_units(price_units),
            available,
        })
        .await
        .expect("Failed to create dish")
}

async fn add_address(system: &OrderingSystem, owner_id: UserId) -> AddressId {
    system
        .addresses
        .create_address(AddressCreate {
            owner_id,
            city: "Kraków".to_string(),
            street: "Długa 12".to_string(),
            postal_code: "31-147".to_string(),
            apartment: None,
        })
        .await
        .expect("Failed to create address")
}

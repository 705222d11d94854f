use actor_framework::mock::MockClient;
use actor_framework::FrameworkError;
use eatgo_orders::auth::{AuthorizationGate, Principal};
use eatgo_orders::clients::{AddressBook, Directories, MenuDirectory, RestaurantDirectory, UserDirectory};
use eatgo_orders::model::{
    Address, AddressId, Dish, DishId, OrderCreate, OrderItemRequest, OrderStatus, Restaurant,
    RestaurantId, Role, User, UserId,
};
use eatgo_orders::money::Money;
use eatgo_orders::notifications::NotificationFeed;
use eatgo_orders::order_actor::{self, OrderContext, OrderError};
use std::sync::Arc;

const CLIENT: UserId = UserId(1);
const ADMIN: UserId = UserId(2);
const RESTAURANT: RestaurantId = RestaurantId(1);
const ADDRESS: AddressId = AddressId(1);
const SOUP: DishId = DishId(1);

struct Mocks {
    users: MockClient<User>,
    restaurants: MockClient<Restaurant>,
    menu: MockClient<Dish>,
    addresses: MockClient<Address>,
}

impl Mocks {
    fn new() -> Self {
        Self {
            users: MockClient::new(),
            restaurants: MockClient::new(),
            menu: MockClient::new(),
            addresses: MockClient::new(),
        }
    }

    fn directories(&self) -> Directories {
        Directories {
            users: UserDirectory::new(self.users.client()),
            restaurants: RestaurantDirectory::new(self.restaurants.client()),
            menu: MenuDirectory::new(self.menu.client()),
            addresses: AddressBook::new(self.addresses.client()),
        }
    }

    fn verify(&self) {
        self.users.verify();
        self.restaurants.verify();
        self.menu.verify();
        self.addresses.verify();
    }
}

fn user(id: UserId, role: Role) -> User {
    User {
        id,
        email: format!("user{}@example.com", id.0),
        full_name: "Test".to_string(),
        role,
        restaurant_id: None,
    }
}

fn restaurant() -> Restaurant {
    Restaurant {
        id: RESTAURANT,
        name: "Babcia".to_string(),
        address: "Main St 1".to_string(),
        delivery_price: Money::from_units(5),
        admin_id: ADMIN,
    }
}

fn address() -> Address {
    Address {
        id: ADDRESS,
        owner_id: CLIENT,
        city: "Kraków".to_string(),
        street: "Długa 12".to_string(),
        postal_code: "31-147".to_string(),
        apartment: None,
    }
}

fn soup(restaurant_id: RestaurantId) -> Dish {
    Dish {
        id: SOUP,
        restaurant_id,
        name: "Soup".to_string(),
        description: String::new(),
        price: Money::from_cents(1250),
        available: true,
    }
}

fn soup_order(quantity: u32) -> OrderCreate {
    OrderCreate {
        client_id: CLIENT,
        restaurant_id: RESTAURANT,
        address_id: ADDRESS,
        items: vec![OrderItemRequest::new(SOUP, quantity)],
    }
}

/// Real Order actor, scripted directories.
#[tokio::test]
async fn test_order_actor_with_mocked_directories() {
    let mut mocks = Mocks::new();

    // on_create: client, restaurant, address, then each dish
    mocks.users.expect_get(CLIENT).return_ok(Some(user(CLIENT, Role::Client)));
    mocks.restaurants.expect_get(RESTAURANT).return_ok(Some(restaurant()));
    mocks.addresses.expect_get(ADDRESS).return_ok(Some(address()));
    mocks.menu.expect_get(SOUP).return_ok(Some(soup(RESTAURANT)));

    let feed = Arc::new(NotificationFeed::new(50));
    let (order_actor, orders) = order_actor::new(10);
    let actor_handle = tokio::spawn(order_actor.run(OrderContext {
        directories: mocks.directories(),
        feed: feed.clone(),
    }));

    let order_id = orders
        .create_order(soup_order(2))
        .await
        .expect("Failed to create order");

    let order = orders.find_order(order_id).await.unwrap().expect("Order not found");
    assert_eq!(order.status, OrderStatus::Placed);
    assert_eq!(order.items[0].dish_name, "Soup");
    assert_eq!(order.total_price, Money::from_cents(3000));

    mocks.verify();
    drop(orders);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_dish_from_other_restaurant_stores_nothing() {
    let mut mocks = Mocks::new();
    mocks.users.expect_get(CLIENT).return_ok(Some(user(CLIENT, Role::Client)));
    mocks.restaurants.expect_get(RESTAURANT).return_ok(Some(restaurant()));
    mocks.addresses.expect_get(ADDRESS).return_ok(Some(address()));
    mocks.menu.expect_get(SOUP).return_ok(Some(soup(RestaurantId(2))));

    let (order_actor, orders) = order_actor::new(10);
    tokio::spawn(order_actor.run(OrderContext {
        directories: mocks.directories(),
        feed: Arc::new(NotificationFeed::new(50)),
    }));

    let err = orders.create_order(soup_order(1)).await.unwrap_err();
    assert!(matches!(err, OrderError::InvalidReference(_)));
    assert!(orders.list_for_client(CLIENT).await.unwrap().is_empty());
    mocks.verify();
}

#[tokio::test]
async fn test_zero_quantity_is_rejected_before_dish_lookup() {
    let mut mocks = Mocks::new();
    mocks.users.expect_get(CLIENT).return_ok(Some(user(CLIENT, Role::Client)));
    mocks.restaurants.expect_get(RESTAURANT).return_ok(Some(restaurant()));
    mocks.addresses.expect_get(ADDRESS).return_ok(Some(address()));

    let (order_actor, orders) = order_actor::new(10);
    tokio::spawn(order_actor.run(OrderContext {
        directories: mocks.directories(),
        feed: Arc::new(NotificationFeed::new(50)),
    }));

    let err = orders.create_order(soup_order(0)).await.unwrap_err();
    assert_eq!(
        err,
        OrderError::InvalidQuantity {
            dish_id: SOUP,
            quantity: 0
        }
    );
    mocks.verify();
}

#[tokio::test]
async fn test_directory_failure_surfaces_as_communication_error() {
    let mut mocks = Mocks::new();
    mocks.users.expect_get(CLIENT).return_err(FrameworkError::ActorClosed);

    let (order_actor, orders) = order_actor::new(10);
    tokio::spawn(order_actor.run(OrderContext {
        directories: mocks.directories(),
        feed: Arc::new(NotificationFeed::new(50)),
    }));

    let err = orders.create_order(soup_order(1)).await.unwrap_err();
    assert!(matches!(err, OrderError::ActorCommunicationError(_)));
    mocks.verify();
}

/// A failed owner lookup drops the notification, never the transition.
#[tokio::test]
async fn test_notification_is_best_effort() {
    let mut mocks = Mocks::new();

    // create
    mocks.users.expect_get(CLIENT).return_ok(Some(user(CLIENT, Role::Client)));
    mocks.restaurants.expect_get(RESTAURANT).return_ok(Some(restaurant()));
    mocks.addresses.expect_get(ADDRESS).return_ok(Some(address()));
    mocks.menu.expect_get(SOUP).return_ok(Some(soup(RESTAURANT)));
    // resolve_admin: role check, then resolve (authenticate + restaurant of record)
    mocks.users.expect_get(ADMIN).return_ok(Some(user(ADMIN, Role::RestaurantAdmin)));
    mocks.users.expect_get(ADMIN).return_ok(Some(user(ADMIN, Role::RestaurantAdmin)));
    mocks.restaurants.expect_get(RESTAURANT).return_ok(Some(restaurant()));
    // commit: owner lookup for the feed
    mocks.users.expect_get(CLIENT).return_err(FrameworkError::ActorClosed);

    let feed = Arc::new(NotificationFeed::new(50));
    let directories = mocks.directories();
    let (order_actor, orders) = order_actor::new(10);
    tokio::spawn(order_actor.run(OrderContext {
        directories: directories.clone(),
        feed: feed.clone(),
    }));
    let gate = AuthorizationGate::new(directories, orders.clone());

    let order_id = orders.create_order(soup_order(1)).await.unwrap();
    let admin = gate
        .resolve_admin(&Principal::user(ADMIN), order_id)
        .await
        .expect("Failed to resolve admin");
    let accepted = admin.transition(OrderStatus::Accepted).await.unwrap();

    assert_eq!(accepted.status, OrderStatus::Accepted);
    assert_eq!(
        orders.find_order(order_id).await.unwrap().unwrap().status,
        OrderStatus::Accepted
    );
    assert!(feed.list_for_user(CLIENT).is_empty());
    mocks.verify();
}

use crate::clients::{AddressBook, Directories, MenuDirectory, OrderClient, RestaurantDirectory, UserDirectory};
use crate::config::EngineConfig;
use crate::notifications::NotificationFeed;
use crate::order_actor::OrderContext;
use crate::review_gate::ReviewGate;
use crate::service::OrderingService;
use crate::{directory, order_actor, review_actor};
use std::sync::Arc;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// The runtime orchestrator for the ordering engine.
///
/// `OrderingSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping every actor
/// - **Dependency Wiring**: the Order actor gets the directories and the feed,
///   the review gate gets the Order and Review clients
/// - **Exposing the surface**: [`OrderingService`] for requests, directory
///   clients for seeding data
///
/// # Architecture
///
/// ```text
/// users  restaurants  menu  addresses      (no dependencies)
///    └───────┴──────────┴──────┘
///                 │
///              orders ──▶ NotificationFeed
///                 │
///              reviews                      (via ReviewGate)
/// ```
///
/// # Example
///
/// ```ignore
/// let system = OrderingSystem::new(&EngineConfig::default());
/// let admin = system.users.create_user(UserCreate::restaurant_admin("a@x.io", "Ann")).await?;
/// // ... seed restaurant, dishes, addresses ...
/// let order = system.service.create_order(&principal, restaurant, address, items).await?;
/// system.shutdown().await?;
/// ```
pub struct OrderingSystem {
    pub service: OrderingService,
    pub users: UserDirectory,
    pub restaurants: RestaurantDirectory,
    pub menu: MenuDirectory,
    pub addresses: AddressBook,
    pub orders: OrderClient,
    pub feed: Arc<NotificationFeed>,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl OrderingSystem {
    /// Creates every actor, wires the contexts and spawns them on the current
    /// tokio runtime.
    pub fn new(config: &EngineConfig) -> Self {
        let buffer = config.actor_buffer_size;

        // 1. Create actors (no dependencies)
        let (user_actor, users) = directory::users(buffer);
        let (restaurant_actor, restaurants) = directory::restaurants(buffer);
        let (dish_actor, menu) = directory::menu(buffer);
        let (address_actor, addresses) = directory::addresses(buffer);
        let (order_actor, orders) = order_actor::new(buffer);
        let (review_actor, reviews) = review_actor::new(buffer);

        let directories = Directories {
            users: users.clone(),
            restaurants: restaurants.clone(),
            menu: menu.clone(),
            addresses: addresses.clone(),
        };
        let feed = Arc::new(NotificationFeed::new(config.notification_retention));

        // 2. Start actors with injected context
        let handles = vec![
            tokio::spawn(user_actor.run(())),
            tokio::spawn(restaurant_actor.run(())),
            tokio::spawn(dish_actor.run(())),
            tokio::spawn(address_actor.run(())),
            tokio::spawn(order_actor.run(OrderContext {
                directories: directories.clone(),
                feed: feed.clone(),
            })),
            tokio::spawn(review_actor.run(())),
        ];

        let review_gate = ReviewGate::new(reviews, orders.clone(), config.review_comment_max_len);
        let service = OrderingService::new(directories, orders.clone(), review_gate, feed.clone());
        info!(?config, "Ordering system started");

        Self {
            service,
            users,
            restaurants,
            menu,
            addresses,
            orders,
            feed,
            handles,
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes the actors' channels. The Order actor's
    /// context holds directory clones, so the directories stop once the Order
    /// actor has. Clones of the service or of any client held elsewhere keep
    /// their actor running and make this wait.
    ///
    /// Fails if an actor task panicked.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down system...");
        drop(self.service);
        drop(self.users);
        drop(self.restaurants);
        drop(self.menu);
        drop(self.addresses);
        drop(self.orders);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e);
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

//! # Actor Authorization Gate
//!
//! Turns "who is calling" plus "which order" into a [`Capability`] before any
//! state-machine call. Each capability variant exposes only its role's
//! operations, so there is no single permissive entry point to the order actor.
//!
//! | Situation | Outcome |
//! |---|---|
//! | no principal, or unknown user | [`ServiceError::Unauthorized`] |
//! | principal's role cannot perform the operation | [`ServiceError::Forbidden`] |
//! | right role, but not owner / admin of record / assigned courier | [`ServiceError::NotFound`] |
//! | order absent | [`ServiceError::NotFound`] |
//!
//! The last two read the same, so a principal with no relation to an order
//! learns nothing about whether it exists.

use crate::clients::{Directories, OrderClient};
use crate::error::ServiceError;
use crate::model::{Order, OrderId, OrderStatus, Restaurant, Role, User, UserId};
use crate::projection::OrderDetails;
use tracing::{debug, instrument};

/// The caller as seen by the core, after transport-level authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Principal(Option<UserId>);

impl Principal {
    pub fn anonymous() -> Self {
        Self(None)
    }

    pub fn user(id: UserId) -> Self {
        Self(Some(id))
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.0
    }
}

/// The resolved relation between a principal and one order.
pub enum Capability {
    Client(ClientCapability),
    RestaurantAdmin(AdminCapability),
    Courier(CourierCapability),
}

impl Capability {
    pub fn order(&self) -> &Order {
        match self {
            Capability::Client(c) => &c.order,
            Capability::RestaurantAdmin(c) => &c.order,
            Capability::Courier(c) => &c.order,
        }
    }

    pub async fn details(&self) -> Result<OrderDetails, ServiceError> {
        match self {
            Capability::Client(c) => c.details().await,
            Capability::RestaurantAdmin(c) => c.details().await,
            Capability::Courier(c) => c.details().await,
        }
    }

    pub fn into_admin(self) -> Result<AdminCapability, ServiceError> {
        match self {
            Capability::RestaurantAdmin(c) => Ok(c),
            other => Err(role_mismatch(Role::RestaurantAdmin, other.role())),
        }
    }

    pub fn into_courier(self) -> Result<CourierCapability, ServiceError> {
        match self {
            Capability::Courier(c) => Ok(c),
            other => Err(role_mismatch(Role::Courier, other.role())),
        }
    }

    /// The role this relation was resolved through.
    pub fn role(&self) -> Role {
        match self {
            Capability::Client(_) => Role::Client,
            Capability::RestaurantAdmin(_) => Role::RestaurantAdmin,
            Capability::Courier(_) => Role::Courier,
        }
    }
}

fn role_mismatch(required: Role, held: Role) -> ServiceError {
    ServiceError::Forbidden(format!(
        "requires {}, caller is {}",
        required.label(),
        held.label()
    ))
}

/// The order's owner: read access.
pub struct ClientCapability {
    order: Order,
    directories: Directories,
}

impl ClientCapability {
    pub fn order(&self) -> &Order {
        &self.order
    }

    pub async fn details(&self) -> Result<OrderDetails, ServiceError> {
        OrderDetails::load(&self.order, &self.directories).await
    }
}

/// The admin of the order's restaurant: the restaurant transition table and
/// courier assignment.
pub struct AdminCapability {
    order: Order,
    restaurant: Restaurant,
    orders: OrderClient,
    directories: Directories,
}

impl AdminCapability {
    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn restaurant(&self) -> &Restaurant {
        &self.restaurant
    }

    /// Moves the order to `target`, provided it is still in the status this
    /// capability was resolved against.
    pub async fn transition(&self, target: OrderStatus) -> Result<Order, ServiceError> {
        Ok(self
            .orders
            .restaurant_transition(self.order.id, self.order.status, target)
            .await?)
    }

    pub async fn assign_courier(&self, courier_id: UserId) -> Result<Order, ServiceError> {
        Ok(self.orders.assign_courier(self.order.id, courier_id).await?)
    }

    pub async fn details(&self) -> Result<OrderDetails, ServiceError> {
        OrderDetails::load(&self.order, &self.directories).await
    }
}

/// The order's assigned courier: delivery only.
pub struct CourierCapability {
    order: Order,
    orders: OrderClient,
    directories: Directories,
}

impl CourierCapability {
    pub fn order(&self) -> &Order {
        &self.order
    }

    pub async fn transition(&self, target: OrderStatus) -> Result<Order, ServiceError> {
        Ok(self.orders.courier_transition(self.order.id, target).await?)
    }

    pub async fn mark_delivered(&self) -> Result<Order, ServiceError> {
        self.transition(OrderStatus::Delivered).await
    }

    pub async fn details(&self) -> Result<OrderDetails, ServiceError> {
        OrderDetails::load(&self.order, &self.directories).await
    }
}

#[derive(Clone)]
pub struct AuthorizationGate {
    directories: Directories,
    orders: OrderClient,
}

impl AuthorizationGate {
    pub fn new(directories: Directories, orders: OrderClient) -> Self {
        Self {
            directories,
            orders,
        }
    }

    /// The principal's user record.
    pub async fn authenticate(&self, principal: &Principal) -> Result<User, ServiceError> {
        let id = principal.user_id().ok_or(ServiceError::Unauthorized)?;
        self.directories
            .users
            .find_user_by_id(id)
            .await?
            .ok_or(ServiceError::Unauthorized)
    }

    /// The principal's user record, if it has `role`.
    pub async fn require_role(&self, principal: &Principal, role: Role) -> Result<User, ServiceError> {
        let user = self.authenticate(principal).await?;
        if user.role != role {
            return Err(role_mismatch(role, user.role));
        }
        Ok(user)
    }

    /// The restaurant run by the principal, who must be a restaurant admin.
    pub async fn admin_restaurant(&self, principal: &Principal) -> Result<Restaurant, ServiceError> {
        let admin = self.require_role(principal, Role::RestaurantAdmin).await?;
        self.directories
            .restaurants
            .find_restaurant_by_admin_id(admin.id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("restaurant of admin {}", admin.id)))
    }

    /// Resolves the principal's capability on `order_id` from their role.
    #[instrument(skip(self))]
    pub async fn resolve(
        &self,
        principal: &Principal,
        order_id: OrderId,
    ) -> Result<Capability, ServiceError> {
        let user = self.authenticate(principal).await?;
        let not_found = || ServiceError::NotFound(format!("order {order_id}"));
        let order = self.orders.find_order(order_id).await?.ok_or_else(not_found)?;

        let capability = match user.role {
            Role::Client if order.client_id == user.id => Capability::Client(ClientCapability {
                order,
                directories: self.directories.clone(),
            }),
            Role::RestaurantAdmin => {
                let restaurant = self
                    .directories
                    .restaurants
                    .find_restaurant_by_id(order.restaurant_id)
                    .await?
                    .filter(|r| r.admin_id == user.id)
                    .ok_or_else(not_found)?;
                Capability::RestaurantAdmin(AdminCapability {
                    order,
                    restaurant,
                    orders: self.orders.clone(),
                    directories: self.directories.clone(),
                })
            }
            Role::Courier if order.courier_id == Some(user.id) => {
                Capability::Courier(CourierCapability {
                    order,
                    orders: self.orders.clone(),
                    directories: self.directories.clone(),
                })
            }
            _ => return Err(not_found()),
        };
        debug!(user_id = %user.id, %order_id, role = ?user.role, "Capability resolved");
        Ok(capability)
    }

    /// Like [`resolve`](Self::resolve), for operations only a restaurant admin may call.
    pub async fn resolve_admin(
        &self,
        principal: &Principal,
        order_id: OrderId,
    ) -> Result<AdminCapability, ServiceError> {
        self.require_role(principal, Role::RestaurantAdmin).await?;
        self.resolve(principal, order_id).await?.into_admin()
    }

    /// Like [`resolve`](Self::resolve), for operations only a courier may call.
    pub async fn resolve_courier(
        &self,
        principal: &Principal,
        order_id: OrderId,
    ) -> Result<CourierCapability, ServiceError> {
        self.require_role(principal, Role::Courier).await?;
        self.resolve(principal, order_id).await?.into_courier()
    }
}

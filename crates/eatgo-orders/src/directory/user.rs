//! [`ActorEntity`] implementation for [`User`].

use crate::directory::DirectoryError;
use crate::model::{User, UserCreate, UserId, UserQuery};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = Infallible;
    type Action = Infallible;
    type ActionResult = ();
    type Query = UserQuery;
    type Context = ();
    type Error = DirectoryError;

    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, Self::Error> {
        let email = params.email.trim().to_lowercase();
        if !email.contains('@') {
            return Err(DirectoryError::ValidationError(format!(
                "invalid email {email:?}"
            )));
        }
        Ok(Self {
            id,
            email,
            full_name: params.full_name,
            role: params.role,
            restaurant_id: params.restaurant_id,
        })
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match update {}
    }

    async fn handle_action(&mut self, action: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }

    fn matches(&self, query: &UserQuery) -> bool {
        match query {
            UserQuery::ByEmail(email) => self.email.eq_ignore_ascii_case(email.trim()),
            UserQuery::CouriersOf(restaurant_id) => self.is_courier_of(*restaurant_id),
        }
    }

    // Emails are the login name.
    fn conflicts_with(&self, other: &Self) -> bool {
        self.email == other.email
    }
}

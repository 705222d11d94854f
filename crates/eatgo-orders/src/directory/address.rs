//! [`ActorEntity`] implementation for [`Address`].

use crate::directory::DirectoryError;
use crate::model::{Address, AddressCreate, AddressId};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for Address {
    type Id = AddressId;
    type Create = AddressCreate;
    type Update = Infallible;
    type Action = Infallible;
    type ActionResult = ();
    type Query = ();
    type Context = ();
    type Error = DirectoryError;

    fn from_create_params(id: AddressId, params: AddressCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            owner_id: params.owner_id,
            city: params.city,
            street: params.street,
            postal_code: params.postal_code,
            apartment: params.apartment,
        })
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match update {}
    }

    async fn handle_action(&mut self, action: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }
}

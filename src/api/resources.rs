//! Typed CRUD over the portfolio resources.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use tracing::instrument;

use super::client::ApiClient;
use super::request::ApiRequest;
use super::response::ApiResponse;
use super::validate::Validate;
use crate::error::{ApiError, Result};
use crate::models::{About, Profile, UpdateProfile};

/// A collection exposed by the API at `PATH` with the usual
/// list/get/create/update/delete endpoints.
pub trait Resource: DeserializeOwned + Send {
    /// Singular, human readable name used in messages.
    const NAME: &'static str;
    const PATH: &'static str;

    type Create: Serialize + Validate + Sync;
    /// Partial update; absent fields are not sent.
    type Update: Serialize + Validate + Sync;
}

pub struct Resources<'a, R> {
    client: &'a ApiClient,
    _resource: PhantomData<fn() -> R>,
}

impl ApiClient {
    pub fn resources<R: Resource>(&self) -> Resources<'_, R> {
        Resources {
            client: self,
            _resource: PhantomData,
        }
    }

    /// `GET /about` returns the single about record.
    pub async fn about(&self) -> Result<Option<About>> {
        self.execute(ApiRequest::get(About::PATH)).await?.data()
    }

    pub async fn profile(&self) -> Result<Profile> {
        let response = self.execute(ApiRequest::get(PROFILE_PATH)).await?;
        required(&response, "profile")
    }

    pub async fn update_profile(&self, update: &UpdateProfile) -> Result<Profile> {
        update.validate()?;
        let request = ApiRequest::patch(PROFILE_PATH).json(update)?;
        let response = self.execute(request).await?;
        required(&response, "profile")
    }
}

pub const PROFILE_PATH: &str = "/users/profile";

impl<R: Resource> Resources<'_, R> {
    #[instrument(skip(self), fields(resource = R::NAME))]
    pub async fn list(&self) -> Result<Vec<R>> {
        let response = self.client.execute(ApiRequest::get(R::PATH)).await?;
        Ok(response.data()?.unwrap_or_default())
    }

    #[instrument(skip(self), fields(resource = R::NAME))]
    pub async fn get(&self, id: &str) -> Result<R> {
        let response = self.client.execute(ApiRequest::get(item_path::<R>(id)?)).await?;
        required(&response, R::NAME)
    }

    #[instrument(skip(self, payload), fields(resource = R::NAME))]
    pub async fn create(&self, payload: &R::Create) -> Result<R> {
        payload.validate()?;
        let request = ApiRequest::post(R::PATH).json(payload)?;
        let response = self.client.execute(request).await?;
        required(&response, R::NAME)
    }

    #[instrument(skip(self, patch), fields(resource = R::NAME))]
    pub async fn update(&self, id: &str, patch: &R::Update) -> Result<R> {
        patch.validate()?;
        let request = ApiRequest::patch(item_path::<R>(id)?).json(patch)?;
        let response = self.client.execute(request).await?;
        required(&response, R::NAME)
    }

    #[instrument(skip(self), fields(resource = R::NAME))]
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client
            .execute(ApiRequest::delete(item_path::<R>(id)?))
            .await?;
        Ok(())
    }
}

fn item_path<R: Resource>(id: &str) -> Result<String> {
    let id = id.trim();
    // Dot segments would be resolved away by URL parsing and hit a parent path.
    if id.is_empty() || id == "." || id == ".." || id.contains(['/', '?', '#']) {
        return Err(ApiError::Validation(format!(
            "Invalid {} id: {:?}",
            R::NAME,
            id
        )));
    }
    Ok(format!("{}/{}", R::PATH, id))
}

fn required<T: DeserializeOwned>(response: &ApiResponse, what: &str) -> Result<T> {
    response.data()?.ok_or_else(|| {
        ApiError::Decode(serde::de::Error::custom(format!(
            "response carried no {}",
            what
        )))
    })
}

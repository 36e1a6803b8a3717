//! Product Form - Model Layer
//!
//! HTTP implementation of the product creation service

use async_trait::async_trait;
use contracts::domain::a001_product::aggregate::ProductCreated;
use web_sys::File;

use super::submit::{ProductGateway, SubmitPayload};
use crate::domain::a001_product::api;

#[derive(Clone, Copy, Debug, Default)]
pub struct HttpProductGateway;

#[async_trait(?Send)]
impl ProductGateway<File> for HttpProductGateway {
    async fn add(&self, payload: SubmitPayload<File>) -> Result<ProductCreated, Vec<String>> {
        api::create_product(
            &payload.form,
            payload.image.as_ref(),
            payload.auth_token.as_deref(),
        )
        .await
    }
}

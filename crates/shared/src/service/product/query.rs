use crate::{
    abstract_trait::{DynProductQueryRepository, ProductQueryServiceTrait},
    domain::responses::ProductResponse,
    errors::ServiceError,
    utils::{Method, Metrics, OperationContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;

pub struct ProductQueryService {
    pub query: DynProductQueryRepository,
    pub metrics: Metrics,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository, registry: &mut Registry) -> Self {
        let metrics =
            Metrics::registered(registry, "product_query_service", "ProductQueryService");

        Self { query, metrics }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(&self) -> Result<Vec<ProductResponse>, ServiceError> {
        let op = OperationContext::start("FindAllProducts");

        let products: Vec<ProductResponse> = self
            .query
            .find_all()
            .await
            .into_iter()
            .map(ProductResponse::from)
            .collect();

        op.finish(
            &self.metrics,
            Method::Get,
            true,
            &format!("Fetched {} products", products.len()),
        );

        Ok(products)
    }

    async fn find_by_id(&self, id: i32) -> Result<ProductResponse, ServiceError> {
        let op = OperationContext::start("FindProductById");

        match self.query.find_by_id(id).await {
            Some(product) => {
                op.finish(
                    &self.metrics,
                    Method::Get,
                    true,
                    &format!("Fetched product ID {id}"),
                );
                Ok(ProductResponse::from(product))
            }
            None => {
                op.finish(
                    &self.metrics,
                    Method::Get,
                    false,
                    &format!("Product ID {id} not found"),
                );
                Err(ServiceError::NotFound("Product not found".to_string()))
            }
        }
    }
}

use crate::{
    abstract_trait::{DynProductCommandRepository, ProductCommandServiceTrait},
    domain::{
        requests::{CreateProductRequest, UpdateProductRequest},
        responses::{MessageResponse, ProductResponse},
    },
    errors::ServiceError,
    utils::{Method, Metrics, OperationContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;

pub struct ProductCommandService {
    pub command: DynProductCommandRepository,
    pub metrics: Metrics,
}

impl ProductCommandService {
    pub fn new(command: DynProductCommandRepository, registry: &mut Registry) -> Self {
        let metrics =
            Metrics::registered(registry, "product_command_service", "ProductCommandService");

        Self { command, metrics }
    }

    fn not_found(&self, op: &OperationContext, method: Method, id: i32) -> ServiceError {
        op.finish(
            &self.metrics,
            method,
            false,
            &format!("Product ID {id} not found"),
        );
        ServiceError::NotFound("Product not found".to_string())
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        let op = OperationContext::start("CreateProduct");

        let product = match self.command.create_product(req).await {
            Ok(product) => product,
            Err(err) => {
                op.finish(&self.metrics, Method::Post, false, &err.to_string());
                return Err(ServiceError::from(err));
            }
        };

        op.finish(
            &self.metrics,
            Method::Post,
            true,
            &format!("Created product ID {}", product.id),
        );

        Ok(ProductResponse::from(product))
    }

    async fn update_product(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        let op = OperationContext::start("UpdateProduct");

        let Some(product) = self.command.update_product(id, req).await else {
            return Err(self.not_found(&op, Method::Put, id));
        };

        op.finish(
            &self.metrics,
            Method::Put,
            true,
            &format!("Updated product ID {id}"),
        );

        Ok(ProductResponse::from(product))
    }

    async fn delete_product(&self, id: i32) -> Result<MessageResponse, ServiceError> {
        let op = OperationContext::start("DeleteProduct");

        if !self.command.delete_product(id).await {
            return Err(self.not_found(&op, Method::Delete, id));
        }

        op.finish(
            &self.metrics,
            Method::Delete,
            true,
            &format!("Deleted product ID {id}"),
        );

        Ok(MessageResponse::new("Product deleted successfully"))
    }
}

//! Conversions between the storage entity and the wire representation

use crate::contract::ProductDto;
use crate::infra::storage::Product;

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            description: product.description,
        }
    }
}

impl From<ProductDto> for Product {
    fn from(dto: ProductDto) -> Self {
        Self {
            id: dto.id,
            description: dto.description,
        }
    }
}

pub mod aggregate;
pub mod ingredients;

pub use aggregate::{
    derive_product_id, Application, Certifications, Composition, ContactInfo, Ingredient,
    Product, ProductDto, ProductId, Safety, PRODUCT_ID_MAX_LEN,
};

pub mod p900_product_view;

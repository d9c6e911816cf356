use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        addresses::AddressRequest,
        carts::CartRequest,
        categories::{AspectRequest, CategoryRequest},
        descriptions::DescriptionRequest,
        image_to_text::ImageToTextRequest,
        orders::{OrderItemRequest, OrderRequest},
        payments::PaymentRequest,
        products::ProductRequest,
        ranks::{ProductRankRequest, UpdateProductRankRequest},
        reviews::ReviewRequest,
        users::{CreateUserRequest, UpdateUserRequest},
    },
    models::{
        Address, CartItem, Category, CategoryAspect, Description, ImageToText, Order, OrderItem,
        Payment, Product, ProductRank, Review, User,
    },
    routes::{
        addresses, cart, categories, descriptions, health, image_to_text, orders, payments,
        products, ranks, reviews, users,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        users::create_user,
        users::list_users,
        users::get_user,
        users::update_user,
        users::delete_user,
        addresses::create_address,
        addresses::list_addresses,
        addresses::get_address,
        addresses::update_address,
        addresses::delete_address,
        cart::add_to_cart,
        cart::cart_list,
        cart::get_cart_item,
        cart::update_cart_item,
        cart::remove_from_cart,
        payments::create_payment,
        payments::list_payments,
        payments::get_payment,
        payments::update_payment,
        payments::delete_payment,
        orders::create_order,
        orders::list_orders,
        orders::get_order,
        orders::update_order,
        orders::delete_order,
        categories::create_category,
        categories::list_categories,
        categories::get_category,
        categories::update_category,
        categories::delete_category,
        categories::create_aspect,
        categories::list_aspects,
        categories::get_aspect,
        categories::update_aspect,
        categories::delete_aspect,
        products::list_products,
        products::get_product,
        products::list_products_by_category,
        products::search_products,
        products::create_product,
        products::update_product,
        products::delete_product,
        reviews::create_review,
        reviews::list_reviews,
        reviews::get_review,
        reviews::update_review,
        reviews::delete_review,
        descriptions::create_description,
        descriptions::get_description,
        descriptions::update_description,
        descriptions::delete_description,
        ranks::create_rank,
        ranks::list_ranks,
        ranks::list_ranks_by_aspect,
        ranks::get_rank,
        ranks::update_rank,
        ranks::delete_rank,
        image_to_text::process_input
    ),
    components(
        schemas(
            User,
            Address,
            CartItem,
            Payment,
            Order,
            OrderItem,
            Category,
            CategoryAspect,
            Product,
            Review,
            Description,
            ProductRank,
            ImageToText,
            health::HealthData,
            CreateUserRequest,
            UpdateUserRequest,
            AddressRequest,
            CartRequest,
            PaymentRequest,
            OrderRequest,
            OrderItemRequest,
            CategoryRequest,
            AspectRequest,
            ProductRequest,
            ReviewRequest,
            DescriptionRequest,
            ProductRankRequest,
            UpdateProductRankRequest,
            ImageToTextRequest
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Users", description = "User endpoints"),
        (name = "Addresses", description = "Delivery addresses of a user"),
        (name = "Cart", description = "Cart endpoints"),
        (name = "Payments", description = "Payments of a user"),
        (name = "Orders", description = "Order endpoints"),
        (name = "Categories", description = "Categories and their aspects"),
        (name = "Products", description = "Product endpoints"),
        (name = "Reviews", description = "Product reviews"),
        (name = "Descriptions", description = "Long-form product descriptions"),
        (name = "Ranks", description = "Per-aspect product ranking"),
        (name = "Image to text", description = "Text recognition proxy"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}

pub mod addresses;
pub mod carts;
pub mod categories;
pub mod category_aspects;
pub mod descriptions;
pub mod image_to_texts;
pub mod order_items;
pub mod orders;
pub mod payments;
pub mod product_ranks;
pub mod products;
pub mod reviews;
pub mod users;

pub use addresses::Entity as Addresses;
pub use carts::Entity as Carts;
pub use categories::Entity as Categories;
pub use category_aspects::Entity as CategoryAspects;
pub use descriptions::Entity as Descriptions;
pub use image_to_texts::Entity as ImageToTexts;
pub use order_items::Entity as OrderItems;
pub use orders::Entity as Orders;
pub use payments::Entity as Payments;
pub use product_ranks::Entity as ProductRanks;
pub use products::Entity as Products;
pub use reviews::Entity as Reviews;
pub use users::Entity as Users;

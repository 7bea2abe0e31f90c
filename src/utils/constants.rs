/// Key de localStorage donde persiste el carrito
pub const CART_STORAGE_KEY: &str = "storefront_cart";

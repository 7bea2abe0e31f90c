pub mod booking_viewmodel;
pub mod cart_viewmodel;
pub mod catalog_viewmodel;
pub mod checkout_viewmodel;

pub use booking_viewmodel::BookingViewModel;
pub use cart_viewmodel::CartViewModel;
pub use catalog_viewmodel::CatalogViewModel;
pub use checkout_viewmodel::CheckoutViewModel;

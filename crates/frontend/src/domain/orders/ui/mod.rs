mod details;
mod form_controls;
mod order_form;
mod page;
mod product_form;
mod products;
mod sidebar;

pub use page::OrdersPage;

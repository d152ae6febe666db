pub mod admin_dashboard;
pub mod admin_login;
pub mod invoice_page;
pub mod invoice_view;
pub mod package_card;
pub mod package_details;
pub mod package_form_modal;
pub mod package_list;

pub use admin_dashboard::AdminDashboard;
pub use admin_login::AdminLogin;
pub use invoice_page::InvoicePage;
pub use invoice_view::InvoiceView;
pub use package_card::PackageCard;
pub use package_details::PackageDetails;
pub use package_form_modal::PackageFormModal;
pub use package_list::PackageList;

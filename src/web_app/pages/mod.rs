// web_app/pages/mod.rs - Page components module
//
// - HomePage: public deals listing ("/")
// - AdminPage: hidden listing management ("/admin")

pub mod admin;
pub mod home;

// Re-export page components
pub use admin::AdminPage;
pub use home::HomePage;

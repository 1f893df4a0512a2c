//! Preview screen definitions

use super::banner::LandingBanner;
use super::catalog::Product;
use super::category::MainCategory;

/// One entry of the preview navigation stack
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Screen {
    /// Composed section list
    #[default]
    Home,
    /// Category browser opened from a category grid
    CategoryDetail {
        /// Section the categories came from, used to follow live edits
        section_id: String,
        title: String,
        /// Categories at the time the screen was opened
        main_categories: Vec<MainCategory>,
        /// Category that was tapped
        active_id: Option<String>,
    },
    /// Listing of linked products
    ProductList {
        title: String,
        products: Vec<Product>,
        /// Secondary banner rendered above the listing
        internal_banner: Option<LandingBanner>,
    },
    /// Single product
    ProductDetail { product: Product },
}

impl Screen {
    /// Header title of the screen
    pub fn title(&self) -> &str {
        match self {
            Screen::Home => "Home",
            Screen::CategoryDetail { title, .. } | Screen::ProductList { title, .. } => title,
            Screen::ProductDetail { product } => &product.name,
        }
    }

    /// Whether the screen shows a back button
    pub fn is_detail_page(&self) -> bool {
        !matches!(self, Screen::Home)
    }
}

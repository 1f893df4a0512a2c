//! Preview navigator
//!
//! A stack of screens over the composed layout. The stack is never empty and
//! starts at `[Home]`; `back()` never pops the last screen. The navigator only
//! reads sections and catalog, it never changes them.

use super::link_resolver::resolve_products;
use super::preview::{self, ScreenView};
use crate::config::ComposerConfig;
use crate::types::{Catalog, LinkSource, MainCategory, Product, Screen, Section, SectionData};

static HOME: Screen = Screen::Home;

/// Screen stack of the shopper simulation
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewNavigator {
    stack: Vec<Screen>,
}

impl Default for PreviewNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewNavigator {
    /// Create a navigator at the home screen
    #[must_use]
    pub fn new() -> Self {
        Self {
            stack: vec![Screen::Home],
        }
    }

    /// Screen on top of the stack
    #[must_use]
    pub fn current(&self) -> &Screen {
        // the stack always holds at least `Home`
        self.stack.last().unwrap_or(&HOME)
    }

    /// Number of screens on the stack (at least 1)
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Whole stack, bottom first
    #[must_use]
    pub fn stack(&self) -> &[Screen] {
        &self.stack
    }

    fn push(&mut self, screen: Screen) {
        log::debug!("Preview push: {} (depth {})", screen.title(), self.stack.len() + 1);
        self.stack.push(screen);
    }

    /// Open the listing behind a banner, subcategory, tile or story.
    ///
    /// Nothing happens when the source links no products. A landing banner with
    /// an image rides along as the listing's internal banner.
    pub fn activate_link(&mut self, title: &str, source: &dyn LinkSource, catalog: &Catalog) -> bool {
        if !source.is_interactive() {
            return false;
        }
        let products = resolve_products(catalog, source.linked_product_ids());
        let internal_banner = source
            .landing_banner()
            .filter(|landing| landing.has_image())
            .cloned();
        self.push(Screen::ProductList {
            title: title.to_string(),
            products,
            internal_banner,
        });
        true
    }

    /// Tap the internal banner of the current product listing.
    ///
    /// The pushed listing carries no internal banner of its own, so this can
    /// descend one level at most.
    pub fn activate_internal_banner(&mut self, catalog: &Catalog) -> bool {
        let Screen::ProductList {
            title,
            internal_banner: Some(landing),
            ..
        } = self.current()
        else {
            return false;
        };
        if !landing.is_interactive() {
            return false;
        }
        let screen = Screen::ProductList {
            title: title.clone(),
            products: resolve_products(catalog, &landing.linked_product_ids),
            internal_banner: None,
        };
        self.push(screen);
        true
    }

    /// Open the category browser of a category-grid section on `active_id`
    pub fn activate_category(
        &mut self,
        section_id: &str,
        title: &str,
        categories: &[MainCategory],
        active_id: &str,
    ) {
        self.push(Screen::CategoryDetail {
            section_id: section_id.to_string(),
            title: title.to_string(),
            main_categories: categories.to_vec(),
            active_id: Some(active_id.to_string()),
        });
    }

    /// Open a product
    pub fn activate_product(&mut self, product: Product) {
        self.push(Screen::ProductDetail { product });
    }

    /// Pop one screen. At depth 1 this does nothing and returns `false`.
    pub fn back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        self.stack.pop();
        true
    }

    /// Unwind to the home screen
    pub fn reset(&mut self) {
        self.stack.truncate(1);
    }

    /// Change the locally selected category of the current category browser
    pub fn select_category(&mut self, category_id: &str) -> bool {
        match self.stack.last_mut() {
            Some(Screen::CategoryDetail { active_id, .. }) => {
                *active_id = Some(category_id.to_string());
                true
            }
            _ => false,
        }
    }

    /// Render the top screen against the current sections and catalog.
    ///
    /// A category browser follows live edits of its source section; its
    /// snapshot is used only once the section is gone.
    pub fn render(&self, sections: &[Section], catalog: &Catalog, config: &ComposerConfig) -> ScreenView {
        match self.current() {
            Screen::Home => preview::render_home(sections, catalog, config),
            Screen::CategoryDetail {
                section_id,
                title,
                main_categories,
                active_id,
            } => {
                let live = sections
                    .iter()
                    .find(|s| s.id() == section_id)
                    .and_then(|s| match s.data() {
                        SectionData::CategoryGrid(data) => Some(data.categories.as_slice()),
                        _ => None,
                    });
                preview::render_category_detail(
                    title,
                    live.unwrap_or(main_categories.as_slice()),
                    active_id.as_deref(),
                    catalog,
                    config,
                )
            }
            Screen::ProductList {
                title,
                products,
                internal_banner,
            } => preview::render_product_list(title, products, internal_banner.as_ref(), config),
            Screen::ProductDetail { product } => ScreenView::ProductDetail {
                product: product.clone(),
            },
        }
    }
}

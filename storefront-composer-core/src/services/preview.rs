//! Preview render models
//!
//! Read-only projection of sections and catalog into what the shopper sees.
//! Anything that resolves to nothing becomes an explicit [`EmptyState`].

use chrono::{DateTime, Utc};

use super::link_resolver::{resolve_category_tree, resolve_product, resolve_products, ResolvedCategory};
use crate::config::ComposerConfig;
use crate::types::{
    Catalog, LandingBanner, LinkSource, MainCategory, Product, ProductListLayout, Section,
    SectionData, SectionKind,
};

/// Placeholder shown instead of an empty list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
}

impl EmptyState {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Image tile (banner, wellbeing tile, story, lifestyle banner)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileView {
    pub id: String,
    pub title: String,
    pub image: String,
    /// Tiles without linked products do nothing when tapped
    pub interactive: bool,
}

/// Category tile on the home screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTileView {
    pub id: String,
    pub name: String,
    pub image: String,
}

/// Product on sale with its flash price
#[derive(Debug, Clone, PartialEq)]
pub struct FlashSaleCard {
    pub product: Product,
    pub flash_price: Option<f64>,
    pub stock_limit: Option<u32>,
}

/// Rendered body of a section
#[derive(Debug, Clone, PartialEq)]
pub enum SectionBody {
    Empty(EmptyState),
    Banners(Vec<TileView>),
    Categories(Vec<CategoryTileView>),
    Products {
        layout: ProductListLayout,
        products: Vec<Product>,
    },
    Tiles(Vec<TileView>),
    Lifestyle(TileView),
    FlashSale {
        ends_at: Option<DateTime<Utc>>,
        cards: Vec<FlashSaleCard>,
    },
    Stories(Vec<TileView>),
}

/// One rendered section of the home screen
#[derive(Debug, Clone, PartialEq)]
pub struct SectionView {
    pub section_id: String,
    pub kind: SectionKind,
    pub title: Option<String>,
    pub body: SectionBody,
}

/// Tab of the category browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTab {
    pub id: String,
    pub name: String,
    pub active: bool,
}

/// Rendered top-of-stack screen
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenView {
    Home {
        sections: Vec<SectionView>,
        empty: Option<EmptyState>,
    },
    CategoryDetail {
        title: String,
        tabs: Vec<CategoryTab>,
        active: Option<ResolvedCategory>,
        empty: Option<EmptyState>,
    },
    ProductList {
        title: String,
        internal_banner: Option<LandingBanner>,
        products: Vec<Product>,
        empty: Option<EmptyState>,
    },
    ProductDetail {
        product: Product,
    },
}

fn tile<T: LinkSource>(source: &T, id: &str, title: &str, image: &str) -> TileView {
    TileView {
        id: id.to_string(),
        title: title.to_string(),
        image: image.to_string(),
        interactive: source.is_interactive(),
    }
}

fn non_empty<T>(items: Vec<T>, wrap: impl FnOnce(Vec<T>) -> SectionBody, empty: &str) -> SectionBody {
    if items.is_empty() {
        SectionBody::Empty(EmptyState::new(empty))
    } else {
        wrap(items)
    }
}

/// Render one section against the catalog
pub fn render_section(section: &Section, catalog: &Catalog, config: &ComposerConfig) -> SectionView {
    let body = match section.data() {
        SectionData::Banner(data) => non_empty(
            data.banners
                .iter()
                .map(|b| tile(b, &b.id, &b.title, &b.image))
                .collect(),
            SectionBody::Banners,
            "No banners yet",
        ),
        SectionData::CategoryGrid(data) => non_empty(
            data.categories
                .iter()
                .map(|c| CategoryTileView {
                    id: c.id.clone(),
                    name: c.name.clone(),
                    image: c.image.clone(),
                })
                .collect(),
            SectionBody::Categories,
            "No categories yet",
        ),
        SectionData::ProductList(data) => {
            let layout = data.layout;
            non_empty(
                resolve_products(catalog, &data.linked_product_ids),
                |products| SectionBody::Products { layout, products },
                &config.empty_state_message,
            )
        }
        SectionData::WellbeingGrid(data) => non_empty(
            data.tiles
                .iter()
                .map(|t| tile(t, &t.id, &t.title, &t.image))
                .collect(),
            SectionBody::Tiles,
            "No tiles yet",
        ),
        SectionData::LifestyleBanner(data) => {
            if data.image.trim().is_empty() && data.title.trim().is_empty() {
                SectionBody::Empty(EmptyState::new("Lifestyle banner not set up yet"))
            } else {
                SectionBody::Lifestyle(tile(data, section.id(), &data.title, &data.image))
            }
        }
        SectionData::FlashSale(data) => {
            let ends_at = data.ends_at;
            non_empty(
                data.items
                    .iter()
                    .filter_map(|item| {
                        resolve_product(catalog, &item.product_id).map(|product| FlashSaleCard {
                            product,
                            flash_price: item.flash_price,
                            stock_limit: item.stock_limit,
                        })
                    })
                    .collect(),
                |cards| SectionBody::FlashSale { ends_at, cards },
                "No products on sale",
            )
        }
        SectionData::Stories(data) => non_empty(
            data.stories
                .iter()
                .map(|s| tile(s, &s.id, &s.title, &s.image))
                .collect(),
            SectionBody::Stories,
            "No stories yet",
        ),
    };

    SectionView {
        section_id: section.id().to_string(),
        kind: section.kind(),
        title: section.title().map(str::to_string),
        body,
    }
}

/// Render the home screen: every section, in sequence order
pub fn render_home(sections: &[Section], catalog: &Catalog, config: &ComposerConfig) -> ScreenView {
    let views: Vec<SectionView> = sections
        .iter()
        .map(|s| render_section(s, catalog, config))
        .collect();
    let empty = views
        .is_empty()
        .then(|| EmptyState::new("Add a section to start building the storefront"));
    ScreenView::Home {
        sections: views,
        empty,
    }
}

/// Category currently shown by a category browser.
///
/// Falls back to the first category when `selected` is gone, or `None` when
/// no categories remain. Must be evaluated on every render.
pub fn active_category<'a>(
    categories: &'a [MainCategory],
    selected: Option<&str>,
) -> Option<&'a MainCategory> {
    selected
        .and_then(|id| categories.iter().find(|c| c.id == id))
        .or_else(|| categories.first())
}

/// Render a category browser over `categories`
pub fn render_category_detail(
    title: &str,
    categories: &[MainCategory],
    selected: Option<&str>,
    catalog: &Catalog,
    config: &ComposerConfig,
) -> ScreenView {
    let active = active_category(categories, selected);
    let tabs = categories
        .iter()
        .map(|c| CategoryTab {
            id: c.id.clone(),
            name: c.name.clone(),
            active: active.is_some_and(|a| a.id == c.id),
        })
        .collect();
    let resolved = active.map(|c| resolve_category_tree(c, catalog));
    let empty = match &resolved {
        None => Some(EmptyState::new("No categories to show")),
        Some(r) if r.is_empty() => Some(EmptyState::new(config.empty_state_message.clone())),
        Some(_) => None,
    };
    ScreenView::CategoryDetail {
        title: title.to_string(),
        tabs,
        active: resolved,
        empty,
    }
}

/// Render a product listing
pub fn render_product_list(
    title: &str,
    products: &[Product],
    internal_banner: Option<&LandingBanner>,
    config: &ComposerConfig,
) -> ScreenView {
    ScreenView::ProductList {
        title: title.to_string(),
        internal_banner: internal_banner.cloned(),
        products: products.to_vec(),
        empty: products
            .is_empty()
            .then(|| EmptyState::new(config.empty_state_message.clone())),
    }
}

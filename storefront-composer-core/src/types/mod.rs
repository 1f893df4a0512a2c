//! Type definitions

mod banner;
mod catalog;
mod category;
mod identity;
mod link;
mod notification;
mod screen;
mod section;

pub use banner::{Banner, BannerVariant, LandingBanner};
pub use catalog::{Catalog, CatalogCategory, CatalogSubCategory, Product, ProductId, ProductIdSet};
pub use category::{MainCategory, SubCategory};
pub use identity::Identified;
pub use link::LinkSource;
pub use notification::{Notification, NotificationLevel};
pub use screen::Screen;
pub use section::{
    BannerSectionData, CategoryGridData, FlashSaleData, FlashSaleItem, LifestyleBannerData,
    ProductListData, ProductListLayout, Section, SectionData, SectionDataPatch, SectionKind,
    SectionMetaUpdate, StoriesData, StoryItem, WellbeingGridData, WellbeingTile,
};

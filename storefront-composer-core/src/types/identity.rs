//! Identity of list items

use super::banner::Banner;
use super::category::{MainCategory, SubCategory};
use super::section::{FlashSaleItem, Section, StoryItem, WellbeingTile};

/// Items addressed by a stable id within their owning list
pub trait Identified {
    fn identity(&self) -> &str;
}

macro_rules! impl_identified {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Identified for $ty {
                fn identity(&self) -> &str {
                    &self.id
                }
            }
        )*
    };
}

impl_identified!(Banner, MainCategory, SubCategory, WellbeingTile, FlashSaleItem, StoryItem);

impl Identified for Section {
    fn identity(&self) -> &str {
        self.id()
    }
}

mod merge;
mod record;
mod scraped;

pub use merge::{merge_price_sources, PriceMergeSummary, PriceSource};
pub use record::{PriceCatalog, PriceRecord};
pub use scraped::{convert_scraped_prices, ScrapedPriceRecord};

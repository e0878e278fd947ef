mod rates;
mod record;

pub use rates::{build_tax_catalog, TaxRateRow};
pub use record::{TaxCatalog, TaxRecord};

//! Message rendering: payload arguments, formats, printers and catalogs.

mod args;
mod catalog;
mod format;
mod locales;
mod printer;

pub use args::{by_name, Arg, ArgValue, Argument, Payload, ToArg};
pub use catalog::{Catalog, CatalogBuilder, CatalogError, Language};
pub use format::{formats, keys, Format};
pub use printer::{substitute, CatalogPrinter, PlainPrinter, Printer};

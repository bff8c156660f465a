pub mod vat_decomposition;

pub use vat_decomposition::VatDecomposition;

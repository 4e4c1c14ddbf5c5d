//! QR symbol providers.
//!
//! A provider turns text into a square [`VectorImage`] at a fixed error
//! correction level. The exporter consumes the image and never calls the
//! encoder directly.

mod provider;

pub use provider::{ErrorCorrection, QrcodeProvider, SymbolProvider, SymbolRequest, QUIET_ZONE_MODULES};

pub use qrframe_core::VectorImage;

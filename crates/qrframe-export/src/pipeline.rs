//! The export pipeline: validate, layout, decode, compose, encode.

use qrframe_core::{ExportError, ExportFormat, LayoutError, RenderRequest, VectorImage};
use qrframe_layout::{compute_layout, LayoutInput};
use qrframe_render::{RasterDecoder, VectorRasterizer};
use qrframe_symbol::{SymbolProvider, SymbolRequest};
use tracing::{debug, info, warn};

use crate::compose::compose;
use crate::encode::{encode_jpeg, encode_png};
use crate::options::{Blob, ExportOptions};

/// Serialize the symbol's vector image unchanged.
///
/// Frame and caption are raster-only and have no effect here.
pub fn export_vector(request: &RenderRequest, source: Option<&VectorImage>) -> Result<Blob, ExportError> {
    request.validate()?;
    let source = source.ok_or(ExportError::MissingSource)?;
    if source.size == 0 {
        return Err(LayoutError::InvalidDimension {
            name: "qr_size",
            value: source.size,
        }
        .into());
    }

    let blob = Blob::new(source.to_svg().into_bytes(), ExportFormat::Vector);
    info!(format = %blob.format, bytes = blob.len(), "export complete");
    Ok(blob)
}

/// Compose and encode a raster export. A vector format is passed to
/// [`export_vector`].
///
/// Awaiting the decoder is the only suspension point. Nothing is drawn until the
/// decode has succeeded.
pub async fn export_raster<D: RasterDecoder>(
    request: &RenderRequest,
    source: Option<&VectorImage>,
    format: ExportFormat,
    options: &ExportOptions,
    decoder: &D,
) -> Result<Blob, ExportError> {
    if !format.is_raster() {
        return export_vector(request, source);
    }
    request.validate()?;

    let geometry = compute_layout(&LayoutInput::from_request(request), &options.layout)?;
    debug!(
        canvas_width = geometry.canvas_width,
        canvas_height = geometry.canvas_height,
        "computed layout"
    );

    let source = source.ok_or(ExportError::MissingSource)?;
    let qr = decoder
        .decode(source)
        .await
        .map_err(|e| ExportError::DecodeFailure { reason: e.to_string() })?;
    debug!(width = qr.width(), height = qr.height(), "decoded symbol");

    let surface = compose(request, &geometry, &qr, options.caption_font_size)?;

    let bytes = match format {
        ExportFormat::RasterLossy => encode_jpeg(surface, options.jpeg_quality)?,
        _ => encode_png(surface)?,
    };

    let blob = Blob::new(bytes, format);
    info!(format = %blob.format, bytes = blob.len(), "export complete");
    Ok(blob)
}

/// Export in any format with the default decoder.
pub async fn export(
    request: &RenderRequest,
    source: Option<&VectorImage>,
    format: ExportFormat,
    options: &ExportOptions,
) -> Result<Blob, ExportError> {
    let result = export_raster(request, source, format, options, &VectorRasterizer::new()).await;
    if let Err(e) = &result {
        warn!(%format, error = %e, "export failed");
    }
    result
}

/// Blocking form of [`export`].
pub fn export_blocking(
    request: &RenderRequest,
    source: Option<&VectorImage>,
    format: ExportFormat,
    options: &ExportOptions,
) -> Result<Blob, ExportError> {
    pollster::block_on(export(request, source, format, options))
}

/// Runs the whole pipeline, starting from the symbol provider.
///
/// Every call produces its own symbol and surface, so concurrent exports never
/// share output state.
#[derive(Debug, Clone)]
pub struct Exporter<P, D = VectorRasterizer> {
    provider: P,
    decoder: D,
    options: ExportOptions,
}

impl<P: SymbolProvider> Exporter<P, VectorRasterizer> {
    pub fn new(provider: P) -> Self {
        Self::with_decoder(provider, VectorRasterizer::new())
    }
}

impl<P: SymbolProvider, D: RasterDecoder> Exporter<P, D> {
    pub fn with_decoder(provider: P, decoder: D) -> Self {
        Self {
            provider,
            decoder,
            options: ExportOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ExportOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Render the request's symbol and export it.
    pub async fn export(&self, request: &RenderRequest, format: ExportFormat) -> Result<Blob, ExportError> {
        let result = self.run(request, format).await;
        if let Err(e) = &result {
            warn!(%format, error = %e, "export failed");
        }
        result
    }

    /// Blocking form of [`Exporter::export`].
    pub fn export_blocking(&self, request: &RenderRequest, format: ExportFormat) -> Result<Blob, ExportError> {
        pollster::block_on(self.export(request, format))
    }

    async fn run(&self, request: &RenderRequest, format: ExportFormat) -> Result<Blob, ExportError> {
        request.validate()?;
        compute_layout(&LayoutInput::from_request(request), &self.options.layout)?;

        let symbol_request = SymbolRequest::from_request(request).with_margin(self.options.quiet_zone);
        let source = self.provider.render(&symbol_request)?;
        debug!(view_box = source.view_box, runs = source.runs.len(), "rendered symbol");

        export_raster(request, Some(&source), format, &self.options, &self.decoder).await
    }
}

use crate::draw::{draw_thick_line, fill_ellipse};
use crate::geometry::IconGeometry;
use crate::manifest::{IconsManifest, MANIFEST_FILE};
use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};
use log::{debug, warn};
use std::{
    fs::create_dir_all,
    io::Write,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Icon sizes in the order they are generated
pub const ICON_SIZES: [u32; 3] = [16, 48, 128];

/// Fill of the round background
pub const CIRCLE_COLOR: Rgba<u8> = Rgba([255, 0, 0, 255]);

/// Stroke of the "X"
pub const CROSS_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Generation settings coming from the command line
#[derive(Debug, Clone)]
pub struct Options {
    pub output: PathBuf,
    pub manifest: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            output: PathBuf::from("."),
            manifest: false,
        }
    }
}

/// An image capability this build was compiled without
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{feature} support is not available in this build")]
pub struct MissingCapability {
    pub feature: &'static str,
}

impl MissingCapability {
    pub fn png() -> Self {
        Self { feature: "PNG" }
    }
}

/// Token proving the PNG encoder is compiled in
///
/// Only [`PngSupport::detect`] hands one out, so holding it means
/// [`generate_icons`] can encode without further checks.
#[derive(Debug, Clone, Copy)]
pub struct PngSupport {
    _private: (),
}

impl PngSupport {
    /// Check once, before any drawing, whether PNG output is possible
    pub fn detect() -> Result<Self, MissingCapability> {
        if cfg!(feature = "png") {
            Ok(Self { _private: () })
        } else {
            Err(MissingCapability::png())
        }
    }
}

/// A PNG file written by [`generate_icons`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub size: u32,
    pub path: PathBuf,
}

/// What a generation run ended with
#[derive(Debug)]
pub enum Outcome {
    /// Every icon was written, in [`ICON_SIZES`] order
    Generated(Vec<GeneratedIcon>),
    /// Nothing was written; guidance was printed instead
    Skipped(MissingCapability),
}

/// File name an icon of the given size is saved under
pub fn icon_file_name(size: u32) -> String {
    format!("icon{size}.png")
}

/// Generate all icons, reporting progress on `status`
///
/// When `png` carries a [`MissingCapability`] no file is touched: the
/// install hint and the manual fallback are written to `status` and
/// [`Outcome::Skipped`] is returned. Filesystem and encoding failures are
/// returned as errors.
pub fn generate_icons<W: Write>(
    options: &Options,
    png: Result<PngSupport, MissingCapability>,
    status: &mut W,
) -> Result<Outcome> {
    let png = match png {
        Ok(png) => png,
        Err(missing) => {
            warn!("Skipping icon generation: {missing}");
            write_guidance(status, &missing)?;
            return Ok(Outcome::Skipped(missing));
        }
    };

    create_dir_all(&options.output).context("Can't create output directory")?;

    let mut icons = Vec::with_capacity(ICON_SIZES.len());
    for size in ICON_SIZES {
        let canvas = render_icon(size);
        let file_name = icon_file_name(size);
        let path = options.output.join(&file_name);

        write_png(png, &canvas, &path)?;
        debug!("Wrote {}x{} icon to {}", size, size, path.display());
        writeln!(status, "Created {file_name}")?;

        icons.push(GeneratedIcon { size, path });
    }

    if options.manifest {
        let manifest = IconsManifest::from_icons(
            icons.iter().map(|icon| (icon.size, icon_file_name(icon.size))),
        );
        manifest.write_to_dir(&options.output)?;
        writeln!(status, "Created {MANIFEST_FILE}")?;
    }

    writeln!(status, "All icons created successfully!")?;
    Ok(Outcome::Generated(icons))
}

/// Draw the block icon: red circle inside the margin, white "X" on top
pub fn render_icon(size: u32) -> RgbaImage {
    let geometry = IconGeometry::for_size(size);
    debug!("Rendering {size}px icon with {geometry:?}");

    let mut canvas = RgbaImage::new(size, size);
    fill_ellipse(&mut canvas, geometry.circle_bounds(), CIRCLE_COLOR);
    for (from, to) in geometry.strokes() {
        draw_thick_line(&mut canvas, from, to, geometry.line_width, CROSS_COLOR);
    }

    canvas
}

fn write_guidance<W: Write>(status: &mut W, missing: &MissingCapability) -> Result<()> {
    let names = ICON_SIZES.map(icon_file_name).join(", ");
    let dimensions = ICON_SIZES.map(|size| format!("{size}x{size}")).join(", ");

    writeln!(status, "{missing}.")?;
    writeln!(
        status,
        "Rebuild with the png feature enabled (drop --no-default-features, or pass --features png)"
    )?;
    writeln!(
        status,
        "Or use any image editor to create {dimensions} PNG files named {names}"
    )?;
    Ok(())
}

#[cfg(feature = "png")]
fn write_png(_png: PngSupport, canvas: &RgbaImage, path: &Path) -> Result<()> {
    use image::{
        codecs::png::{CompressionType, FilterType, PngEncoder},
        ColorType, ImageEncoder,
    };
    use std::{fs::File, io::BufWriter};

    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
    let mut out_file = BufWriter::new(file);

    let encoder =
        PngEncoder::new_with_quality(&mut out_file, CompressionType::Best, FilterType::Adaptive);
    encoder
        .write_image(
            canvas.as_raw(),
            canvas.width(),
            canvas.height(),
            ColorType::Rgba8,
        )
        .with_context(|| format!("Failed to write PNG {}", path.display()))?;
    out_file.flush()?;
    Ok(())
}

#[cfg(not(feature = "png"))]
fn write_png(_png: PngSupport, _canvas: &RgbaImage, path: &Path) -> Result<()> {
    anyhow::bail!(
        "Can't write {}: {}",
        path.display(),
        MissingCapability::png()
    )
}

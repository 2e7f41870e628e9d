//! Still-frame rasterization of a generated document.
//!
//! `resvg` ignores SMIL timelines, so the frame shows every glyph at its initial
//! transform: a poster image of the cascade.

use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::{GlyphfallError, GlyphfallResult};

const MAX_DIM: u32 = 16_384;

/// Straight-alpha RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct PreviewFrame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

#[derive(Clone, Debug, Default)]
pub struct PreviewOpts {
    /// Extra directories scanned for `.ttf`/`.otf`/`.ttc` files.
    pub font_dirs: Vec<PathBuf>,
    /// Skip system font discovery (glyph text then renders only from `font_dirs`).
    pub skip_system_fonts: bool,
    /// Output scale; `1.0` renders at the document's pixel size.
    pub scale: Option<f32>,
}

fn build_fontdb(opts: &PreviewOpts) -> std::sync::Arc<usvg::fontdb::Database> {
    let mut db = usvg::fontdb::Database::new();
    if !opts.skip_system_fonts {
        db.load_system_fonts();
    }
    for dir in &opts.font_dirs {
        load_fonts_from_dir(&mut db, dir);
    }
    tracing::debug!(faces = db.faces().count(), "loaded preview fonts");
    std::sync::Arc::new(db)
}

fn load_fonts_from_dir(db: &mut usvg::fontdb::Database, dir: &Path) {
    let Ok(rd) = std::fs::read_dir(dir) else {
        return;
    };

    for entry in rd.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        let ext = ext.to_ascii_lowercase();
        if ext != "ttf" && ext != "otf" && ext != "ttc" {
            continue;
        }
        let _ = db.load_font_file(&path);
    }
}

/// Parse `svg` and render its initial state.
#[tracing::instrument(skip(svg, opts))]
pub fn rasterize(svg: &str, opts: &PreviewOpts) -> GlyphfallResult<PreviewFrame> {
    let usvg_opts = usvg::Options {
        fontdb: build_fontdb(opts),
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(svg, &usvg_opts).context("parse generated svg")?;

    let scale = opts.scale.unwrap_or(1.0);
    if !scale.is_finite() || scale <= 0.0 {
        return Err(GlyphfallError::validation("preview scale must be > 0"));
    }

    let size = tree.size();
    let width = (size.width() * scale).ceil() as u32;
    let height = (size.height() * scale).ceil() as u32;
    if width == 0 || height == 0 || width > MAX_DIM || height > MAX_DIM {
        return Err(GlyphfallError::render(format!(
            "preview size out of range: {width}x{height} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| GlyphfallError::render("failed to allocate preview pixmap"))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    let mut data = pixmap.take();
    demultiply_rgba8_in_place(&mut data);
    Ok(PreviewFrame {
        width,
        height,
        data,
    })
}

/// Write `frame` as PNG, creating parent directories as needed.
pub fn write_png(frame: &PreviewFrame, out: &Path) -> GlyphfallResult<()> {
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out.display()))?;
    Ok(())
}

fn demultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/preview.rs"]
mod tests;

//! Grid cell drawing: thumbnail, selection border, ordinal and duration
//! badges.

use crate::utils::formatting::format_duration;
use eframe::egui;
use egui::{Align2, Color32, FontId, Pos2, Rect, Stroke, Vec2};
use rpicker::Asset;

/// Border color of selected cells.
pub const SELECTION_COLOR: Color32 = Color32::YELLOW;
/// Border thickness of selected cells, in points.
pub const SELECTION_STROKE_WIDTH: f32 = 3.0;
/// Diameter of the ordinal badge circle, in points.
const ORDINAL_BADGE_SIZE: f32 = 22.0;

/// Everything needed to draw one grid cell.
pub struct CellVisuals<'a> {
    pub rect: Rect,
    /// Uploaded thumbnail texture, if decoded already
    pub texture: Option<&'a egui::TextureHandle>,
    /// True when the thumbnail decode failed
    pub failed: bool,
    /// Asset metadata for the duration and cloud badges
    pub asset: Option<&'a Asset>,
    /// 1-based selection ordinal, if the cell is selected
    pub ordinal: Option<usize>,
}

/// Draws one grid cell.
pub fn paint_cell(painter: &egui::Painter, visuals: &CellVisuals) {
    let rect = visuals.rect;

    // Thumbnail or placeholder background
    if let Some(texture) = visuals.texture {
        painter.image(
            texture.id(),
            rect,
            Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(1.0, 1.0)),
            Color32::WHITE,
        );
    } else {
        let fill = if visuals.failed {
            Color32::from_rgb(60, 40, 40)
        } else {
            Color32::from_gray(45)
        };
        painter.rect_filled(rect, 0.0, fill);
        if visuals.failed {
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                "!",
                FontId::proportional(18.0),
                Color32::from_gray(160),
            );
        }
    }

    // Duration badge for videos, bottom-left
    if let Some(asset) = visuals.asset {
        if asset.is_video() {
            paint_duration_badge(painter, rect, asset.duration_secs);
        }
        if asset.is_cloud {
            painter.text(
                Pos2::new(rect.right() - 6.0, rect.bottom() - 6.0),
                Align2::RIGHT_BOTTOM,
                "☁",
                FontId::proportional(12.0),
                Color32::from_gray(220),
            );
        }
    }

    // Selection border and ordinal badge
    if let Some(ordinal) = visuals.ordinal {
        painter.rect_stroke(
            rect,
            0.0,
            Stroke::new(SELECTION_STROKE_WIDTH, SELECTION_COLOR),
            egui::StrokeKind::Inside,
        );
        paint_ordinal_badge(painter, rect, ordinal);
    }
}

fn paint_duration_badge(painter: &egui::Painter, rect: Rect, duration_secs: f64) {
    let text = format_duration(duration_secs);
    let pos = Pos2::new(rect.left() + 6.0, rect.bottom() - 6.0);
    let galley = painter.layout_no_wrap(text, FontId::monospace(12.0), Color32::WHITE);
    let text_rect = Align2::LEFT_BOTTOM.anchor_size(pos, galley.size());
    painter.rect_filled(
        text_rect.expand2(Vec2::new(4.0, 2.0)),
        2.0,
        Color32::from_black_alpha(160),
    );
    painter.galley(text_rect.min, galley, Color32::WHITE);
}

fn paint_ordinal_badge(painter: &egui::Painter, rect: Rect, ordinal: usize) {
    let center = Pos2::new(
        rect.right() - ORDINAL_BADGE_SIZE / 2.0 - 4.0,
        rect.top() + ORDINAL_BADGE_SIZE / 2.0 + 4.0,
    );
    painter.circle_filled(center, ORDINAL_BADGE_SIZE / 2.0, SELECTION_COLOR);
    painter.text(
        center,
        Align2::CENTER_CENTER,
        ordinal.to_string(),
        FontId::proportional(13.0),
        Color32::BLACK,
    );
}

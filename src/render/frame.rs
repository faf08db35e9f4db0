use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{LinePrimitive, RectPrimitive, TextPrimitive};

/// Visual layer a draw command belongs to, in painting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameLayer {
    Background,
    Axis,
    Ticks,
    Series,
}

/// One drawing primitive as seen by a backend.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect(RectPrimitive),
    Line(LinePrimitive),
    Text(TextPrimitive),
}

impl DrawCommand {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::FillRect(rect) => rect.validate(),
            Self::Line(line) => line.validate(),
            Self::Text(text) => text.validate(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrameEntry {
    pub layer: FrameLayer,
    pub command: DrawCommand,
}

/// Backend-agnostic scene for one chart draw pass.
///
/// Entries are kept in emission order; backends must paint them in that
/// order so the series line ends up above the background and axes.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub entries: Vec<FrameEntry>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            entries: Vec::new(),
        }
    }

    pub fn push_rect(&mut self, layer: FrameLayer, rect: RectPrimitive) {
        self.push(layer, DrawCommand::FillRect(rect));
    }

    pub fn push_line(&mut self, layer: FrameLayer, line: LinePrimitive) {
        self.push(layer, DrawCommand::Line(line));
    }

    pub fn push_text(&mut self, layer: FrameLayer, text: TextPrimitive) {
        self.push(layer, DrawCommand::Text(text));
    }

    fn push(&mut self, layer: FrameLayer, command: DrawCommand) {
        self.entries.push(FrameEntry { layer, command });
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.entries.iter().filter_map(|entry| match &entry.command {
            DrawCommand::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.entries.iter().filter_map(|entry| match &entry.command {
            DrawCommand::FillRect(rect) => Some(rect),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.entries.iter().filter_map(|entry| match &entry.command {
            DrawCommand::Text(text) => Some(text),
            _ => None,
        })
    }

    pub fn lines_in(&self, layer: FrameLayer) -> impl Iterator<Item = &LinePrimitive> {
        self.entries
            .iter()
            .filter(move |entry| entry.layer == layer)
            .filter_map(|entry| match &entry.command {
                DrawCommand::Line(line) => Some(line),
                _ => None,
            })
    }

    pub fn texts_in(&self, layer: FrameLayer) -> impl Iterator<Item = &TextPrimitive> {
        self.entries
            .iter()
            .filter(move |entry| entry.layer == layer)
            .filter_map(|entry| match &entry.command {
                DrawCommand::Text(text) => Some(text),
                _ => None,
            })
    }

    /// Layers in the order they first appear in the frame.
    #[must_use]
    pub fn layer_order(&self) -> Vec<FrameLayer> {
        let mut order: Vec<FrameLayer> = Vec::new();
        for entry in &self.entries {
            if order.last() != Some(&entry.layer) {
                order.push(entry.layer);
            }
        }
        order
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for entry in &self.entries {
            entry.command.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

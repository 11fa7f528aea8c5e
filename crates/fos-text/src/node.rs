//! Retained text node
//!
//! Owns the text and style of one scene-graph text shape and caches its
//! layout until something that affects it changes.

use std::cell::OnceCell;

use fos_canvas::{Context2D, TextMeasure};
use serde::{Deserialize, Serialize};

use crate::content::TextContent;
use crate::layout::{LaidOutLine, ParagraphLayout, TextLayout};
use crate::metrics::MeasuredSize;
use crate::render::{emit, CharHook, EmitOptions};
use crate::style::{Dimension, StyleConfig, TextAlign, WrapMode};
use crate::Result;

/// Node-local bounding box
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Attribute bag of a text node, as hosts serialize it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextAttrs {
    #[serde(default)]
    pub text: TextContent,
    #[serde(flatten)]
    pub style: StyleConfig,
}

/// Text node with a cached layout
#[derive(Debug)]
pub struct TextNode<M: TextMeasure> {
    text: TextContent,
    style: StyleConfig,
    measure: M,
    layout: OnceCell<TextLayout>,
}

impl<M: TextMeasure> TextNode<M> {
    /// Create an empty node measuring text with `measure`
    pub fn new(measure: M) -> Self {
        Self::from_attrs(TextAttrs::default(), measure)
    }

    /// Create a node from its attributes
    pub fn from_attrs(attrs: TextAttrs, measure: M) -> Self {
        Self {
            text: attrs.text,
            style: attrs.style,
            measure,
            layout: OnceCell::new(),
        }
    }

    /// Create a node from a JSON attribute object
    pub fn from_json(json: &str, measure: M) -> Result<Self> {
        let attrs: TextAttrs = serde_json::from_str(json)?;
        Ok(Self::from_attrs(attrs, measure))
    }

    /// Current attributes
    pub fn attrs(&self) -> TextAttrs {
        TextAttrs {
            text: self.text.clone(),
            style: self.style.clone(),
        }
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    pub fn set_text(&mut self, text: impl Into<TextContent>) {
        self.text = text.into();
        self.invalidate();
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Mutable style access; the cached layout is dropped
    pub fn style_mut(&mut self) -> &mut StyleConfig {
        self.invalidate();
        &mut self.style
    }

    pub fn set_style(&mut self, style: StyleConfig) {
        self.style = style;
        self.invalidate();
    }

    pub fn set_width(&mut self, width: impl Into<Dimension>) {
        self.style_mut().width = width.into();
    }

    pub fn set_height(&mut self, height: impl Into<Dimension>) {
        self.style_mut().height = height.into();
    }

    pub fn set_font_size(&mut self, size: f64) {
        self.style_mut().font_size = size;
    }

    pub fn set_font_family(&mut self, family: impl Into<String>) {
        self.style_mut().font_family = family.into();
    }

    pub fn set_line_height(&mut self, multiplier: f64) {
        self.style_mut().line_height = multiplier;
    }

    pub fn set_letter_spacing(&mut self, spacing: f64) {
        self.style_mut().letter_spacing = spacing;
    }

    pub fn set_padding(&mut self, padding: f64) {
        self.style_mut().padding = padding;
    }

    pub fn set_wrap(&mut self, wrap: WrapMode) {
        self.style_mut().wrap = wrap;
    }

    pub fn set_align(&mut self, align: TextAlign) {
        self.style_mut().align = align;
    }

    pub fn set_ellipsis(&mut self, ellipsis: bool) {
        self.style_mut().ellipsis = ellipsis;
    }

    /// Whether a layout is currently cached
    pub fn is_laid_out(&self) -> bool {
        self.layout.get().is_some()
    }

    fn invalidate(&mut self) {
        if self.layout.take().is_some() {
            tracing::trace!("text layout invalidated");
        }
    }

    /// Layout, computed on first access
    pub fn layout(&self) -> &TextLayout {
        self.layout
            .get_or_init(|| ParagraphLayout::new(&self.style).layout(self.text.as_str(), &self.measure))
    }

    pub fn lines(&self) -> &[LaidOutLine] {
        &self.layout().lines
    }

    /// Box width, fixed or the widest line plus padding
    pub fn width(&self) -> f64 {
        self.layout().width
    }

    /// Box height, fixed or all lines plus padding
    pub fn height(&self) -> f64 {
        self.layout().height
    }

    /// Width of the widest line
    pub fn text_width(&self) -> f64 {
        self.layout().text_width
    }

    /// Height of one line of text
    pub fn text_height(&self) -> f64 {
        self.layout().text_height
    }

    pub fn self_rect(&self) -> Rect {
        Rect {
            x: 0.0,
            y: 0.0,
            width: self.width(),
            height: self.height(),
        }
    }

    pub fn stroke_scale_enabled(&self) -> bool {
        self.style.stroke_scale_enabled
    }

    /// Measure `text` in this node's font with all metrics filled in
    pub fn measure_size(&self, text: &str) -> MeasuredSize {
        MeasuredSize::measure(&self.measure, text, &self.style.font_string(), self.style.font_size)
    }

    /// Draw the node at unit scale
    pub fn render(&self, ctx: &mut dyn Context2D, hook: Option<&mut dyn CharHook>) {
        self.render_with_options(ctx, hook, &EmitOptions::default());
    }

    /// Draw the node with scene-graph supplied options
    pub fn render_with_options(
        &self,
        ctx: &mut dyn Context2D,
        hook: Option<&mut dyn CharHook>,
        options: &EmitOptions,
    ) {
        emit(self.layout(), &self.style, ctx, hook, options);
    }
}

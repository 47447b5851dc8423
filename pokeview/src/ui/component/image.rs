//! Components for displaying images rendered as text.

use image::imageops::FilterType;
use image::Rgba;
use image::RgbaImage;

use pokecat::api::Blob;

use tui::layout::Alignment;
use tui::layout::Rect;
use tui::style::Color;
use tui::style::Modifier;
use tui::style::Style;
use tui::text::Span;
use tui::text::Spans;
use tui::text::Text;
use tui::widgets::Paragraph;
use tui::widgets::Widget;

use crate::fetch::Fetch;
use crate::ui::component::Component;
use crate::ui::component::RenderArgs;

/// A sprite, downloaded on first render and drawn as colored text.
///
/// Draws nothing until the PNG has arrived, and nothing ever if it fails to
/// download or decode.
#[derive(Debug)]
pub struct Sprite {
  blob: Blob,
  png: Option<Fetch<RgbaImage>>,
  raster: Option<(Rect, Text<'static>)>,
}

impl Sprite {
  pub fn new(blob: Blob) -> Self {
    Self {
      blob,
      png: None,
      raster: None,
    }
  }
}

impl Component for Sprite {
  fn render(&mut self, args: &mut RenderArgs) {
    if args.rect.height == 0 || args.rect.width == 0 {
      return;
    }

    let dex = args.dex;
    let blob = &self.blob;
    let image = match self.png.get_or_insert_with(|| dex.request_png(blob)).poll() {
      Some(image) => image,
      None => return,
    };

    let stale = match &self.raster {
      Some((rect, _)) => {
        rect.width != args.rect.width || rect.height != args.rect.height
      }
      None => true,
    };
    if stale {
      let text = rasterize(image, args.rect, args.style_sheet.font_height);
      self.raster = Some((args.rect, text));
    }
    let text = match &self.raster {
      Some((_, text)) => text,
      None => return,
    };

    let dy = args.rect.height.saturating_sub(text.lines.len() as u16) / 2;
    let rect = Rect::new(
      args.rect.x,
      args.rect.y + dy,
      args.rect.width,
      (text.lines.len() as u16).min(args.rect.height),
    );
    Paragraph::new(text.clone())
      .alignment(Alignment::Center)
      .render(rect, args.output);
  }
}

/// Scales `image` to fit in `rect` and turns it into one `@` per pixel.
///
/// `font_height` is how many times taller than wide a terminal cell is.
fn rasterize(image: &RgbaImage, rect: Rect, font_height: f64) -> Text<'static> {
  if image.width() == 0 || image.height() == 0 {
    return Text::default();
  }

  // NOTE: Wider rectangles have a smaller aspect ratio, while taller
  // rectangles have a greater one.
  let rect_aspect = rect.height as f64 / rect.width as f64;
  let image_aspect = image.height() as f64 / image.width() as f64;

  let (width, height) = if rect_aspect * font_height < image_aspect {
    let scale = rect.height as f64 / image.height() as f64;
    (
      (image.width() as f64 * scale * font_height) as u32,
      (image.height() as f64 * scale) as u32,
    )
  } else {
    let scale = rect.width as f64 / image.width() as f64;
    (
      (image.width() as f64 * scale) as u32,
      (image.height() as f64 * scale / font_height) as u32,
    )
  };
  if width == 0 || height == 0 {
    return Text::default();
  }

  // Black out transparent pixels so they don't bleed white into their
  // neighbors when filtered.
  let mut image = image.clone();
  for Rgba([r, g, b, a]) in image.pixels_mut() {
    if *a == 0 {
      *r = 0;
      *g = 0;
      *b = 0;
    }
  }

  // The nearest-neighbor copy is only used as an alpha mask.
  let mask = image::imageops::resize(&image, width, height, FilterType::Nearest);
  let mut resized =
    image::imageops::resize(&image, width, height, FilterType::Triangle);
  for (Rgba([_, _, _, a]), Rgba([_, _, _, out])) in
    mask.pixels().zip(resized.pixels_mut())
  {
    *out = *a;
  }

  let mut text = Text::default();
  for row in resized.rows() {
    let spans = row
      .map(|&Rgba([r, g, b, a])| {
        Span::styled(
          if a != 0 { "@" } else { " " },
          Style::default()
            .fg(Color::Rgb(r, g, b))
            .add_modifier(Modifier::BOLD),
        )
      })
      .collect::<Vec<_>>();
    text.lines.push(Spans::from(spans));
  }
  text
}

//! Components for displaying a Pokemon's base stats.

use std::iter;
use std::sync::Arc;

use pokecat::model::Pokemon;
use pokecat::model::StatName;

use tui::text::Span;
use tui::text::Spans;

use crate::ui::component::Component;
use crate::ui::component::RenderArgs;
use crate::util;

/// Base stats as a table of bars, with a total underneath.
#[derive(Clone, Debug)]
pub struct StatsView {
  pokemon: Arc<Pokemon>,
}

impl StatsView {
  pub fn new(pokemon: Arc<Pokemon>) -> Self {
    Self { pokemon }
  }

  /// Returns how many rows this view wants: one per stat plus the total.
  pub fn height(&self) -> u16 {
    self.pokemon.stat_values().len() as u16 + 1
  }
}

impl Component for StatsView {
  fn render(&mut self, args: &mut RenderArgs) {
    if args.rect.height == 0 || args.rect.width == 0 {
      return;
    }

    let style = args.style_sheet.unfocused;
    let stats = self.pokemon.stat_values();
    let names = stats
      .iter()
      .map(|&(name, _)| util::display_name(name, args.style_sheet.format_names))
      .collect::<Vec<_>>();
    let name_width = names.iter().map(|n| n.len()).max().unwrap_or(0);

    // Each line looks like this:
    // special defense  65 //////////
    // ---------------____
    //  name_width      5 chars
    let data_width = name_width + 5;
    let bar_width = (args.rect.width as usize).saturating_sub(data_width);

    let y_max = args.rect.y + args.rect.height;
    let mut y = args.rect.y;
    let mut total = 0;
    for (&(api_name, value), name) in stats.iter().zip(&names) {
      if y >= y_max {
        return;
      }
      total += value;

      let color = StatName::from_api_name(api_name)
        .map(|stat| args.style_sheet.stat_colors.get(stat))
        .unwrap_or(args.style_sheet.stat_colors.other);

      // Clamped at 200 rather than the true maximum of 255, since only a
      // couple of outliers go above it.
      let ratio = (value as f64 / 200.0).clamp(0.0, 1.0);
      let colored = (bar_width as f64 * ratio) as usize;

      let spans = Spans::from(vec![
        Span::styled(
          format!("{:width$} {:3} ", name, value, width = name_width),
          style,
        ),
        Span::styled(
          iter::repeat('/').take(colored).collect::<String>(),
          style.fg(color),
        ),
      ]);
      args.output.set_spans(args.rect.x, y, &spans, args.rect.width);
      y += 1;
    }

    if y >= y_max {
      return;
    }
    args.output.set_stringn(
      args.rect.x,
      y,
      format!("{:width$} {:3}", "total", total, width = name_width),
      args.rect.width as usize,
      style,
    );
  }
}
